/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for occupied-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, row 0 being the top of the board.
pub type Coord2 = (Coord, Coord);

/// Step applied to a `(row, col)` pair when walking along an axis.
pub type Delta = (isize, isize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// The four line axes a run can lie on: horizontal, vertical, and both diagonals.
pub const AXES: [Delta; 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub const fn reverse((dr, dc): Delta) -> Delta {
    (-dr, -dc)
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub fn apply_delta(coords: Coord2, delta: Delta, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Walks from `start` (exclusive) along `delta` until the board edge.
#[derive(Debug)]
pub struct RayIter {
    current: Coord2,
    delta: Delta,
    bounds: Coord2,
}

impl RayIter {
    pub fn new(start: Coord2, delta: Delta, bounds: Coord2) -> Self {
        Self {
            current: start,
            delta,
            bounds,
        }
    }
}

impl Iterator for RayIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let next = apply_delta(self.current, self.delta, self.bounds)?;
        self.current = next;
        Some(next)
    }
}
