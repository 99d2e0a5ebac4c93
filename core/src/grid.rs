use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size board of cells, filled bottom-up.
///
/// Row 0 is the top of the board, so the bottom row has index `rows - 1`. The
/// grid keeps a running count of occupied cells to answer [`Grid::is_full`]
/// without a rescan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    cells: Array2<Cell>,
    occupied: CellCount,
}

/// Serialized form of [`Grid`]; the occupied counter is recomputed on load.
#[derive(Deserialize)]
struct GridRepr {
    cells: Array2<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GameError;

    fn try_from(GridRepr { cells }: GridRepr) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let rows = Coord::try_from(rows).map_err(|_| GameError::InvalidDimensions)?;
        let cols = Coord::try_from(cols).map_err(|_| GameError::InvalidDimensions)?;

        let mut grid = Self::new(rows, cols)?;
        for ((row, col), &cell) in cells.indexed_iter() {
            // indices are below `rows`/`cols`, both already `Coord`
            grid.set(row as Coord, col as Coord, cell)?;
        }
        Ok(grid)
    }
}

impl Grid {
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows < MIN_SIZE || cols < MIN_SIZE {
            return Err(GameError::InvalidDimensions);
        }

        Ok(Self::new_unchecked(rows, cols))
    }

    pub(crate) fn new_unchecked(rows: Coord, cols: Coord) -> Self {
        Self {
            cells: Array2::default((rows, cols).to_nd_index()),
            occupied: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions come from `Coord` values in `new`
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn occupied_count(&self) -> CellCount {
        self.occupied
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn validate_column(&self, col: Coord) -> Result<Coord> {
        if col < self.cols() {
            Ok(col)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, row: Coord, col: Coord) -> Result<Cell> {
        let coords = self.validate_coords((row, col))?;
        Ok(self[coords])
    }

    pub fn set(&mut self, row: Coord, col: Coord, content: Cell) -> Result<()> {
        let coords = self.validate_coords((row, col))?;
        let slot = &mut self.cells[coords.to_nd_index()];

        match (slot.is_empty(), content.is_empty()) {
            (true, false) => self.occupied += 1,
            (false, true) => self.occupied -= 1,
            _ => {}
        }
        *slot = content;

        Ok(())
    }

    /// Bottom-most empty row of `col`, which is where a dropped token lands.
    pub fn lowest_empty_row(&self, col: Coord) -> Result<Coord> {
        let col = self.validate_column(col)?;
        (0..self.rows())
            .rev()
            .find(|&row| self[(row, col)].is_empty())
            .ok_or(GameError::ColumnFull)
    }

    pub fn is_column_full(&self, col: Coord) -> Result<bool> {
        match self.lowest_empty_row(col) {
            Ok(_) => Ok(false),
            Err(GameError::ColumnFull) => Ok(true),
            Err(err) => Err(err),
        }
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.total_cells()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.occupied = 0;
    }

    /// Cells holding `player`'s tokens, contiguous from `origin` (exclusive)
    /// along `delta`.
    pub fn run_from(
        &self,
        origin: Coord2,
        delta: Delta,
        player: Player,
    ) -> impl Iterator<Item = Coord2> + '_ {
        let token = Cell::from(player);
        RayIter::new(origin, delta, self.size()).take_while(move |&pos| self[pos] == token)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(6, 7).unwrap();

        assert_eq!(grid.size(), (6, 7));
        assert_eq!(grid.total_cells(), 42);
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.is_full());
        assert!(grid.iter_rows().flatten().all(Cell::is_empty));
    }

    #[test]
    fn rejects_boards_too_small_for_a_run() {
        assert_eq!(Grid::new(3, 7), Err(GameError::InvalidDimensions));
        assert_eq!(Grid::new(6, 3), Err(GameError::InvalidDimensions));
        assert!(Grid::new(4, 4).is_ok());
    }

    #[test]
    fn access_is_bounds_checked() {
        let mut grid = Grid::new(6, 7).unwrap();

        assert_eq!(grid.get(6, 0), Err(GameError::OutOfBounds));
        assert_eq!(grid.get(0, 7), Err(GameError::OutOfBounds));
        assert_eq!(grid.set(6, 0, Cell::PlayerA), Err(GameError::OutOfBounds));
        assert_eq!(grid.lowest_empty_row(7), Err(GameError::OutOfBounds));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn lowest_empty_row_fills_bottom_up() {
        let mut grid = Grid::new(4, 4).unwrap();

        for expected in (0..4).rev() {
            let row = grid.lowest_empty_row(2).unwrap();
            assert_eq!(row, expected);
            grid.set(row, 2, Cell::PlayerB).unwrap();
        }

        assert_eq!(grid.lowest_empty_row(2), Err(GameError::ColumnFull));
        assert_eq!(grid.is_column_full(2), Ok(true));
        assert_eq!(grid.is_column_full(1), Ok(false));
    }

    #[test]
    fn occupied_counter_tracks_transitions() {
        let mut grid = Grid::new(4, 4).unwrap();

        grid.set(3, 0, Cell::PlayerA).unwrap();
        grid.set(3, 0, Cell::PlayerB).unwrap();
        assert_eq!(grid.occupied_count(), 1);

        grid.set(3, 0, Cell::Empty).unwrap();
        grid.set(3, 0, Cell::Empty).unwrap();
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn full_after_every_cell_is_set() {
        let mut grid = Grid::new(4, 5).unwrap();

        for row in 0..4 {
            for col in 0..5 {
                assert!(!grid.is_full());
                grid.set(row, col, Cell::PlayerA).unwrap();
            }
        }

        assert!(grid.is_full());
        grid.clear();
        assert_eq!(grid, Grid::new(4, 5).unwrap());
    }

    #[test]
    fn run_from_stops_at_other_tokens() {
        let mut grid = Grid::new(6, 7).unwrap();
        grid.set(5, 1, Cell::PlayerA).unwrap();
        grid.set(5, 2, Cell::PlayerA).unwrap();
        grid.set(5, 3, Cell::PlayerB).unwrap();

        let run: Vec<_> = grid.run_from((5, 0), (0, 1), Player::PlayerA).collect();

        assert_eq!(run, [(5, 1), (5, 2)]);
    }

    #[test]
    fn deserializing_recounts_occupied_cells() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(3, 0, Cell::PlayerA).unwrap();
        let mut json = serde_json::to_value(&grid).unwrap();
        json["occupied"] = serde_json::json!(0);

        let mut restored: Grid = serde_json::from_value(json).unwrap();

        assert_eq!(restored, grid);
        restored.set(3, 0, Cell::Empty).unwrap();
        assert_eq!(restored.occupied_count(), 0);
    }

    #[test]
    fn deserializing_rejects_small_boards() {
        let cells: Array2<Cell> = Array2::default([4, 3]);
        let json = serde_json::json!({ "cells": cells, "occupied": 0 });

        assert!(serde_json::from_value::<Grid>(json).is_err());
    }

    #[test]
    fn display_prints_rows_top_to_bottom() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(3, 0, Cell::PlayerA).unwrap();
        grid.set(2, 0, Cell::PlayerB).unwrap();

        assert_eq!(grid.to_string(), "....\n....\nB...\nA...");
    }
}
