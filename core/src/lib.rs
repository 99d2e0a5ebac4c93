#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod types;

/// Number of contiguous tokens needed to win.
pub const WIN_LENGTH: usize = 4;

/// Smallest board side that can still hold a winning run.
pub const MIN_SIZE: Coord = 4;

pub const DEFAULT_ROWS: Coord = 6;
pub const DEFAULT_COLS: Coord = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub first: Player,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, first: Player) -> Self {
        Self { rows, cols, first }
    }

    pub fn new(rows: Coord, cols: Coord, first: Player) -> Result<Self> {
        if rows < MIN_SIZE || cols < MIN_SIZE {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::new_unchecked(rows, cols, first))
    }

    /// Classic 6x7 board, player A opens.
    pub const fn standard() -> Self {
        Self::new_unchecked(DEFAULT_ROWS, DEFAULT_COLS, Player::PlayerA)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_small_boards() {
        assert_eq!(
            GameConfig::new(3, 7, Player::PlayerA),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            GameConfig::new(6, 2, Player::PlayerB),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn standard_config_is_six_by_seven() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (6, 7));
        assert_eq!(config.total_cells(), 42);
        assert_eq!(config.first, Player::PlayerA);
    }
}
