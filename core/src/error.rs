use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Column is full")]
    ColumnFull,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("No moves to undo")]
    NothingToUndo,
    #[error("Board must be at least 4 rows by 4 columns")]
    InvalidDimensions,
    #[error("Move history does not match the board")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, GameError>;
