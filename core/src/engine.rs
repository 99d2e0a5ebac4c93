use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Cells of a winning run, ordered from one end to the other.
pub type WinningLine = SmallVec<[Coord2; 8]>;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Draw
/// - Won | Draw -> InProgress (undo or reset only)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Draw,
    Won(Player),
}

impl GameStatus {
    /// Indicates the game has ended and no drops are accepted anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Draw | Self::Won(_))
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            Self::InProgress | Self::Draw => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in progress"),
            Self::Draw => f.write_str("draw"),
            Self::Won(player) => write!(f, "{player} won"),
        }
    }
}

/// A single accepted drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub column: Coord,
    pub row: Coord,
    pub player: Player,
}

impl Move {
    pub const fn coords(&self) -> Coord2 {
        (self.row, self.column)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EngineRepr")]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    history: Vec<Move>,
    turn: Player,
    status: GameStatus,
    winning_line: WinningLine,
}

#[derive(Deserialize)]
struct EngineRepr {
    config: GameConfig,
    grid: Grid,
    history: Vec<Move>,
    turn: Player,
    status: GameStatus,
    winning_line: WinningLine,
}

/// Rebuilds the engine by replaying the stored history, so every loaded
/// engine is one that `drop` could have produced.
impl TryFrom<EngineRepr> for GameEngine {
    type Error = GameError;

    fn try_from(repr: EngineRepr) -> Result<Self> {
        let mut engine = Self::new(repr.config)?;

        for &recorded in &repr.history {
            if recorded.player != engine.turn {
                return Err(GameError::InconsistentState);
            }
            engine
                .drop(recorded.column)
                .map_err(|_| GameError::InconsistentState)?;
            if engine.last_move() != Some(recorded) {
                return Err(GameError::InconsistentState);
            }
        }

        let matches = engine.grid == repr.grid
            && engine.turn == repr.turn
            && engine.status == repr.status
            && engine.winning_line == repr.winning_line;
        if !matches {
            return Err(GameError::InconsistentState);
        }

        log::debug!("restored engine with {} moves", engine.history.len());
        Ok(engine)
    }
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self> {
        let grid = Grid::new(config.rows, config.cols)?;
        Ok(Self::with_grid(config, grid))
    }

    fn with_grid(config: GameConfig, grid: Grid) -> Self {
        Self {
            config,
            grid,
            history: Vec::new(),
            turn: config.first,
            status: Default::default(),
            winning_line: WinningLine::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn cell_at(&self, row: Coord, col: Coord) -> Result<Cell> {
        self.grid.get(row, col)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Cells forming the winning run, empty unless the game was won.
    pub fn winning_line(&self) -> &[Coord2] {
        &self.winning_line
    }

    pub fn can_drop(&self, col: Coord) -> bool {
        !self.is_finished() && self.grid.is_column_full(col) == Ok(false)
    }

    /// Columns that currently accept a drop, none once the game is over.
    pub fn legal_columns(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.grid.cols()).filter(|&col| self.can_drop(col))
    }

    /// Drops the current player's token into `col` and returns the resulting status.
    ///
    /// A rejected drop leaves the engine untouched.
    pub fn drop(&mut self, col: Coord) -> Result<GameStatus> {
        self.check_in_progress()?;
        let row = self.grid.lowest_empty_row(col)?;

        let player = self.turn;
        self.grid.set(row, col, player.into())?;
        self.history.push(Move {
            column: col,
            row,
            player,
        });
        log::debug!("{player} dropped into column {col}, landed on row {row}");

        if let Some(line) = self.find_winning_line((row, col), player) {
            self.winning_line = line;
            self.end_game(GameStatus::Won(player));
        } else if self.grid.is_full() {
            self.end_game(GameStatus::Draw);
        } else {
            self.turn = player.other();
        }

        Ok(self.status)
    }

    /// Takes back the most recent drop, reopening the game if it had ended.
    pub fn undo(&mut self) -> Result<Move> {
        let last = self.last_move().ok_or(GameError::NothingToUndo)?;
        let (row, col) = last.coords();
        self.grid.set(row, col, Cell::Empty)?;
        self.history.pop();

        self.turn = last.player;
        self.status = GameStatus::InProgress;
        self.winning_line.clear();
        log::debug!(
            "undid {} in column {}, {} moves left",
            last.player,
            last.column,
            self.history.len()
        );

        Ok(last)
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.history.clear();
        self.turn = self.config.first;
        self.status = GameStatus::InProgress;
        self.winning_line.clear();
        log::debug!("board reset, {} to move", self.turn);
    }

    fn end_game(&mut self, status: GameStatus) {
        self.status = status;
        log::info!("game over after {} moves: {status}", self.history.len());
    }

    /// Scans the four axes through `origin`, counting `player`'s tokens on both sides.
    fn find_winning_line(&self, origin: Coord2, player: Player) -> Option<WinningLine> {
        AXES.into_iter().find_map(|axis| {
            let mut line: WinningLine =
                self.grid.run_from(origin, reverse(axis), player).collect();
            line.reverse();
            line.push(origin);
            line.extend(self.grid.run_from(origin, axis, player));

            log::trace!("axis {axis:?} through {origin:?}: run of {}", line.len());
            (line.len() >= WIN_LENGTH).then_some(line)
        })
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        let config = GameConfig::standard();
        Self::with_grid(config, Grid::new_unchecked(config.rows, config.cols))
    }
}
