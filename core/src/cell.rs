use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerA,
    PlayerB,
}

impl Player {
    pub const fn other(self) -> Self {
        match self {
            Self::PlayerA => Self::PlayerB,
            Self::PlayerB => Self::PlayerA,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::PlayerA => 'A',
            Self::PlayerB => 'B',
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::PlayerA
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerA => f.write_str("player A"),
            Self::PlayerB => f.write_str("player B"),
        }
    }
}

/// Content of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerA => Some(Player::PlayerA),
            Self::PlayerB => Some(Player::PlayerB),
        }
    }

    pub const fn symbol(self) -> char {
        match self.owner() {
            Some(player) => player.symbol(),
            None => '.',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerA => Self::PlayerA,
            Player::PlayerB => Self::PlayerB,
        }
    }
}
