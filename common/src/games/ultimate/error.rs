use thiserror::Error;

use super::board::Sector;
use super::types::Participant;

/// Why a requested move was refused. The board is untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("game is already over")]
    GameOver,

    #[error("it is the {expected} player's turn")]
    NotYourTurn { expected: Participant },

    #[error("cell {index} is out of bounds (must be 0-80)")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("cell {index} is outside the required sector {required}")]
    WrongSector { index: usize, required: Sector },

    #[error("no legal moves available")]
    NoLegalMoves,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("search depth {depth} must be between {min} and {max}")]
    InvalidSearchDepth {
        depth: usize,
        min: usize,
        max: usize,
    },
}
