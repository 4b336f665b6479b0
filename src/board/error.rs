use thiserror::Error;

use super::model::{Location, Side};

pub const MIN_BOARD_SIZE: u8 = 3;
pub const MAX_BOARD_SIZE: u8 = 26;

/// Precondition violations surfaced by the board engine.
///
/// None of these are recoverable where they are detected; they propagate to
/// the caller, which decides whether to reprompt, abort the game or exit.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {0}")]
    InvalidBoardSize(i64),

    #[error("there is no {0} king on the board")]
    MissingKing(Side),

    #[error("{0} must have exactly one king")]
    DuplicateKing(Side),

    #[error("no piece at {0}")]
    PieceNotFound(Location),

    #[error("{0} has no legal move")]
    NoLegalMove(Side),

    #[error("piece at {0} is outside the board")]
    OffBoard(Location),

    #[error("two pieces occupy {0}")]
    OverlappingPieces(Location),

    #[error("invalid board configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
