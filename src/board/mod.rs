pub mod error;
pub use error::{BoardError, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub mod model;
pub use model::{Board, Location, Piece, PieceKind, Side};
pub mod plain;
pub mod render;
mod rules;
