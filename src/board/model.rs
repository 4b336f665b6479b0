use std::fmt;

use super::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Bishop,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "K"),
            PieceKind::Bishop => write!(f, "B"),
        }
    }
}

/// A 1-based board coordinate: `x` is the column (a = 1), `y` is the row.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Location {
    pub x: u8,
    pub y: u8,
}

impl Location {
    /// Coordinates are 1-based; `x` or `y` of 0 never names a square and
    /// would break the textual rendering.
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x >= 1 && y >= 1, "locations are 1-based, got ({}, {})", x, y);
        Self { x, y }
    }

    /// Parses a textual location like "e2" or "c12" (column letter, then row).
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        let mut chars = text.chars();
        let column = chars
            .next()
            .ok_or_else(|| BoardError::InvalidConfig(format!("empty location in '{}'", text)))?;
        if !column.is_ascii_lowercase() {
            return Err(BoardError::InvalidConfig(format!(
                "invalid column letter in location '{}'",
                text
            )));
        }
        let row: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| BoardError::InvalidConfig(format!("invalid row number in location '{}'", text)))?;
        if row == 0 {
            return Err(BoardError::InvalidConfig(format!(
                "row must be at least 1 in location '{}'",
                text
            )));
        }
        Ok(Self {
            x: column as u8 - b'a' + 1,
            y: row,
        })
    }

    pub fn as_text(&self) -> String {
        let column = (b'a' + self.x - 1) as char;
        format!("{}{}", column, self.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub pos: Location,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, pos: Location) -> Self {
        Self { kind, side, pos }
    }

    pub fn glyph(&self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '\u{2654}',   // ♔
            (Side::White, PieceKind::Bishop) => '\u{2657}', // ♗
            (Side::Black, PieceKind::King) => '\u{265A}',   // ♚
            (Side::Black, PieceKind::Bishop) => '\u{265D}', // ♝
        }
    }
}

/// An immutable board: a fixed size and the pieces currently placed.
///
/// Every mutating operation returns a new `Board`; an existing board value
/// is never altered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub size: u8,
    pub pieces: Vec<Piece>,
}

impl Board {
    pub fn new(size: u8, pieces: Vec<Piece>) -> Self {
        Self { size, pieces }
    }

    pub fn contains(&self, loc: Location) -> bool {
        (1..=self.size).contains(&loc.x) && (1..=self.size).contains(&loc.y)
    }

    pub fn piece_at(&self, loc: Location) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos == loc)
    }

    pub fn is_piece_at(&self, loc: Location) -> bool {
        self.piece_at(loc).is_some()
    }

    /// Like `piece_at`, but an empty square is a caller error.
    pub fn require_piece_at(&self, loc: Location) -> Result<&Piece, BoardError> {
        self.piece_at(loc).ok_or(BoardError::PieceNotFound(loc))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.side == side)
    }

    pub fn find_king(&self, side: Side) -> Result<&Piece, BoardError> {
        self.pieces
            .iter()
            .find(|p| p.kind == PieceKind::King && p.side == side)
            .ok_or(BoardError::MissingKing(side))
    }
}
