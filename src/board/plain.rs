use std::fs;
use std::path::Path;

use super::error::{BoardError, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::{Board, Location, Piece, PieceKind, Side};

/// Parses a plain-format board configuration.
///
/// Line 1 holds the board size, line 2 the White pieces and line 3 the Black
/// pieces as comma separated tokens like `Ke1` or `ba5`. The returned board
/// is guaranteed to hold exactly one king per side, all pieces inside the
/// board and no two pieces on the same square.
pub fn from_plain(text: &str) -> Result<Board, BoardError> {
    let mut lines = text.lines();

    let size_line = lines
        .next()
        .ok_or_else(|| BoardError::InvalidConfig("the configuration is empty".to_string()))?;
    let size: i64 = size_line
        .trim()
        .parse()
        .map_err(|_| BoardError::InvalidConfig(format!("invalid board size: '{}'", size_line.trim())))?;
    if !(MIN_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64).contains(&size) {
        return Err(BoardError::InvalidBoardSize(size));
    }
    let size = size as u8;

    let mut pieces = parse_pieces(lines.next().unwrap_or(""), Side::White)?;
    pieces.extend(parse_pieces(lines.next().unwrap_or(""), Side::Black)?);

    let board = Board::new(size, pieces);
    validate(&board)?;
    Ok(board)
}

fn parse_pieces(line: &str, side: Side) -> Result<Vec<Piece>, BoardError> {
    let mut pieces = Vec::new();
    if line.trim().is_empty() {
        return Ok(pieces);
    }

    for token in line.split(',') {
        let token = token.trim().to_ascii_lowercase();
        let mut chars = token.chars();
        let kind = match chars.next() {
            Some('k') => PieceKind::King,
            Some('b') => PieceKind::Bishop,
            _ => {
                return Err(BoardError::InvalidConfig(format!("invalid piece token: '{}'", token)));
            }
        };
        let pos = Location::from_text(chars.as_str())?;
        pieces.push(Piece::new(kind, side, pos));
    }
    Ok(pieces)
}

fn validate(board: &Board) -> Result<(), BoardError> {
    for piece in &board.pieces {
        if !board.contains(piece.pos) {
            return Err(BoardError::OffBoard(piece.pos));
        }
    }

    for (i, piece) in board.pieces.iter().enumerate() {
        if board.pieces[..i].iter().any(|other| other.pos == piece.pos) {
            return Err(BoardError::OverlappingPieces(piece.pos));
        }
    }

    for side in [Side::White, Side::Black] {
        let kings = board
            .pieces_of(side)
            .filter(|p| p.kind == PieceKind::King)
            .count();
        match kings {
            0 => return Err(BoardError::MissingKing(side)),
            1 => {}
            _ => return Err(BoardError::DuplicateKing(side)),
        }
    }
    Ok(())
}

pub fn to_plain(board: &Board) -> String {
    let tokens = |side: Side| {
        board
            .pieces_of(side)
            .map(|p| format!("{}{}", p.kind, p.pos))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{}\n{}\n{}\n",
        board.size,
        tokens(Side::White),
        tokens(Side::Black)
    )
}

pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Board, BoardError> {
    let text = fs::read_to_string(path)?;
    from_plain(&text)
}

pub fn save_board<P: AsRef<Path>>(path: P, board: &Board) -> Result<(), BoardError> {
    fs::write(path, to_plain(board))?;
    Ok(())
}
