use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::board::{Board, BoardError, Location, Side};
use crate::opponent::choose_random_move;

/// Explicit game state threaded through the turn loop.
///
/// `Check`, `Checkmate` and `Stalemate` carry the side that is in check,
/// mated or stuck; for `Check` that side still has to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingWhiteMove,
    AwaitingBlackMove,
    Check(Side),
    Checkmate(Side),
    Stalemate(Side),
}

impl GameState {
    pub fn side_to_move(&self) -> Option<Side> {
        match self {
            GameState::AwaitingWhiteMove => Some(Side::White),
            GameState::AwaitingBlackMove => Some(Side::Black),
            GameState::Check(side) => Some(*side),
            GameState::Checkmate(_) | GameState::Stalemate(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.side_to_move().is_none()
    }
}

/// Outcome of submitting a move, used by the prompt loop to decide what to
/// tell the player before reprompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Played,
    NoPieceAtSource,
    WrongSide,
    Illegal,
}

pub struct Game {
    pub board: Board,
    pub state: GameState,
    rng: Pcg64,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self::with_rng(board, Pcg64::from_entropy())
    }

    /// A game with a deterministic automated opponent.
    pub fn with_seed(board: Board, seed: u64) -> Self {
        Self::with_rng(board, Pcg64::seed_from_u64(seed))
    }

    fn with_rng(board: Board, rng: Pcg64) -> Self {
        Self {
            board,
            state: GameState::AwaitingWhiteMove,
            rng,
        }
    }

    pub fn side_to_move(&self) -> Option<Side> {
        self.state.side_to_move()
    }

    /// Re-classifies the starting position for White, so that a loaded
    /// board that is already check, checkmate or stalemate starts in the
    /// matching state.
    pub fn classify_start(&mut self) -> Result<(), BoardError> {
        self.state = evaluate(&self.board, Side::White)?;
        Ok(())
    }

    /// Submits a move for the side to move. On success the board is
    /// replaced by the resulting board and the state advances to the
    /// opponent's turn, re-classified as check/checkmate/stalemate.
    pub fn submit_move(&mut self, from: Location, to: Location) -> Result<MoveStatus, BoardError> {
        let side = match self.side_to_move() {
            Some(side) => side,
            None => return Ok(MoveStatus::Illegal),
        };
        let piece = match self.board.piece_at(from) {
            Some(piece) => *piece,
            None => return Ok(MoveStatus::NoPieceAtSource),
        };
        if piece.side != side {
            return Ok(MoveStatus::WrongSide);
        }
        if !self.board.contains(to) {
            return Ok(MoveStatus::Illegal);
        }
        if !piece.can_move_to(to, &self.board)? {
            return Ok(MoveStatus::Illegal);
        }

        self.board = piece.move_to(to, &self.board);
        self.state = evaluate(&self.board, side.opposite())?;
        Ok(MoveStatus::Played)
    }

    /// Plays one random move for the side to move and returns its source
    /// and target squares.
    pub fn auto_move(&mut self) -> Result<(Location, Location), BoardError> {
        let side = match self.state {
            GameState::AwaitingWhiteMove => Side::White,
            GameState::AwaitingBlackMove => Side::Black,
            GameState::Check(side) => side,
            GameState::Checkmate(side) | GameState::Stalemate(side) => {
                return Err(BoardError::NoLegalMove(side));
            }
        };
        let (piece, to) = choose_random_move(side, &self.board, &mut self.rng)?;
        let from = piece.pos;

        self.board = piece.move_to(to, &self.board);
        self.state = evaluate(&self.board, side.opposite())?;
        Ok((from, to))
    }
}

/// Classifies the position for the side about to move.
fn evaluate(board: &Board, to_move: Side) -> Result<GameState, BoardError> {
    if board.is_checkmate(to_move)? {
        return Ok(GameState::Checkmate(to_move));
    }
    if board.is_stalemate(to_move)? {
        return Ok(GameState::Stalemate(to_move));
    }
    if board.is_check(to_move)? {
        return Ok(GameState::Check(to_move));
    }
    Ok(match to_move {
        Side::White => GameState::AwaitingWhiteMove,
        Side::Black => GameState::AwaitingBlackMove,
    })
}

/// Splits concatenated move text like "e2e3" or "a10b12" into source and
/// target locations. The destination starts at the second column letter.
pub fn parse_move(text: &str) -> Option<(Location, Location)> {
    let text = text.trim();
    let (split, _) = text
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c.is_ascii_alphabetic())?;
    let from = Location::from_text(&text[..split]).ok()?;
    let to = Location::from_text(&text[split..]).ok()?;
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::plain::from_plain;

    fn loc(text: &str) -> Location {
        Location::from_text(text).unwrap()
    }

    #[test]
    fn parse_move_splits_location_pairs() {
        assert_eq!(parse_move("e2e3"), Some((loc("e2"), loc("e3"))));
        assert_eq!(parse_move(" a1b2 \n"), Some((loc("a1"), loc("b2"))));
        assert_eq!(parse_move("a10b12"), Some((loc("a10"), loc("b12"))));
        assert_eq!(parse_move("e2"), None);
        assert_eq!(parse_move("e2e0"), None);
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("22e3"), None);
    }

    #[test]
    fn submit_move_reports_bad_input() {
        let board = from_plain("8\nKe1, Ba1\nKe8\n").unwrap();
        let mut game = Game::with_seed(board, 1);

        assert_eq!(
            game.submit_move(loc("d4"), loc("d5")).unwrap(),
            MoveStatus::NoPieceAtSource
        );
        assert_eq!(
            game.submit_move(loc("e8"), loc("e7")).unwrap(),
            MoveStatus::WrongSide
        );
        assert_eq!(
            game.submit_move(loc("a1"), loc("a2")).unwrap(),
            MoveStatus::Illegal
        );
        // nothing happened to the game
        assert_eq!(game.state, GameState::AwaitingWhiteMove);
    }

    #[test]
    fn submit_move_rejects_off_board_destinations() {
        // "i1" parses fine but x=9 is outside an 8x8 board; the king must
        // stay where it is.
        let board = from_plain("8\nKh1\nKa8\n").unwrap();
        let mut game = Game::with_seed(board, 1);

        assert_eq!(
            game.submit_move(loc("h1"), loc("i1")).unwrap(),
            MoveStatus::Illegal
        );
        assert_eq!(
            game.submit_move(loc("h1"), loc("h9")).unwrap(),
            MoveStatus::Illegal
        );
        assert_eq!(game.state, GameState::AwaitingWhiteMove);
        let king = game.board.require_piece_at(loc("h1")).unwrap();
        assert!(game.board.contains(king.pos));
    }

    #[test]
    fn submit_move_alternates_turns() {
        let board = from_plain("8\nKe1, Ba1\nKe8\n").unwrap();
        let mut game = Game::with_seed(board, 1);

        assert_eq!(game.submit_move(loc("a1"), loc("c3")).unwrap(), MoveStatus::Played);
        assert_eq!(game.state, GameState::AwaitingBlackMove);
        assert!(game.board.is_piece_at(loc("c3")));
    }

    #[test]
    fn giving_check_is_reflected_in_the_state() {
        let board = from_plain("8\nKe1, Be3\nKh8\n").unwrap();
        let mut game = Game::with_seed(board, 1);

        // Bd4 attacks h8 along the long diagonal.
        assert_eq!(game.submit_move(loc("e3"), loc("d4")).unwrap(), MoveStatus::Played);
        assert_eq!(game.state, GameState::Check(Side::Black));
        assert_eq!(game.side_to_move(), Some(Side::Black));
        assert!(!game.state.is_over());
    }

    #[test]
    fn mating_move_ends_the_game() {
        let board = from_plain("8\nKb6, Bc4, Bf4\nKa8\n").unwrap();
        let mut game = Game::with_seed(board, 1);

        assert_eq!(game.submit_move(loc("c4"), loc("d5")).unwrap(), MoveStatus::Played);
        assert_eq!(game.state, GameState::Checkmate(Side::Black));
        assert!(game.state.is_over());
        assert_eq!(game.side_to_move(), None);
        assert_eq!(game.submit_move(loc("a8"), loc("b8")).unwrap(), MoveStatus::Illegal);
    }

    #[test]
    fn stalemating_move_ends_the_game() {
        // Be3 to f4 takes the last black move away without giving check.
        let board = from_plain("8\nKb6, Be3\nKa8\n").unwrap();
        let mut game = Game::with_seed(board, 1);

        assert_eq!(game.submit_move(loc("e3"), loc("f4")).unwrap(), MoveStatus::Played);
        assert_eq!(game.state, GameState::Stalemate(Side::Black));
        assert!(game.state.is_over());
    }

    #[test]
    fn auto_move_is_deterministic_per_seed() {
        let board = from_plain("8\nKe1, Ba1, Bh1\nKe8\n").unwrap();
        let mut first = Game::with_seed(board.clone(), 42);
        let mut second = Game::with_seed(board, 42);

        assert_eq!(first.auto_move().unwrap(), second.auto_move().unwrap());
        assert_eq!(first.board, second.board);
    }

    #[test]
    fn auto_move_fails_once_the_game_is_over() {
        let board = from_plain("8\nKb6, Bd5, Bf4\nKa8\n").unwrap();
        let mut game = Game::with_seed(board, 3);
        game.state = GameState::Checkmate(Side::Black);

        assert!(matches!(
            game.auto_move(),
            Err(BoardError::NoLegalMove(Side::Black))
        ));
    }
}
