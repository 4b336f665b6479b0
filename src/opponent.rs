use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, BoardError, Location, Piece, Side};

/// Picks a move for an automated player: a piece of `side` chosen uniformly
/// at random, then the first legal destination in scan order for the first
/// shuffled piece that has one.
///
/// The destination is deliberately not uniform among all legal moves; only
/// the piece choice is random. Fails with `NoLegalMove` when `side` has no
/// legal move anywhere, so callers normally rule out checkmate and
/// stalemate first.
pub fn choose_random_move(
    side: Side,
    board: &Board,
    rng: &mut impl Rng,
) -> Result<(Piece, Location), BoardError> {
    let mut candidates: Vec<Piece> = board.pieces_of(side).copied().collect();
    candidates.shuffle(rng);

    for piece in candidates {
        for y in 1..=board.size {
            for x in 1..=board.size {
                let to = Location::new(x, y);
                if piece.can_move_to(to, board)? {
                    return Ok((piece, to));
                }
            }
        }
    }
    Err(BoardError::NoLegalMove(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::plain::from_plain;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn chosen_move_is_legal() {
        let board = from_plain("8\nKe1, Ba1\nKe8, Bh8\n").unwrap();
        for seed in 0..20 {
            let mut rng = Pcg64::seed_from_u64(seed);
            let (piece, to) = choose_random_move(Side::Black, &board, &mut rng).unwrap();
            assert_eq!(piece.side, Side::Black);
            assert!(piece.can_move_to(to, &board).unwrap());
        }
    }

    #[test]
    fn same_seed_gives_same_move() {
        let board = from_plain("8\nKe1\nKe8, Ba8, Bc5, Bg4\n").unwrap();
        let mut first = Pcg64::seed_from_u64(42);
        let mut second = Pcg64::seed_from_u64(42);

        assert_eq!(
            choose_random_move(Side::Black, &board, &mut first).unwrap(),
            choose_random_move(Side::Black, &board, &mut second).unwrap()
        );
    }

    #[test]
    fn falls_through_immobile_pieces() {
        // The bishop on a8 is walled in by its own king, so every seed must
        // end up moving the king.
        let board = from_plain("8\nKh1\nKb7, Ba8\n").unwrap();
        for seed in 0..20 {
            let mut rng = Pcg64::seed_from_u64(seed);
            let (piece, _) = choose_random_move(Side::Black, &board, &mut rng).unwrap();
            assert_eq!(piece.pos, crate::board::Location::new(2, 7));
        }
    }

    #[test]
    fn no_legal_move_for_stalemated_side() {
        let board = from_plain("8\nKb6, Bf4\nKa8\n").unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        assert!(matches!(
            choose_random_move(Side::Black, &board, &mut rng),
            Err(BoardError::NoLegalMove(Side::Black))
        ));
    }
}
