use super::error::BoardError;
use super::{Board, Location, Piece, PieceKind, Side};

impl Piece {
    /// Checks whether this piece's movement geometry permits occupying `to`,
    /// ignoring whose turn it is and ignoring self-check consequences.
    ///
    /// Friendly occupancy of the target is deliberately not checked here:
    /// reach is also what "attacks" means during check detection, and a
    /// piece threatens a square regardless of who stands on it. A piece
    /// never reaches its own square.
    pub fn can_reach(&self, to: Location, board: &Board) -> bool {
        if to == self.pos {
            return false;
        }
        let dx = (to.x as i16 - self.pos.x as i16).abs();
        let dy = (to.y as i16 - self.pos.y as i16).abs();

        match self.kind {
            PieceKind::King => dx <= 1 && dy <= 1,
            PieceKind::Bishop => dx == dy && self.diagonal_is_clear(to, board),
        }
    }

    /// Walks the diagonal towards `to` and fails at the first occupied
    /// intermediate square, whichever side it belongs to.
    fn diagonal_is_clear(&self, to: Location, board: &Board) -> bool {
        let step_x: i16 = if to.x > self.pos.x { 1 } else { -1 };
        let step_y: i16 = if to.y > self.pos.y { 1 } else { -1 };

        let mut x = self.pos.x as i16 + step_x;
        let mut y = self.pos.y as i16 + step_y;
        while (x, y) != (to.x as i16, to.y as i16) {
            if board.is_piece_at(Location::new(x as u8, y as u8)) {
                return false;
            }
            x += step_x;
            y += step_y;
        }
        true
    }

    /// Full legality: reach, no friendly piece on the target, and the
    /// simulated resulting board must not leave the mover's own side in
    /// check.
    ///
    /// The simulation is one level deep for every piece kind: `move_to`
    /// builds the hypothetical board and `is_check` inspects it with plain
    /// reachability, so the recursion terminates.
    pub fn can_move_to(&self, to: Location, board: &Board) -> Result<bool, BoardError> {
        if !self.can_reach(to, board) {
            return Ok(false);
        }
        if board.piece_at(to).map_or(false, |p| p.side == self.side) {
            return Ok(false);
        }
        let next = self.move_to(to, board);
        Ok(!next.is_check(self.side)?)
    }

    /// Builds the board resulting from moving this piece to `to`: the mover
    /// is removed from its old square, an enemy piece on the target square
    /// is captured, and the moved piece is placed on the target.
    ///
    /// Legality is not re-checked here; callers that need the "does not
    /// leave the own king in check" guard must go through `can_move_to` or
    /// `Board::apply_move`.
    pub fn move_to(&self, to: Location, board: &Board) -> Board {
        let mut pieces: Vec<Piece> = board
            .pieces
            .iter()
            .filter(|p| p.pos != self.pos)
            .filter(|p| !(p.pos == to && p.side != self.side))
            .copied()
            .collect();
        pieces.push(Piece::new(self.kind, self.side, to));
        Board::new(board.size, pieces)
    }
}

impl Board {
    /// Checks whether `side`'s king is attacked by any opposing piece.
    ///
    /// Attack detection uses `can_reach`, never `can_move_to`: a pinned
    /// attacker still gives check.
    pub fn is_check(&self, side: Side) -> Result<bool, BoardError> {
        let king = self.find_king(side)?;
        Ok(self
            .pieces
            .iter()
            .filter(|p| p.side != side)
            .any(|p| p.can_reach(king.pos, self)))
    }

    pub fn is_checkmate(&self, side: Side) -> Result<bool, BoardError> {
        if !self.is_check(side)? {
            return Ok(false);
        }
        Ok(!self.has_any_legal_move(side)?)
    }

    pub fn is_stalemate(&self, side: Side) -> Result<bool, BoardError> {
        if self.is_check(side)? {
            return Ok(false);
        }
        Ok(!self.has_any_legal_move(side)?)
    }

    /// Exhaustive search over every piece of `side` and every square of the
    /// board. The enumeration order only affects how quickly a witness is
    /// found, not the answer.
    pub fn has_any_legal_move(&self, side: Side) -> Result<bool, BoardError> {
        for piece in self.pieces.iter().filter(|p| p.side == side) {
            for y in 1..=self.size {
                for x in 1..=self.size {
                    if piece.can_move_to(Location::new(x, y), self)? {
                        return Ok(true);
                    }
                }
            }
        }
        Ok(false)
    }

    /// Applies a move if it is legal; an illegal move returns the board
    /// unchanged rather than an error.
    pub fn apply_move(&self, piece: &Piece, to: Location) -> Result<Board, BoardError> {
        if piece.can_move_to(to, self)? {
            Ok(piece.move_to(to, self))
        } else {
            Ok(self.clone())
        }
    }
}
