//! Applying moves to a `Position`.
//!
//! [`Position::apply_move`] is the checked entry point: it refuses a move without touching
//! the position. [`Position::play`] is the copy-then-mutate form used by searches, which
//! never modify the position they were handed.
//!
//! [`Position::apply_move`]: ../struct.Position.html#method.apply_move
//! [`Position::play`]: ../struct.Position.html#method.play

use tracing::trace;

use crate::core::piece_move::Move;
use crate::core::*;
use crate::error::{ChessError, ChessResult, MoveRejection};

use super::board_state::EnPassant;
use super::move_cache::MoveCache;
use super::movegen::castle_landing;
use super::Position;

impl Position {
    /// Applies a move to the position, after checking that it is legal.
    ///
    /// # Errors
    ///
    /// Returns `ChessError::InvalidMove` if the source square is empty, if the piece on
    /// it does not belong to the side to move, or if the destination is not a legal
    /// destination for that piece. The position is left unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::Position;
    /// use chess_search::core::piece_move::Move;
    ///
    /// let mut position = Position::start_pos();
    /// let mov: Move = "e2e4".parse().unwrap();
    /// position.apply_move(mov).unwrap();
    /// assert!(position.apply_move(mov).is_err());
    /// ```
    pub fn apply_move(&mut self, mov: Move) -> ChessResult<()> {
        let reject = |reason| ChessError::InvalidMove {
            src: mov.src,
            dst: mov.dst,
            reason,
        };
        if !mov.src.is_okay() || !mov.dst.is_okay() {
            return Err(reject(MoveRejection::NotLegal));
        }
        let piece = self
            .piece_at(mov.src)
            .ok_or_else(|| reject(MoveRejection::EmptySource))?;
        if piece.player() != self.turn {
            return Err(reject(MoveRejection::WrongColor));
        }
        if !self.generate_moves().contains(&mov) {
            return Err(reject(MoveRejection::NotLegal));
        }
        self.make_move_unchecked(mov, true);
        Ok(())
    }

    /// Applies a move given as two algebraic squares.
    ///
    /// # Errors
    ///
    /// `ChessError::InvalidNotation` if either square does not parse, otherwise as
    /// [`apply_move`](#method.apply_move).
    pub fn apply_notation(&mut self, src: &str, dst: &str) -> ChessResult<()> {
        let mov = Move::from_notation(src, dst)?;
        self.apply_move(mov)
    }

    /// Returns a new position with the move applied, leaving `self` untouched.
    pub fn play(&self, mov: Move) -> ChessResult<Position> {
        let mut next = self.clone();
        next.apply_move(mov)?;
        Ok(next)
    }

    /// Returns if the move is the king castling onto its rook's square.
    pub fn is_castle(&self, mov: Move) -> bool {
        let rights = self.state.castling_rights;
        match (self.piece_at(mov.src), self.piece_at(mov.dst)) {
            (Some(king), Some(rook)) => {
                king.type_of() == PieceType::K
                    && rook == Piece::make(king.player(), PieceType::R)
                    && rights.contains(mov.src)
                    && rights.contains(mov.dst)
            }
            _ => false,
        }
    }

    /// Child position for the searchers. The move must come from `generate_moves`.
    pub(crate) fn child(&self, mov: Move) -> Position {
        let mut next = self.clone();
        next.make_move_unchecked(mov, true);
        next
    }

    /// Applies a move with no legality checks.
    pub(crate) fn make_move_unchecked(&mut self, mov: Move, record_history: bool) {
        let piece = match self.piece_at(mov.src) {
            Some(piece) => piece,
            None => return,
        };
        let player = piece.player();
        let castle = self.is_castle(mov);

        self.state.castling_rights.remove(mov.src);
        self.state.castling_rights.remove(mov.dst);

        if record_history {
            self.history.push(self.squares);
            // Entries for the old placement can never be looked up again.
            self.move_cache = MoveCache::default();
        }

        let previous_ep = self.state.en_passant.take();
        if piece.type_of() == PieceType::P {
            let rows = (mov.dst.row() as i8 - mov.src.row() as i8).abs();
            if rows == 2 {
                self.state.en_passant = self.en_passant_after_double_step(mov, player);
            } else if let Some(ep) = previous_ep {
                if ep.target == mov.dst && ep.capturer == player && ep.is_flank(mov.src) {
                    self.squares[ep.captured_sq().0 as usize] = None;
                }
            }
        }

        self.squares[mov.src.0 as usize] = None;
        if castle {
            let (king_dst, rook_dst) = castle_landing(mov.src, mov.dst);
            self.squares[mov.dst.0 as usize] = None;
            self.squares[king_dst.0 as usize] = Some(piece);
            self.squares[rook_dst.0 as usize] = Some(Piece::make(player, PieceType::R));
        } else if piece.type_of() == PieceType::P && mov.dst.row() == player.promotion_row() {
            self.squares[mov.dst.0 as usize] = Some(Piece::make(player, PieceType::Q));
        } else {
            self.squares[mov.dst.0 as usize] = Some(piece);
        }

        self.turn = !self.turn;
        self.state.ply = self.state.ply.saturating_add(1);
        if record_history {
            trace!(%mov, %piece, castle, ply = self.state.ply, "applied move");
        }
    }

    /// An en-passant opportunity exists only if an enemy pawn stands beside the landing square.
    fn en_passant_after_double_step(&self, mov: Move, player: Player) -> Option<EnPassant> {
        let enemy_pawn = Some(Piece::make(!player, PieceType::P));
        let flank = |dx: i8| mov.dst.offset(dx, 0).filter(|&sq| self.piece_at(sq) == enemy_pawn);
        let left = flank(-1);
        let right = flank(1);
        if left.is_none() && right.is_none() {
            return None;
        }
        let target = mov.src.offset(0, player.pawn_push())?;
        Some(EnPassant {
            left,
            right,
            target,
            capturer: !player,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sq::SQ;

    #[test]
    fn rejection_order() {
        let mut position = Position::start_pos();
        let err = position.apply_notation("e4", "e5").unwrap_err();
        assert_eq!(
            err,
            ChessError::InvalidMove {
                src: SQ(36),
                dst: SQ(28),
                reason: MoveRejection::EmptySource
            }
        );
        let err = position.apply_notation("e7", "e5").unwrap_err();
        assert!(matches!(
            err,
            ChessError::InvalidMove { reason: MoveRejection::WrongColor, .. }
        ));
        let err = position.apply_notation("e2", "e5").unwrap_err();
        assert!(matches!(
            err,
            ChessError::InvalidMove { reason: MoveRejection::NotLegal, .. }
        ));
        assert_eq!(position, Position::start_pos());
    }

    #[test]
    fn play_leaves_parent_untouched() {
        let position = Position::start_pos();
        let child = position.play("g1f3".parse().unwrap()).unwrap();
        assert_eq!(position.ply_count(), 0);
        assert_eq!(child.ply_count(), 1);
        assert_eq!(child.turn(), Player::Black);
        assert_eq!(child.history().len(), 1);
        assert_eq!(child.piece_at("f3".parse().unwrap()), Some(Piece::WhiteKnight));
        assert!(!child.castling_rights().contains("g1".parse().unwrap()));
    }

    #[test]
    fn applying_a_move_drops_cached_moves() {
        let mut position = Position::start_pos();
        position.generate_moves();
        assert_eq!(position.move_cache.len(), 1);
        position.apply_notation("e2", "e4").unwrap();
        assert!(position.move_cache.is_empty());
        position.generate_moves();
        position.apply_notation("e7", "e5").unwrap();
        assert!(position.move_cache.is_empty());
    }

    #[test]
    fn double_step_without_neighbour_sets_no_en_passant() {
        let mut position = Position::start_pos();
        position.apply_notation("e2", "e4").unwrap();
        assert!(position.en_passant().is_none());
    }

    #[test]
    fn pawn_promotes_to_queen() {
        let mut position = Position::from_layout(
            concat!(
                "........", "p......K", "........", "........", "........", "........",
                "........", ".......k"
            ),
            Player::White,
        )
        .unwrap();
        position.apply_notation("a7", "a8").unwrap();
        assert_eq!(position.piece_at(SQ(0)), Some(Piece::WhiteQueen));
    }
}
