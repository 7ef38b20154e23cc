//! Check detection, game termination rules and the `Outcome` of a position.

use std::fmt;

use crate::core::sq::SQ;
use crate::core::*;
use crate::error::{ChessError, ChessResult};

use super::Position;

/// Number of plies after which the game is drawn by the 75-move rule.
pub const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;

/// The state of the game for a `Position`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    WhiteInCheck,
    BlackInCheck,
    WhiteWin,
    BlackWin,
    Draw,
    Ongoing,
}

impl Outcome {
    /// Returns if the game has ended.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::WhiteWin | Outcome::BlackWin | Outcome::Draw)
    }

    /// The winning player, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WhiteWin => Some(Player::White),
            Outcome::BlackWin => Some(Player::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Outcome::WhiteInCheck => "white in check",
            Outcome::BlackInCheck => "black in check",
            Outcome::WhiteWin => "white win",
            Outcome::BlackWin => "black win",
            Outcome::Draw => "draw",
            Outcome::Ongoing => "ongoing",
        })
    }
}

impl Position {
    /// Returns if a king of `player` standing on `sq` would be attacked.
    ///
    /// The king is placed on `sq` of a scratch copy, and the opponent's pseudo-legal moves
    /// are searched for one landing there. Nothing else on the board is changed.
    pub fn is_check(&self, sq: SQ, player: Player) -> bool {
        let mut probe = self.probe();
        probe.squares[sq.0 as usize] = Some(Piece::make(player, PieceType::K));
        probe.state.en_passant = None;
        probe.attacked_by(sq, !player)
    }

    /// Returns if the piece on `sq` is attacked, taking the side from that piece.
    ///
    /// # Errors
    ///
    /// `ChessError::EmptySquare` if there is no piece on `sq`.
    pub fn is_check_at(&self, sq: SQ) -> ChessResult<bool> {
        let player = self
            .player_at(sq)
            .ok_or(ChessError::EmptySquare { square: sq })?;
        Ok(self.is_check(sq, player))
    }

    /// Returns if `player`'s king is attacked. A player without a king is never in check.
    pub fn in_check(&self, player: Player) -> bool {
        self.king_sq(player)
            .map_or(false, |ksq| self.attacked_by(ksq, !player))
    }

    /// Returns if the side to move has no legal moves while the king on `king_sq` is in check.
    ///
    /// # Errors
    ///
    /// `ChessError::EmptySquare` if there is no piece on `king_sq`.
    pub fn is_checkmate(&self, king_sq: SQ) -> ChessResult<bool> {
        let checked = self.is_check_at(king_sq)?;
        Ok(checked && self.generate_moves().is_empty())
    }

    /// Returns if the side to move has no legal moves while the king on `king_sq` is not
    /// in check.
    ///
    /// # Errors
    ///
    /// `ChessError::EmptySquare` if there is no piece on `king_sq`.
    pub fn is_stalemate(&self, king_sq: SQ) -> ChessResult<bool> {
        let checked = self.is_check_at(king_sq)?;
        Ok(!checked && self.generate_moves().is_empty())
    }

    /// Returns if the side to move is checkmated.
    pub fn checkmate(&self) -> bool {
        self.in_check(self.turn) && self.generate_moves().is_empty()
    }

    /// Returns if the side to move is stalemated.
    pub fn stalemate(&self) -> bool {
        !self.in_check(self.turn) && self.generate_moves().is_empty()
    }

    /// Returns if 150 plies have been played.
    pub fn is_75_move_rule(&self) -> bool {
        self.state.ply >= SEVENTY_FIVE_MOVE_PLIES
    }

    /// Returns if the current placement of pieces has occurred three times.
    ///
    /// Only the squares are compared; the side to move and the castling and en-passant
    /// rights are not.
    pub fn is_threefold_repetition(&self) -> bool {
        let earlier = self
            .history
            .iter()
            .filter(|&layout| *layout == self.squares)
            .count();
        earlier + 1 >= 3
    }

    /// Returns the state of the game. Checkmate takes priority over stalemate, which
    /// takes priority over the 75-move rule, then repetition, then a plain check.
    pub fn outcome(&self) -> Outcome {
        let turn = self.turn;
        let checked = self.in_check(turn);
        let no_moves = self.generate_moves().is_empty();
        if checked && no_moves {
            match turn {
                Player::White => Outcome::BlackWin,
                Player::Black => Outcome::WhiteWin,
            }
        } else if no_moves || self.is_75_move_rule() || self.is_threefold_repetition() {
            Outcome::Draw
        } else if checked {
            match turn {
                Player::White => Outcome::WhiteInCheck,
                Player::Black => Outcome::BlackInCheck,
            }
        } else {
            Outcome::Ongoing
        }
    }

    /// Returns if the game is won, lost or drawn.
    pub fn game_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Returns if any pseudo-legal move of `attacker` lands on `sq`.
    pub(crate) fn attacked_by(&self, sq: SQ, attacker: Player) -> bool {
        SQ::all().any(|src| match self.piece_at(src) {
            Some(piece) if piece.player() == attacker => {
                self.destinations(src, piece, false, false).contains(&sq)
            }
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_ongoing() {
        let position = Position::start_pos();
        assert_eq!(position.outcome(), Outcome::Ongoing);
        assert!(!position.game_over());
        assert!(!position.is_check_at(SQ(60)).unwrap());
        assert!(position.is_check_at(SQ(36)).is_err());
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::WhiteWin.to_string(), "white win");
        assert_eq!(Outcome::BlackInCheck.to_string(), "black in check");
        assert_eq!(Outcome::BlackWin.winner(), Some(Player::Black));
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::WhiteInCheck.is_terminal());
    }

    #[test]
    fn only_the_side_to_move_is_reported_in_check() {
        // Black's king on e8 is attacked, but it is White's turn.
        let position = Position::from_layout(
            concat!(
                "....K...", "........", "........", "........", "........", "........",
                "........", "....r..k"
            ),
            Player::White,
        )
        .unwrap();
        assert!(position.in_check(Player::Black));
        assert_eq!(position.outcome(), Outcome::Ongoing);
        let position = Position::from_layout(
            concat!(
                "....K...", "........", "........", "........", "........", "........",
                "........", "....r..k"
            ),
            Player::Black,
        )
        .unwrap();
        assert_eq!(position.outcome(), Outcome::BlackInCheck);
    }

    #[test]
    fn seventy_five_move_boundary() {
        assert!(!Position::start_pos().with_ply_count(149).is_75_move_rule());
        assert!(Position::start_pos().with_ply_count(150).is_75_move_rule());
        assert_eq!(Position::start_pos().with_ply_count(150).outcome(), Outcome::Draw);
    }
}
