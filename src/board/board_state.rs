//! Contains the `BoardState` structure for the `Position`: the part of a position that is
//! not visible from the pieces alone. This is the castling rights, the en-passant
//! opportunity and the number of plies played.
//!
//! [`BoardState`]: struct.BoardState.html

use crate::core::sq::SQ;
use crate::core::square_set::SquareSet;
use crate::core::Player;

/// An en-passant opportunity, created by a pawn's two-step advance and valid only for
/// the very next move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EnPassant {
    /// Square to the left of the advanced pawn, if on the board.
    pub left: Option<SQ>,
    /// Square to the right of the advanced pawn, if on the board.
    pub right: Option<SQ>,
    /// The square a capturing pawn lands on, directly behind the advanced pawn.
    pub target: SQ,
    /// The side allowed to make the capture.
    pub capturer: Player,
}

impl EnPassant {
    /// Returns if a pawn standing on `sq` is placed to capture en-passant.
    #[inline]
    pub fn is_flank(&self, sq: SQ) -> bool {
        self.left == Some(sq) || self.right == Some(sq)
    }

    /// The square of the pawn that is captured.
    #[inline]
    pub fn captured_sq(&self) -> SQ {
        // One row back from the target, as seen by the capturer.
        SQ((self.target.0 as i8 - 8 * self.capturer.pawn_push()) as u8)
    }
}

/// Holds the information about a `Position` that isn't stored in the squares.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct BoardState {
    /// Squares whose king or rook has not moved, and so may still castle.
    pub castling_rights: SquareSet,
    /// Set only directly after a two-step pawn advance next to an enemy pawn.
    pub en_passant: Option<EnPassant>,
    /// How many plies have been played since the `Position` was created.
    pub ply: u16,
}
