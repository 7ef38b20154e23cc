//! Module for the implementation and definition of a move to be played.
//!
//! A `Move` is only a source and a destination square. Promotions and castles carry no
//! extra information; both are inferred from the moving piece when the move is applied:
//!
//! * A pawn reaching the far rank always becomes a queen.
//! * A castle is written as the king moving onto the square of the rook it castles with.
//!   The king then lands on the c-file or g-file, and the rook on the d-file or f-file.
//!
//! # Safety
//!
//! A `Move` is only guaranteed to be legal for a specific position. Moves should come
//! from [`Position::generate_moves`] or be checked by [`Position::apply_move`].
//!
//! [`Position::generate_moves`]: ../../board/struct.Position.html#method.generate_moves
//! [`Position::apply_move`]: ../../board/struct.Position.html#method.apply_move

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::sq::SQ;
use crate::error::ChessError;

/// Scores are from White's point of view: positive favors White.
pub type Score = f64;

/// Represents a singular move, from `src` to `dst`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub src: SQ,
    pub dst: SQ,
}

impl Move {
    /// Creates a new `Move`.
    #[inline(always)]
    pub const fn new(src: SQ, dst: SQ) -> Move {
        Move { src, dst }
    }

    /// Creates a `Move` from two algebraic squares.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::core::piece_move::Move;
    /// use chess_search::core::sq::SQ;
    ///
    /// let mov = Move::from_notation("e2", "e4").unwrap();
    /// assert_eq!(mov, Move::new(SQ(52), SQ(36)));
    /// assert!(Move::from_notation("e2", "e9").is_err());
    /// ```
    pub fn from_notation(src: &str, dst: &str) -> Result<Move, ChessError> {
        Ok(Move::new(src.parse()?, dst.parse()?))
    }

    /// Returns the pair of algebraic squares of this move.
    pub fn notation(self) -> (&'static str, &'static str) {
        (self.src.notation(), self.dst.notation())
    }
}

impl FromStr for Move {
    type Err = ChessError;

    /// Parses a move written as two squares with no separator, e.g. `"e2e4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessError::InvalidNotation { notation: s.to_string() });
        }
        Move::from_notation(&s[0..2], &s[2..4])
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.src, self.dst)
    }
}

/// A move paired with the score a search assigned to it.
///
/// `mov` is `None` when the score was produced without choosing a move, which is the
/// case at the leaves of a search and at positions with no legal moves.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ScoringMove {
    pub mov: Option<Move>,
    pub score: Score,
}

impl ScoringMove {
    /// Creates a new `ScoringMove`.
    #[inline(always)]
    pub fn new_score(mov: Move, score: Score) -> Self {
        ScoringMove { mov: Some(mov), score }
    }

    /// Returns a `ScoringMove` with no move and a user-defined score.
    #[inline(always)]
    pub fn blank(score: Score) -> Self {
        ScoringMove { mov: None, score }
    }

    /// Compares by score only.
    #[inline]
    pub fn cmp_score(&self, other: &ScoringMove) -> Ordering {
        self.score.partial_cmp(&other.score).unwrap_or(Ordering::Equal)
    }
}
