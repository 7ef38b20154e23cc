//! Error types for the rules engine.
//!
//! Every error describes a problem with the caller's input. An operation that fails
//! leaves the position it was called on untouched.

use std::fmt;

use thiserror::Error;

use crate::core::sq::SQ;

/// Why a move was refused by [`Position::apply_move`].
///
/// [`Position::apply_move`]: ../board/struct.Position.html#method.apply_move
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// There is no piece on the source square.
    EmptySource,
    /// The piece on the source square belongs to the side not on move.
    WrongColor,
    /// The destination is not a legal destination for the piece.
    NotLegal,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            MoveRejection::EmptySource => "no piece on the source square",
            MoveRejection::WrongColor => "wrong colour piece",
            MoveRejection::NotLegal => "destination is not legal",
        })
    }
}

/// Errors that can occur while querying or mutating a position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// An operation needed a piece on a square that is empty.
    #[error("no piece on square {square}")]
    EmptySquare { square: SQ },

    /// A square or move string is not valid algebraic notation.
    #[error("not valid algebraic notation: {notation:?}")]
    InvalidNotation { notation: String },

    /// A move was refused.
    #[error("invalid move from {src} to {dst}: {reason}")]
    InvalidMove { src: SQ, dst: SQ, reason: MoveRejection },

    /// A side was named that is neither White nor Black.
    #[error("not a valid color: {color:?}")]
    InvalidColor { color: String },

    /// A board layout or board text could not be read.
    #[error("unreadable board: {reason}")]
    InvalidBoardText { reason: String },
}

/// Result type alias for rules engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
