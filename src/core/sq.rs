//! Contains the representation of a chessboard's square.
//!
//! Internally, a `SQ` is just a u8. Squares are numbered row-major from the top-left
//! corner of the board as White sees it, so the number of a `SQ` maps to the following
//! squares of a chessboard:
//!
//! ```md,ignore
//! 8 | 0  1  2  3  4  5  6  7
//! 7 | 8  9  10 11 12 13 14 15
//! 6 | 16 17 18 19 20 21 22 23
//! 5 | 24 25 26 27 28 29 30 31
//! 4 | 32 33 34 35 36 37 38 39
//! 3 | 40 41 42 43 44 45 46 47
//! 2 | 48 49 50 51 52 53 54 55
//! 1 | 56 57 58 59 60 61 62 63
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! A "row" counts down from rank 8 (row 0) to rank 1 (row 7), and a "col" counts
//! from file a (col 0) to file h (col 7).
//!
//! # Examples
//!
//! ```rust
//! use chess_search::core::sq::SQ;
//!
//! let e4: SQ = "e4".parse().unwrap();
//! assert_eq!(e4, SQ(36));
//! assert_eq!(e4.rank(), 4);
//! assert_eq!(e4.file(), 'e');
//! assert!("k8".parse::<SQ>().is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::ChessError;

/// Algebraic notation of every square, indexed by the square's number.
#[rustfmt::skip]
pub static NOTATION: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

lazy_static! {
    /// Reverse lookup of `NOTATION`, built on first use.
    static ref REVERSE_NOTATION: HashMap<&'static str, SQ> = NOTATION
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, SQ(i as u8)))
        .collect();
}

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Default, Hash, PartialEq, PartialOrd, Ord, Eq, Debug)]
#[repr(transparent)]
pub struct SQ(pub u8);

impl SQ {
    /// Creates a square from its row (0 is rank 8) and col (0 is file a).
    /// Returns `None` if either coordinate is off the board.
    #[inline]
    pub fn from_row_col(row: i8, col: i8) -> Option<SQ> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(SQ((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Returns if a `SQ` is within the legal bounds of a square,
    /// which is inclusively between 0 - 63.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.0 < 64
    }

    /// Returns the row of the square, 0 being rank 8.
    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the col of the square, 0 being file a.
    #[inline(always)]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the chess rank (1 through 8) that a `SQ` lies on.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row()
    }

    /// Returns the file letter that a `SQ` lies on.
    #[inline]
    pub fn file(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Moves the square by `dx` cols and `dy` rows. Returns `None` if the result is
    /// outside of the board.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_search::core::sq::SQ;
    ///
    /// assert_eq!(SQ(0).offset(7, 0), Some(SQ(7)));
    /// assert_eq!(SQ(0).offset(-1, -1), None);
    /// ```
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<SQ> {
        SQ::from_row_col(self.row() as i8 + dy, self.col() as i8 + dx)
    }

    /// Returns the algebraic notation of the square, e.g. `"e4"`.
    #[inline]
    pub fn notation(self) -> &'static str {
        NOTATION[self.0 as usize]
    }

    /// Iterates over every square on the board, in index order.
    pub fn all() -> impl Iterator<Item = SQ> {
        (0..64u8).map(SQ)
    }
}

impl FromStr for SQ {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REVERSE_NOTATION
            .get(s)
            .copied()
            .ok_or_else(|| ChessError::InvalidNotation { notation: s.to_string() })
    }
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            f.pad(self.notation())
        } else {
            f.pad("--")
        }
    }
}
