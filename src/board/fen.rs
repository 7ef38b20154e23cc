//! The compact board-to-text exchange format.
//!
//! The text holds the eight ranks, rank 8 first, separated by `/`. Each rank writes one
//! character per piece and a digit for each run of empty squares. The side to move follows
//! after a space, as `w` or `b`.
//!
//! Pieces are written uppercase for White and lowercase for Black, which is the inverse of
//! the convention taken by [`Position::from_layout`].
//!
//! The format carries no castling rights, en-passant state, ply count or history, so
//! reading text back does not rebuild a `Position` exactly. Castling rights are given to
//! kings and rooks on their standard starting squares, as with a custom layout.
//!
//! [`Position::from_layout`]: ../struct.Position.html#method.from_layout

use crate::core::sq::SQ;
use crate::core::*;
use crate::error::{ChessError, ChessResult};

use super::{Layout, Position};

/// Text of the standard starting position.
pub const START_TEXT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl Position {
    /// Writes the position in the board-to-text exchange format.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::Position;
    ///
    /// let position = Position::start_pos();
    /// assert_eq!(position.to_text(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
    /// ```
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(72);
        let mut blanks = 0;
        for sq in SQ::all() {
            match self.piece_at(sq) {
                Some(piece) => {
                    if blanks != 0 {
                        s.push(std::char::from_digit(blanks, 10).unwrap_or('8'));
                        blanks = 0;
                    }
                    s.push(piece.text_char());
                }
                None => blanks += 1,
            }
            if sq.col() == 7 {
                if blanks != 0 {
                    s.push(std::char::from_digit(blanks, 10).unwrap_or('8'));
                    blanks = 0;
                }
                if sq.row() != 7 {
                    s.push('/');
                }
            }
        }
        s.push(' ');
        s.push(match self.turn {
            Player::White => 'w',
            Player::Black => 'b',
        });
        s
    }

    /// Reads a position from the board-to-text exchange format.
    ///
    /// # Errors
    ///
    /// `ChessError::InvalidBoardText` if the placement is malformed, and
    /// `ChessError::InvalidColor` if the side to move is neither `w` nor `b`.
    pub fn from_text(text: &str) -> ChessResult<Position> {
        let mut fields = text.split_whitespace();
        let placement = fields.next().ok_or_else(|| bad_text("empty text"))?;
        let side = fields
            .next()
            .ok_or_else(|| bad_text("missing side to move"))?;
        if fields.next().is_some() {
            return Err(bad_text("unexpected trailing fields"));
        }
        let turn: Player = side.parse()?;
        Ok(Position::from_squares(parse_placement(placement)?, turn))
    }
}

fn bad_text(reason: &str) -> ChessError {
    ChessError::InvalidBoardText {
        reason: reason.to_string(),
    }
}

fn parse_placement(placement: &str) -> ChessResult<Layout> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != FILE_CNT {
        return Err(bad_text(&format!("{} ranks, expected 8", ranks.len())));
    }
    let mut squares: Layout = [None; SQ_CNT];
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 || run > 8 {
                    return Err(bad_text(&format!("bad empty run {:?}", c)));
                }
                col += run as usize;
            } else {
                let piece = Piece::from_text_char(c)
                    .ok_or_else(|| bad_text(&format!("unrecognized piece: {:?}", c)))?;
                if col >= FILE_CNT {
                    return Err(bad_text(&format!("rank {} is too long", 8 - row)));
                }
                squares[row * FILE_CNT + col] = Some(piece);
                col += 1;
            }
        }
        if col != FILE_CNT {
            return Err(bad_text(&format!("rank {} has {} squares", 8 - row, col)));
        }
    }
    Ok(squares)
}
