//! Module for evaluating the strength of a position.
//!
//! Searchers only ever see an [`Evaluator`]; anything that turns a `Position` into a
//! `Score` will do, closures included. Scores are from White's point of view and must
//! honour the terminal contract: [`WIN_SCORE`] when White has won, `-WIN_SCORE` when
//! Black has won and [`DRAW_SCORE`] for a drawn game.
//!
//! [`Evaluator`]: trait.Evaluator.html
//! [`WIN_SCORE`]: constant.WIN_SCORE.html
//! [`DRAW_SCORE`]: constant.DRAW_SCORE.html

use crate::board::{Outcome, Position};
use crate::core::piece_move::Score;
use crate::core::*;

/// Score of a position White has won.
pub const WIN_SCORE: Score = 1000.0;
/// Score of a drawn position.
pub const DRAW_SCORE: Score = 0.0;

/// Maps a position to a score, where a larger score favors White.
pub trait Evaluator {
    fn evaluate(&self, position: &Position) -> Score;
}

impl<F> Evaluator for F
where
    F: Fn(&Position) -> Score,
{
    #[inline]
    fn evaluate(&self, position: &Position) -> Score {
        self(position)
    }
}

/// A simple material-counting evaluation. This is included as a reference, and shouldn't
/// necessarily be used inside serious chess engines.
///
/// ```
/// use chess_search::Position;
/// use chess_search::tools::eval::{Evaluator, MaterialEvaluator};
///
/// let position = Position::start_pos();
/// assert_eq!(MaterialEvaluator.evaluate(&position), 0.0);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    /// The material balance of a position, ignoring whether the game is over.
    pub fn material(position: &Position) -> Score {
        position
            .squares()
            .iter()
            .flatten()
            .map(|piece| {
                let value = piece.type_of().value() as Score;
                match piece.player() {
                    Player::White => value,
                    Player::Black => -value,
                }
            })
            .sum()
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, position: &Position) -> Score {
        match position.outcome() {
            Outcome::WhiteWin => WIN_SCORE,
            Outcome::BlackWin => -WIN_SCORE,
            Outcome::Draw => DRAW_SCORE,
            _ => MaterialEvaluator::material(position),
        }
    }
}
