//! Contains all of the standard searchers.
//!
//! Every searcher scores positions from White's point of view: White picks the move with
//! the largest score, Black the one with the smallest. Leaves and positions without legal
//! moves are handed to the `Evaluator`, which is trusted to recognize finished games.

pub mod alphabeta;
pub mod minimax;
pub mod parallel;

use std::fmt;

use crate::board::Position;
use crate::core::piece_move::*;
use crate::tools::eval::Evaluator;
use crate::tools::{SearchResult, Searcher};

/// The tree search algorithm to use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    /// Every line is searched to the full depth.
    MiniMax,
    /// Lines that cannot change the result are pruned.
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Strategy::MiniMax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
        })
    }
}

/// Searcher that uses a MiniMax algorithm to search for a best move.
pub struct MiniMaxSearcher {}

/// Searcher that uses a MiniMax algorithm to search for a best move, but does so in parallel.
pub struct ParallelMiniMaxSearcher {}

/// Searcher that uses an alpha-beta algorithm to search for a best move.
pub struct AlphaBetaSearcher {}

/// Searcher that uses an alpha-beta algorithm, with each root move searched in parallel.
pub struct ParallelAlphaBetaSearcher {}

impl Searcher for MiniMaxSearcher {
    fn name() -> &'static str {
        "MiniMax Searcher"
    }

    fn search<E: Evaluator + Sync + ?Sized>(
        position: &Position,
        evaluator: &E,
        depth: u16,
    ) -> SearchResult {
        parallel::sequential_search(position, evaluator, depth, Strategy::MiniMax)
    }
}

impl Searcher for AlphaBetaSearcher {
    fn name() -> &'static str {
        "AlphaBeta Searcher"
    }

    fn search<E: Evaluator + Sync + ?Sized>(
        position: &Position,
        evaluator: &E,
        depth: u16,
    ) -> SearchResult {
        parallel::sequential_search(position, evaluator, depth, Strategy::AlphaBeta)
    }
}

impl Searcher for ParallelMiniMaxSearcher {
    fn name() -> &'static str {
        "Parallel MiniMax Searcher"
    }

    fn search<E: Evaluator + Sync + ?Sized>(
        position: &Position,
        evaluator: &E,
        depth: u16,
    ) -> SearchResult {
        parallel::parallel_search(position, evaluator, depth, Strategy::MiniMax)
    }
}

impl Searcher for ParallelAlphaBetaSearcher {
    fn name() -> &'static str {
        "Parallel AlphaBeta Searcher"
    }

    fn search<E: Evaluator + Sync + ?Sized>(
        position: &Position,
        evaluator: &E,
        depth: u16,
    ) -> SearchResult {
        parallel::parallel_search(position, evaluator, depth, Strategy::AlphaBeta)
    }
}

#[doc(hidden)]
pub fn eval_leaf<E: Evaluator + ?Sized>(
    position: &Position,
    evaluator: &E,
    evaluations: &mut u64,
) -> ScoringMove {
    *evaluations += 1;
    ScoringMove::blank(evaluator.evaluate(position))
}
