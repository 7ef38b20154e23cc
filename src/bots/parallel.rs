//! Root-parallel searching.
//!
//! Each move at the root gets its own task, searching its subtree to completion with a
//! full window. Nothing is shared between tasks, not even alpha-beta bounds, so the
//! result is the same as a sequential search of the same strategy.
use rayon::prelude::*;

use crate::board::Position;
use crate::core::piece_move::*;
use crate::core::Player;
use crate::tools::eval::Evaluator;
use crate::tools::SearchResult;

use super::alphabeta::alpha_beta_search;
use super::minimax::minimax;
use super::Strategy;

/// Searches the root moves in parallel on the current rayon pool.
///
/// Depths below 2 and positions without moves are searched sequentially.
pub fn parallel_search<E: Evaluator + Sync + ?Sized>(
    position: &Position,
    evaluator: &E,
    depth: u16,
    strategy: Strategy,
) -> SearchResult {
    let moves = match strategy {
        Strategy::MiniMax => position.generate_moves(),
        Strategy::AlphaBeta => position.generate_ordered_moves(),
    };
    if depth < 2 || moves.is_empty() {
        return sequential_search(position, evaluator, depth, strategy);
    }

    let children: Vec<(Move, Position)> = moves
        .into_iter()
        .map(|mov| (mov, position.child(mov)))
        .collect();

    let scored: Vec<(Move, Score, u64)> = children
        .into_par_iter()
        .map(|(mov, child)| {
            let result = sequential_search(&child, evaluator, depth - 1, strategy);
            (mov, result.score, result.evaluations)
        })
        .collect();

    let maximizing = position.turn() == Player::White;
    let mut best: Option<ScoringMove> = None;
    let mut evaluations = 0;
    for (mov, score, evals) in scored {
        evaluations += evals;
        let better = match best {
            None => true,
            Some(ref b) if maximizing => score > b.score,
            Some(ref b) => score < b.score,
        };
        if better {
            best = Some(ScoringMove::new_score(mov, score));
        }
    }

    match best {
        Some(best) => SearchResult {
            best_move: best.mov,
            score: best.score,
            evaluations,
        },
        None => sequential_search(position, evaluator, depth, strategy),
    }
}

/// A full-window search of one strategy on the calling thread.
pub fn sequential_search<E: Evaluator + ?Sized>(
    position: &Position,
    evaluator: &E,
    depth: u16,
    strategy: Strategy,
) -> SearchResult {
    let mut evaluations = 0;
    let best = match strategy {
        Strategy::MiniMax => minimax(position, evaluator, depth, &mut evaluations),
        Strategy::AlphaBeta => alpha_beta_search(
            position,
            evaluator,
            depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            &mut evaluations,
        ),
    };
    SearchResult {
        best_move: best.mov,
        score: best.score,
        evaluations,
    }
}
