//! The alpha-beta algorithm.
use crate::board::Position;
use crate::core::piece_move::*;
use crate::core::Player;
use crate::tools::eval::Evaluator;

use super::eval_leaf;

/// Minimax with pruning. Children are visited captures first.
///
/// White raises `alpha` and stops looking at siblings once a child scores above `beta`;
/// Black lowers `beta` and stops once a child scores below `alpha`. Called with the full
/// window, the returned score is the minimax score.
pub fn alpha_beta_search<E: Evaluator + ?Sized>(
    position: &Position,
    evaluator: &E,
    depth: u16,
    mut alpha: Score,
    mut beta: Score,
    evaluations: &mut u64,
) -> ScoringMove {
    if depth == 0 {
        return eval_leaf(position, evaluator, evaluations);
    }

    let moves = position.generate_ordered_moves();
    if moves.is_empty() {
        return eval_leaf(position, evaluator, evaluations);
    }

    let mut best: Option<ScoringMove> = None;
    match position.turn() {
        Player::White => {
            for mov in moves {
                let child = position.child(mov);
                let score =
                    alpha_beta_search(&child, evaluator, depth - 1, alpha, beta, evaluations).score;
                if best.map_or(true, |b| score > b.score) {
                    best = Some(ScoringMove::new_score(mov, score));
                }
                if score > beta {
                    break;
                }
                alpha = alpha.max(score);
            }
        }
        Player::Black => {
            for mov in moves {
                let child = position.child(mov);
                let score =
                    alpha_beta_search(&child, evaluator, depth - 1, alpha, beta, evaluations).score;
                if best.map_or(true, |b| score < b.score) {
                    best = Some(ScoringMove::new_score(mov, score));
                }
                if score < alpha {
                    break;
                }
                beta = beta.min(score);
            }
        }
    }
    best.unwrap_or_else(|| eval_leaf(position, evaluator, evaluations))
}
