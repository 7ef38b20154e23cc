//! The minimax algorithm.
use crate::board::Position;
use crate::core::piece_move::*;
use crate::core::Player;
use crate::tools::eval::Evaluator;

use super::eval_leaf;

/// Searches every line to `depth` plies. White takes the largest score, Black the smallest;
/// among equal scores the first move visited is kept.
pub fn minimax<E: Evaluator + ?Sized>(
    position: &Position,
    evaluator: &E,
    depth: u16,
    evaluations: &mut u64,
) -> ScoringMove {
    if depth == 0 {
        return eval_leaf(position, evaluator, evaluations);
    }

    let moves = position.generate_moves();
    if moves.is_empty() {
        return eval_leaf(position, evaluator, evaluations);
    }

    let maximizing = position.turn() == Player::White;
    let mut best: Option<ScoringMove> = None;
    for mov in moves {
        let child = position.child(mov);
        let score = minimax(&child, evaluator, depth - 1, evaluations).score;
        let better = match best {
            None => true,
            Some(ref b) if maximizing => score > b.score,
            Some(ref b) => score < b.score,
        };
        if better {
            best = Some(ScoringMove::new_score(mov, score));
        }
    }
    best.unwrap_or_else(|| eval_leaf(position, evaluator, evaluations))
}
