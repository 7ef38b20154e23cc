//! Random `Position` generation, for tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Position;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum RandGen {
    InCheck,
    NoCheck,
    All,
}

/// Random Position Generator. Creates positions reachable from the start position by
/// playing random legal moves. Games that end before `min_moves` plies are thrown away.
///
/// # Examples
///
/// Create one `Position` with at least 5 moves played, the same for every run.
///
/// ```
/// use chess_search::board::{Position, RandPosition};
///
/// let position: Position = RandPosition::new()
///     .pseudo_random(12455)
///     .min_moves(5)
///     .one();
/// assert!(position.ply_count() >= 5);
/// ```
///
/// Create a `Vec` of 10 random `Position`s that are not in check.
///
/// ```
/// use chess_search::board::{Position, RandPosition};
///
/// let positions: Vec<Position> = RandPosition::new()
///     .pseudo_random(12455)
///     .no_check()
///     .many(10);
/// assert!(positions.iter().all(|p| !p.in_check(p.turn())));
/// ```
pub struct RandPosition {
    gen_type: RandGen,
    minimum_move: u16,
    maximum_move: u16,
    rng: StdRng,
}

impl Default for RandPosition {
    fn default() -> Self {
        RandPosition::new()
    }
}

impl RandPosition {
    /// Create a new `RandPosition` object, seeded from entropy.
    pub fn new() -> Self {
        RandPosition {
            gen_type: RandGen::All,
            minimum_move: 1,
            maximum_move: 40,
            rng: StdRng::from_entropy(),
        }
    }

    /// Turns pseudo-random generation on. The same seed creates the same positions.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the minimum number of plies a generated `Position` must have played.
    pub fn min_moves(mut self, moves: u16) -> Self {
        self.minimum_move = moves;
        if self.maximum_move < moves {
            self.maximum_move = moves;
        }
        self
    }

    /// Sets the maximum number of plies a generated `Position` may have played.
    pub fn max_moves(mut self, moves: u16) -> Self {
        self.maximum_move = moves.max(self.minimum_move);
        self
    }

    /// Guarantees that the positions returned are in check.
    pub fn in_check(mut self) -> Self {
        self.gen_type = RandGen::InCheck;
        self
    }

    /// Guarantees that the positions returned are not in check.
    pub fn no_check(mut self) -> Self {
        self.gen_type = RandGen::NoCheck;
        self
    }

    /// Creates a `Vec<Position>` of `size` random positions.
    pub fn many(mut self, size: usize) -> Vec<Position> {
        (0..size).map(|_| self.go()).collect()
    }

    /// Creates a singular `Position` with a random position.
    pub fn one(mut self) -> Position {
        self.go()
    }

    fn go(&mut self) -> Position {
        loop {
            let target = self.rng.gen_range(self.minimum_move..=self.maximum_move);
            let mut position = Position::start_pos();
            while position.ply_count() < target {
                let moves = position.generate_moves();
                if moves.is_empty() {
                    break;
                }
                let mov = moves[self.rng.gen_range(0..moves.len())];
                position = position.child(mov);
            }
            if position.ply_count() >= self.minimum_move && self.to_ret(&position) {
                return position;
            }
        }
    }

    fn to_ret(&self, position: &Position) -> bool {
        match self.gen_type {
            RandGen::All => true,
            RandGen::InCheck => position.in_check(position.turn()),
            RandGen::NoCheck => !position.in_check(position.turn()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_repeats() {
        let a = RandPosition::new().pseudo_random(7).min_moves(6).many(3);
        let b = RandPosition::new().pseudo_random(7).min_moves(6).many(3);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.ply_count() >= 6));
    }

    #[test]
    fn in_check_generation() {
        let position = RandPosition::new().pseudo_random(3).in_check().one();
        assert!(position.in_check(position.turn()));
    }
}
