//! Memoization of move generation for a single `Position`.
//!
//! The cache belongs to one position and is never shared: cloning a position hands the
//! copy an empty cache. Because of the interior mutability, a `Position` may be sent to
//! another thread but not shared between threads.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::piece_move::Move;
use crate::core::square_set::SquareSet;
use crate::core::Player;

use super::board_state::EnPassant;
use super::Layout;

/// Everything move generation depends on, beyond the position's identity.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MoveCacheKey {
    pub player: Player,
    pub legal: bool,
    pub squares: Layout,
    pub en_passant: Option<EnPassant>,
    pub castling_rights: SquareSet,
}

/// Per-position store of generated move lists.
#[derive(Default)]
pub struct MoveCache {
    moves: RefCell<HashMap<MoveCacheKey, Vec<Move>>>,
}

impl MoveCache {
    /// Returns a copy of the cached list for `key`, if any.
    pub fn get(&self, key: &MoveCacheKey) -> Option<Vec<Move>> {
        self.moves.borrow().get(key).cloned()
    }

    /// Stores a generated list.
    pub fn insert(&self, key: MoveCacheKey, moves: Vec<Move>) {
        self.moves.borrow_mut().insert(key, moves);
    }

    /// Number of cached lists.
    pub fn len(&self) -> usize {
        self.moves.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.borrow().is_empty()
    }
}

impl Clone for MoveCache {
    fn clone(&self) -> Self {
        MoveCache::default()
    }
}
