//! A chess rules engine and game-tree searcher.
//!
//! The crate is split into the following modules:
//!
//! * `core`: squares, pieces, players and moves.
//! * `board`: the [`Position`], its move generation, rules and mutation.
//! * `tools`: the `Searcher` trait and the `Evaluator` capability.
//! * `bots`: minimax and alpha-beta searchers, sequential and parallel.
//! * `engine`: a configured [`SearchEngine`].
//!
//! # Usage
//!
//! ```
//! use chess_search::{Position, SearchConfig, SearchEngine};
//! use chess_search::tools::eval::MaterialEvaluator;
//!
//! let mut position = Position::start_pos();
//! let engine = SearchEngine::new(SearchConfig::default().depth(2), MaterialEvaluator);
//!
//! while !position.game_over() && position.ply_count() < 4 {
//!     let mov = engine.best_move(&position).unwrap();
//!     position.apply_move(mov).unwrap();
//! }
//! assert_eq!(position.ply_count(), 4);
//! ```
//!
//! [`Position`]: board/struct.Position.html
//! [`SearchEngine`]: engine/struct.SearchEngine.html

pub mod board;
pub mod bots;
pub mod core;
pub mod engine;
pub mod error;
pub mod tools;

pub use crate::board::{Outcome, Position};
pub use crate::core::piece_move::{Move, Score};
pub use crate::core::sq::SQ;
pub use crate::core::{Piece, PieceType, Player};
pub use crate::engine::{SearchConfig, SearchEngine};
pub use crate::error::{ChessError, ChessResult};
pub use crate::tools::SearchResult;
