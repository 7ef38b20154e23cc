//! The configured search entry point.
//!
//! A [`SearchEngine`] owns an evaluator and a [`SearchConfig`], and, when searching in
//! parallel, its own rayon thread pool.
//!
//! ```
//! use chess_search::{Position, SearchConfig, SearchEngine};
//! use chess_search::bots::Strategy;
//! use chess_search::tools::eval::MaterialEvaluator;
//!
//! let config = SearchConfig::default().depth(2).strategy(Strategy::MiniMax);
//! let engine = SearchEngine::new(config, MaterialEvaluator);
//! let result = engine.search(&Position::start_pos());
//! assert!(result.best_move.is_some());
//! ```
//!
//! [`SearchEngine`]: struct.SearchEngine.html
//! [`SearchConfig`]: struct.SearchConfig.html

use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::board::Position;
use crate::bots::parallel::{parallel_search, sequential_search};
use crate::bots::Strategy;
use crate::core::piece_move::Move;
use crate::tools::eval::{Evaluator, MaterialEvaluator};
use crate::tools::SearchResult;

/// Default depth of a search, in plies.
pub const DEFAULT_DEPTH: u16 = 3;

/// How a `SearchEngine` searches.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SearchConfig {
    pub depth: u16,
    pub strategy: Strategy,
    /// Search the root moves on a thread pool.
    pub parallel: bool,
    /// Size of the thread pool, used only when `parallel` is set.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            strategy: Strategy::AlphaBeta,
            parallel: false,
            threads: num_cpus::get(),
        }
    }
}

impl SearchConfig {
    pub fn depth(mut self, depth: u16) -> Self {
        self.depth = depth;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the number of search threads. Zero is treated as one.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

/// Searches positions with a fixed configuration and evaluator.
pub struct SearchEngine<E: Evaluator + Sync> {
    config: SearchConfig,
    evaluator: E,
    pool: Option<ThreadPool>,
}

impl Default for SearchEngine<MaterialEvaluator> {
    fn default() -> Self {
        SearchEngine::new(SearchConfig::default(), MaterialEvaluator)
    }
}

impl<E: Evaluator + Sync> SearchEngine<E> {
    /// Creates an engine. If a parallel thread pool cannot be started, the engine logs a
    /// warning and searches on the calling thread instead.
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        let pool = if config.parallel {
            match ThreadPoolBuilder::new()
                .num_threads(config.threads.max(1))
                .thread_name(|i| format!("search-{}", i))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(err) => {
                    warn!(error = %err, "could not start search threads, searching sequentially");
                    None
                }
            }
        } else {
            None
        };
        SearchEngine {
            config,
            evaluator,
            pool,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches `position` to the configured depth.
    ///
    /// A position without legal moves yields no move, and is only evaluated. Callers are
    /// expected to check `Position::game_over` first.
    pub fn search(&self, position: &Position) -> SearchResult {
        let depth = self.config.depth;
        let strategy = self.config.strategy;
        let start = Instant::now();

        let result = match self.pool {
            Some(ref pool) => {
                let root = position.clone();
                let evaluator = &self.evaluator;
                pool.install(move || parallel_search(&root, evaluator, depth, strategy))
            }
            None => sequential_search(position, &self.evaluator, depth, strategy),
        };

        if result.best_move.is_none() && depth > 0 {
            warn!(position = %position.to_text(), "no legal moves at the root");
        }
        debug!(
            %strategy,
            depth,
            parallel = self.pool.is_some(),
            evaluations = result.evaluations,
            score = result.score,
            best_move = ?result.best_move.map(|m| m.to_string()),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );
        result
    }

    /// Returns the best move for the side to move, or `None` if there is none.
    pub fn best_move(&self, position: &Position) -> Option<Move> {
        self.search(position).best_move
    }
}
