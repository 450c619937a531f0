pub mod ai;
pub mod error;
pub mod evaluation;
pub mod search;
pub mod tree;

pub use ai::OthelloAI;
pub use error::SearchError;
pub use evaluation::heuristic;
pub use search::{best_move, search, SearchConfig, SearchOutcome, SearchStats, SearchStrategy};
pub use tree::SearchNode;
