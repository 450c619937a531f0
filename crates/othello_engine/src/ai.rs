use log::{info, warn};
use othello_core::{Board, Move, Player};

use crate::error::SearchError;
use crate::search::{search, SearchConfig, SearchStrategy, DEFAULT_DEPTH};

const MIN_DEPTH: u8 = 1;
const MAX_DEPTH: u8 = 10; // Full-width search; deeper gets slow without move ordering
pub const MAX_MATERIALIZED_DEPTH: u8 = 6; // Whole tree held in memory

/// Computer player: searches its own advantage with a fixed configuration.
#[derive(Debug, Clone)]
pub struct OthelloAI {
    config: SearchConfig,
}

impl OthelloAI {
    pub fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig::new(depth))
    }

    pub fn with_config(mut config: SearchConfig) -> Self {
        config.depth = Self::clamp_depth(config.depth, config.strategy);
        OthelloAI { config }
    }

    fn clamp_depth(depth: u8, strategy: SearchStrategy) -> u8 {
        let max = match strategy {
            SearchStrategy::Recursive => MAX_DEPTH,
            SearchStrategy::Materialized => MAX_MATERIALIZED_DEPTH,
        };
        if depth > max {
            warn!("depth {} capped at {} for {:?} search", depth, max, strategy);
        }
        depth.clamp(MIN_DEPTH, max)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = Self::clamp_depth(depth, self.config.strategy);
    }

    /// Move for `player`, or `Ok(None)` when `player` has to pass.
    /// Any other search failure is returned to the caller.
    pub fn get_move(&self, board: &Board, player: Player) -> Result<Option<Move>, SearchError> {
        match search(board, player, player, &self.config) {
            Ok(outcome) => {
                info!(
                    "{} plays {} (value {}, {} nodes)",
                    player, outcome.best_move, outcome.value, outcome.stats.nodes
                );
                Ok(Some(outcome.best_move))
            }
            Err(SearchError::NoLegalMove(_)) => {
                info!("{} has no legal move and passes", player);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for OthelloAI {
    fn default() -> Self {
        OthelloAI::new(DEFAULT_DEPTH)
    }
}
