// Minimax search with alpha-beta pruning over Othello positions
use std::ops::AddAssign;

use log::{debug, trace};
use othello_core::{Board, Move, Player};
use rayon::prelude::*;

use crate::error::SearchError;
use crate::evaluation::heuristic;
use crate::tree::SearchNode;

// Search window bounds, standing in for -infinity / +infinity
pub const ALPHA_INIT: i32 = i32::MIN;
pub const BETA_INIT: i32 = i32::MAX;

/// Plies searched by default, root move included.
pub const DEFAULT_DEPTH: u8 = 5;

/// How the game tree below each root move is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Depth-first recursion, only the current line is kept in memory
    #[default]
    Recursive,
    /// Build the whole tree of [`SearchNode`]s first, then evaluate it
    Materialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub debug: bool,
    /// When false the window is never tightened and every node is visited.
    pub alpha_beta: bool,
    /// Evaluate the root moves on the rayon thread pool.
    pub parallel: bool,
    pub strategy: SearchStrategy,
}

impl SearchConfig {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_alpha_beta(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            debug: false,
            alpha_beta: true,
            parallel: false,
            strategy: SearchStrategy::Recursive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Value of `best_move` from the reference player's point of view
    pub value: i32,
    /// Every root move with its value, in move generation order
    pub root_values: Vec<(Move, i32)>,
    pub stats: SearchStats,
}

/// Best move for `player` searching `depth` plies, maximizing `player`'s own
/// advantage.
pub fn best_move(board: &Board, player: Player, depth: u8) -> Result<Move, SearchError> {
    search(board, player, player, &SearchConfig::new(depth)).map(|outcome| outcome.best_move)
}

/// Searches every legal move of `player` and picks the one that is best for
/// `player` as judged from `reference`'s perspective: the maximum when
/// `player == reference`, the minimum otherwise. Ties go to the earliest move
/// in row-major order.
pub fn search(
    board: &Board,
    player: Player,
    reference: Player,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return Err(SearchError::NoLegalMove(player));
    }

    let opponent = player.opponent();
    let child_depth = config.depth.saturating_sub(1);
    let maximizing = opponent == reference;

    // Each root move is searched with a full window so its value is exact.
    let evaluate_root_move = |mv: Move| -> Result<(i32, SearchStats), SearchError> {
        let child = board.apply_move(mv, player)?;
        match config.strategy {
            SearchStrategy::Recursive => {
                let mut searcher = Searcher::new(reference, config.alpha_beta);
                let value = searcher.value(&child, opponent, child_depth, ALPHA_INIT, BETA_INIT, maximizing)?;
                Ok((value, searcher.stats))
            }
            SearchStrategy::Materialized => {
                let mut stats = SearchStats::default();
                let mut node = SearchNode::build(child, opponent, child_depth)?;
                let value = node.evaluate(reference, ALPHA_INIT, BETA_INIT, maximizing, config.alpha_beta, &mut stats);
                Ok((value, stats))
            }
        }
    };

    // Parallel results come back in move order, so the tie-break below is
    // applied exactly as in the sequential case.
    let evaluated: Vec<(i32, SearchStats)> = if config.parallel {
        moves
            .par_iter()
            .map(|&mv| evaluate_root_move(mv))
            .collect::<Result<_, _>>()?
    } else {
        moves
            .iter()
            .map(|&mv| evaluate_root_move(mv))
            .collect::<Result<_, _>>()?
    };

    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };
    let mut root_values = Vec::with_capacity(moves.len());
    for (&mv, (value, child_stats)) in moves.iter().zip(evaluated) {
        stats += child_stats;
        root_values.push((mv, value));
    }

    let (best_move, value) =
        select(&root_values, player == reference).ok_or(SearchError::NoLegalMove(player))?;

    if config.debug {
        for (mv, value) in &root_values {
            debug!("  {} -> {}", mv, value);
        }
        debug!(
            "{} to move, depth {}: best {} ({}), {} nodes, {} leaves, {} cutoffs",
            player, config.depth, best_move, value, stats.nodes, stats.leaves, stats.cutoffs
        );
    }

    Ok(SearchOutcome {
        best_move,
        value,
        root_values,
        stats,
    })
}

/// First entry holding the maximum (or minimum) value.
fn select(values: &[(Move, i32)], maximize: bool) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for &(mv, value) in values {
        let better = match best {
            None => true,
            Some((_, best_value)) if maximize => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if better {
            best = Some((mv, value));
        }
    }
    best
}

/// Depth-first alpha-beta over fresh board copies. Holds no state besides
/// the counters, so one searcher per root move is enough.
struct Searcher {
    reference: Player,
    alpha_beta: bool,
    stats: SearchStats,
}

impl Searcher {
    fn new(reference: Player, alpha_beta: bool) -> Self {
        Self {
            reference,
            alpha_beta,
            stats: SearchStats::default(),
        }
    }

    fn value(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchError> {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return Ok(heuristic(board, self.reference));
        }

        let moves = board.legal_moves(player);
        if moves.is_empty() {
            if !board.has_legal_move(player.opponent()) {
                // Game over
                self.stats.leaves += 1;
                return Ok(heuristic(board, self.reference));
            }
            // Forced pass still costs a ply
            return self.value(board, player.opponent(), depth - 1, alpha, beta, !maximizing);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let child = board.apply_move(mv, player)?;
            let value = self.value(&child, player.opponent(), depth - 1, alpha, beta, !maximizing)?;

            if maximizing {
                best = best.max(value);
                if self.alpha_beta {
                    alpha = alpha.max(value);
                }
            } else {
                best = best.min(value);
                if self.alpha_beta {
                    beta = beta.min(value);
                }
            }

            if self.alpha_beta && beta <= alpha {
                trace!("cutoff at depth {} after {} (alpha {}, beta {})", depth, mv, alpha, beta);
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}
