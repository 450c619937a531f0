use othello_core::{Board, Move, Player};

use crate::error::SearchError;
use crate::evaluation::heuristic;
use crate::search::SearchStats;

/// One position of a fully built game tree.
///
/// Every node owns its children outright, so the whole tree is freed when
/// the root is dropped. Size grows as branching^depth; meant for inspection
/// and for cross-checking the recursive search on shallow depths.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    player: Player,
    depth: u8,
    moves: Vec<Move>,
    children: Vec<SearchNode>,
    value: Option<i32>,
}

impl SearchNode {
    /// Builds the tree below `board` with `player` to move, `depth` plies deep.
    ///
    /// A node has one child per legal move, in row-major order. A player with
    /// no move gets a single pass child (same board, opponent to move) unless
    /// the game is over. Nodes at depth 0 or on finished games are leaves.
    pub fn build(board: Board, player: Player, depth: u8) -> Result<Self, SearchError> {
        let mut node = Self {
            board,
            player,
            depth,
            moves: Vec::new(),
            children: Vec::new(),
            value: None,
        };

        if depth == 0 {
            return Ok(node);
        }

        node.moves = board.legal_moves(player);
        if node.moves.is_empty() {
            if board.has_legal_move(player.opponent()) {
                node.children.push(SearchNode::build(board, player.opponent(), depth - 1)?);
            }
            return Ok(node);
        }

        node.children = node
            .moves
            .iter()
            .map(|&mv| {
                let child = board.apply_move(mv, player)?;
                SearchNode::build(child, player.opponent(), depth - 1)
            })
            .collect::<Result<_, _>>()?;

        Ok(node)
    }

    /// Alpha-beta over the built tree. Caches the value on every node that
    /// gets visited; children cut off by pruning keep `None`.
    pub fn evaluate(
        &mut self,
        reference: Player,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        alpha_beta: bool,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        let value = if self.children.is_empty() {
            stats.leaves += 1;
            heuristic(&self.board, reference)
        } else if self.is_pass() {
            // A single forced reply: nothing to prune, the window passes through
            self.children[0].evaluate(reference, alpha, beta, !maximizing, alpha_beta, stats)
        } else {
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for child in &mut self.children {
                let value = child.evaluate(reference, alpha, beta, !maximizing, alpha_beta, stats);
                if maximizing {
                    best = best.max(value);
                    if alpha_beta {
                        alpha = alpha.max(value);
                    }
                } else {
                    best = best.min(value);
                    if alpha_beta {
                        beta = beta.min(value);
                    }
                }
                if alpha_beta && beta <= alpha {
                    stats.cutoffs += 1;
                    break;
                }
            }
            best
        };

        self.value = Some(value);
        value
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Legal moves of the player to move. Empty on leaves and pass nodes.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn children(&self) -> &[SearchNode] {
        &self.children
    }

    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn is_pass(&self) -> bool {
        self.moves.is_empty() && !self.children.is_empty()
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SearchNode::node_count).sum::<usize>()
    }
}
