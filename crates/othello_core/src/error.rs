use thiserror::Error;

use crate::{Player, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The move fails `is_legal_move`. Callers are expected to validate first.
    #[error("illegal move at {position} for {player}")]
    IllegalMove { position: Position, player: Player },
    #[error("invalid board notation: {0}")]
    Parse(String),
}
