use othello_core::{BoardError, Player};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The player to move has nothing to play and must pass.
    #[error("{0} has no legal move")]
    NoLegalMove(Player),
    #[error(transparent)]
    Board(#[from] BoardError),
}
