// Core Othello rules modules
pub mod board;
pub mod error;
pub mod piece;
pub mod position;
pub mod moves;

// Re-export main types for convenience
pub use board::Board;
pub use error::BoardError;
pub use piece::{Cell, Player};
pub use position::{Direction, Position};
pub use moves::Move;

/// Standard starting position: Dark on (3,4) and (4,3), Light on (3,3) and (4,4).
pub fn initial_board() -> Board {
    Board::new()
}

pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    board.legal_moves(player)
}

pub fn is_legal_move(board: &Board, mv: Move, player: Player) -> bool {
    board.is_legal_move(mv, player)
}

/// Returns a copy of `board` with `mv` played by `player`.
pub fn apply_move(board: &Board, mv: Move, player: Player) -> Result<Board, BoardError> {
    board.apply_move(mv, player)
}

pub fn is_game_over(board: &Board) -> bool {
    board.is_game_over()
}

pub fn score(board: &Board, player: Player) -> u32 {
    board.score(player)
}
