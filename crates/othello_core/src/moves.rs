use std::fmt;

use crate::{Board, Direction, Player, Position};

/// A disc placement. Passing is not a move; callers skip the turn instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub to: Position,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        Position::new(row, col).map(|to| Self { to })
    }

    /// The target must be empty and at least one direction must capture.
    pub fn is_valid(&self, board: &Board, player: Player) -> bool {
        if !board.cell(self.to).is_empty() {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&direction| captures_along(board, self.to, direction, player))
    }

    /// Every position this move would recolor, grouped by direction in
    /// `Direction::ALL` order. Empty when the move is not valid.
    pub fn flips(&self, board: &Board, player: Player) -> Vec<Position> {
        if !board.cell(self.to).is_empty() {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        for direction in Direction::ALL {
            if !captures_along(board, self.to, direction, player) {
                continue;
            }
            let mut current = self.to.step(direction);
            while let Some(pos) = current {
                if board.cell(pos).owner() != Some(player.opponent()) {
                    break;
                }
                flipped.push(pos);
                current = pos.step(direction);
            }
        }
        flipped
    }
}

impl From<Position> for Move {
    fn from(to: Position) -> Self {
        Self { to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to, f)
    }
}

/// Walks from `from` in `direction` over opponent discs. True only if at
/// least one opponent disc is crossed and the run ends on one of `player`'s
/// discs before the edge or an empty square.
pub(crate) fn captures_along(board: &Board, from: Position, direction: Direction, player: Player) -> bool {
    let opponent = player.opponent();
    let mut crossed = 0;
    let mut current = from.step(direction);

    while let Some(pos) = current {
        match board.cell(pos).owner() {
            Some(owner) if owner == opponent => crossed += 1,
            Some(_) => return crossed > 0,
            None => return false,
        }
        current = pos.step(direction);
    }

    false
}
