use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use log::trace;

use crate::moves::captures_along;
use crate::position::BOARD_SIZE;
use crate::{BoardError, Cell, Direction, Move, Player, Position};

const SIZE: usize = BOARD_SIZE as usize;

/// 8x8 Othello board stored row-major, `cells[row][col]`, row 0 at the top.
///
/// The grid is only reachable through [`Position`], which cannot be built
/// out of range, so scans never index outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    fn setup_initial_position(&mut self) {
        self.cells[3][3] = Cell::Light;
        self.cells[3][4] = Cell::Dark;
        self.cells[4][3] = Cell::Dark;
        self.cells[4][4] = Cell::Light;
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row() as usize][pos.col() as usize] = cell;
    }

    pub fn is_capturing_line(&self, pos: Position, direction: Direction, player: Player) -> bool {
        captures_along(self, pos, direction, player)
    }

    pub fn is_legal_move(&self, mv: Move, player: Player) -> bool {
        mv.is_valid(self, player)
    }

    /// Legal moves in row-major order. The search relies on this order for
    /// tie-breaking.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        Position::all()
            .map(Move::from)
            .filter(|mv| mv.is_valid(self, player))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        Position::all().any(|pos| Move::from(pos).is_valid(self, player))
    }

    /// Positions recolored if `player` plays `mv`.
    pub fn flips(&self, mv: Move, player: Player) -> Vec<Position> {
        mv.flips(self, player)
    }

    pub fn apply_move(&self, mv: Move, player: Player) -> Result<Board, BoardError> {
        let mut next = *self;
        next.make_move(mv, player)?;
        Ok(next)
    }

    /// Places a disc for `player` and recolors every captured line. The board
    /// is left unchanged if the move is illegal.
    pub fn make_move(&mut self, mv: Move, player: Player) -> Result<(), BoardError> {
        let flipped = mv.flips(self, player);
        if flipped.is_empty() {
            return Err(BoardError::IllegalMove {
                position: mv.to,
                player,
            });
        }

        trace!("{} plays {} flipping {} discs", player, mv, flipped.len());

        let cell = player.cell();
        self.set(mv.to, cell);
        for pos in flipped {
            self.set(pos, cell);
        }

        Ok(())
    }

    /// Over only when neither side can move. One side without moves must pass.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Player::Dark) && !self.has_legal_move(Player::Light)
    }

    pub fn score(&self, player: Player) -> u32 {
        self.count(player.cell())
    }

    pub fn empty_count(&self) -> u32 {
        self.count(Cell::Empty)
    }

    fn count(&self, cell: Cell) -> u32 {
        self.cells.iter().flatten().filter(|&&c| c == cell).count() as u32
    }

    /// Player with more discs, `None` on a draw. Meaningful once the game is over.
    pub fn winner(&self) -> Option<Player> {
        let dark = self.score(Player::Dark);
        let light = self.score(Player::Light);
        match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Some(Player::Dark),
            std::cmp::Ordering::Less => Some(Player::Light),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The same board with every Dark and Light disc swapped.
    pub fn inverted(&self) -> Board {
        let mut board = *self;
        for cell in board.cells.iter_mut().flatten() {
            *cell = cell.inverted();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.row() as usize][pos.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses eight lines of eight cells (`X` Dark, `O` Light, `.` empty).
/// Whitespace inside a line and blank lines are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != SIZE {
            return Err(BoardError::Parse(format!("expected {} rows, found {}", SIZE, rows.len())));
        }

        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(BoardError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    SIZE
                )));
            }
            for (c, &symbol) in row.iter().enumerate() {
                board.cells[r][c] = Cell::from_symbol(symbol)
                    .ok_or_else(|| BoardError::Parse(format!("unknown cell '{}' at ({},{})", symbol, r, c)))?;
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: u8, col: u8) -> Move {
        Move::new(row, col).unwrap()
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_position_orientation() {
        let board = Board::new();
        assert_eq!(board[pos(3, 3)], Cell::Light);
        assert_eq!(board[pos(3, 4)], Cell::Dark);
        assert_eq!(board[pos(4, 3)], Cell::Dark);
        assert_eq!(board[pos(4, 4)], Cell::Light);
        assert_eq!(board.score(Player::Dark), 2);
        assert_eq!(board.score(Player::Light), 2);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn dark_has_four_opening_moves() {
        let moves = Board::new().legal_moves(Player::Dark);
        assert_eq!(moves, vec![mv(2, 3), mv(3, 2), mv(4, 5), mv(5, 4)]);
    }

    #[test]
    fn dark_opening_at_2_3() {
        let board = Board::new().apply_move(mv(2, 3), Player::Dark).unwrap();
        assert_eq!(board.score(Player::Dark), 4);
        assert_eq!(board.score(Player::Light), 1);
        assert_eq!(board[pos(3, 3)], Cell::Dark);
        assert!(!board.legal_moves(Player::Light).is_empty());
        assert!(!board.is_game_over());
    }

    #[test]
    fn capturing_line_needs_an_opponent_disc_in_between() {
        let board: Board = "
            ........
            ........
            ........
            ...OX...
            ...XX...
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        // (3,2) East: Light at (3,3) then Dark at (3,4).
        assert!(board.is_capturing_line(pos(3, 2), Direction::East, Player::Dark));
        // (3,5) West: own disc immediately adjacent.
        assert!(!board.is_capturing_line(pos(3, 5), Direction::West, Player::Dark));
        // (2,2) SouthEast: Light (3,3), Dark (4,4).
        assert!(board.is_capturing_line(pos(2, 2), Direction::SouthEast, Player::Dark));
        // Runs into empty squares.
        assert!(!board.is_capturing_line(pos(0, 0), Direction::South, Player::Dark));
    }

    #[test]
    fn line_running_off_the_board_does_not_capture() {
        let board: Board = "
            .OOOOOOO
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        assert!(!board.is_capturing_line(pos(0, 0), Direction::East, Player::Dark));
        assert!(!board.is_legal_move(mv(0, 0), Player::Dark));
    }

    #[test]
    fn occupied_square_is_never_legal() {
        let board = Board::new();
        assert!(!board.is_legal_move(mv(3, 3), Player::Dark));
        assert!(!board.is_legal_move(mv(3, 4), Player::Light));
    }

    #[test]
    fn captures_in_several_directions_at_once() {
        let board: Board = "
            X.X.X...
            .OOO....
            XO.OX...
            .OOO....
            X.X.X...
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        let after = board.apply_move(mv(2, 2), Player::Dark).unwrap();
        assert_eq!(after.score(Player::Light), 0);
        assert_eq!(after.score(Player::Dark), board.score(Player::Dark) + 1 + 8);
    }

    #[test]
    fn only_bracketed_discs_flip() {
        let board: Board = "
            ........
            ........
            ........
            XOOO.OX.
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        let flipped = board.flips(mv(3, 4), Player::Dark);
        assert_eq!(flipped, vec![pos(3, 3), pos(3, 2), pos(3, 1), pos(3, 5)]);
    }

    #[test]
    fn illegal_move_is_rejected_and_board_untouched() {
        let mut board = Board::new();
        let err = board.make_move(mv(0, 0), Player::Dark).unwrap_err();
        assert_eq!(
            err,
            BoardError::IllegalMove {
                position: pos(0, 0),
                player: Player::Dark
            }
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn one_side_stuck_is_not_game_over() {
        // Light has no move, Dark can still play (0,2).
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        assert!(board.legal_moves(Player::Light).is_empty());
        assert_eq!(board.legal_moves(Player::Dark), vec![mv(0, 2)]);
        assert!(!board.is_game_over());

        let after = board.apply_move(mv(0, 2), Player::Dark).unwrap();
        assert!(after.is_game_over());
        assert_eq!(after.winner(), Some(Player::Dark));
    }

    #[test]
    fn full_board_is_game_over() {
        let row = "XXXXOOOO\n";
        let board: Board = row.repeat(8).parse().unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.empty_count(), 0);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn display_parses_back() {
        let board = Board::new().apply_move(mv(2, 3), Player::Dark).unwrap();
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn malformed_notation_is_rejected() {
        assert!(matches!("XO".parse::<Board>(), Err(BoardError::Parse(_))));
        let bad = "........\n".repeat(7) + "......Z.\n";
        assert!(matches!(bad.parse::<Board>(), Err(BoardError::Parse(_))));
    }
}
