use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Dark => write!(f, "Dark"),
            Player::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// The player owning this cell, `None` for an empty cell.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Player::Dark),
            Cell::Light => Some(Player::Light),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn inverted(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Dark => Cell::Light,
            Cell::Light => Cell::Dark,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Dark),
            'O' => Some(Cell::Light),
            _ => None,
        }
    }
}
