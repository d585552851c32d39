//! Core domain types for noughts and crosses.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Crosses (always moves first).
    X,
    /// Noughts.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a single board character into a mark.
    fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square taken by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 board, squares stored in row-major order (0-8).
///
/// The board always holds exactly nine squares. Squares are only ever
/// overwritten in place, never added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if the square at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in scan order (0 → 8).
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    occupied => write!(f, "{}", occupied.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character is neither a mark nor an empty marker.
    #[display("Unrecognized square {:?} at index {}", symbol, index)]
    BadSquare {
        /// The offending character.
        symbol: char,
        /// Its index in the board.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine characters: `X`/`O` for marks, `.`, `_`, `-` or a space
    /// for empty squares. Row separators (`/`, `|`, newlines) are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .collect();
        if symbols.len() != 9 {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (index, symbol) in symbols.into_iter().enumerate() {
            squares[index] = match symbol {
                '.' | '_' | '-' | ' ' => Square::Empty,
                c => Square::Occupied(
                    Mark::from_char(c).ok_or(BoardParseError::BadSquare { symbol: c, index })?,
                ),
            };
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().count(), 9);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "OO.XX....".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::O));
        assert_eq!(board.get(Position::TopRight), Square::Empty);
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.empty_positions().count(), 5);
    }

    #[test]
    fn test_parse_board_with_row_separators() {
        let board: Board = "xo_/_x_/__o".parse().unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::BadSquare {
                symbol: 'Z',
                index: 2
            })
        );
    }

    #[test]
    fn test_display() {
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|X");
    }
}
