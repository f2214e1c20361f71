//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game, identified by the mark they place.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parses a mark from a single character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Parses a board from nine symbols in row-major order.
    ///
    /// `X` and `O` (any case) are marks; `.`, `-`, `_` and space are empty.
    /// Row separators (`|`, `/`, newline) are ignored, so both
    /// `"XO.X..O.."` and `"XO.|X..|O.."` are accepted.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, BoardParseError> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| *c != '|' && *c != '\n' && *c != '/')
            .collect();

        if symbols.len() != 9 {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (index, symbol) in symbols.into_iter().enumerate() {
            squares[index] = match symbol {
                '.' | '-' | '_' | ' ' => Square::Empty,
                c => match Player::from_char(c) {
                    Some(player) => Square::Occupied(player),
                    None => return Err(BoardParseError::InvalidSymbol { index, symbol: c }),
                },
            };
        }

        Ok(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// The player whose turn it is, assuming X moved first.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based keypad number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact nine-character form, `.` for empty squares.
    pub fn to_compact(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The string did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// A symbol other than a mark or an empty marker was found.
    #[display("Invalid symbol {:?} at square {}", symbol, index)]
    InvalidSymbol {
        /// Square index (0-8).
        index: usize,
        /// The offending character.
        symbol: char,
    },
}

impl std::error::Error for BoardParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_separators() {
        let board = Board::parse("XO.|.X.|..O").unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.to_compact(), "XO..X...O");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(Board::parse("XO"), Err(BoardParseError::WrongLength(2)));
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        assert_eq!(
            Board::parse("XO.Z....."),
            Err(BoardParseError::InvalidSymbol { index: 3, symbol: 'Z' })
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_count_marks() {
        let board = Board::parse("XOX.O....").unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.next_player(), Player::X);
        assert_eq!(board.with_mark(Position::BottomRight, Player::X).next_player(), Player::O);
    }
}
