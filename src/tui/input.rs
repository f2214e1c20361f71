//! Keyboard input mapping: cursor movement and keypad squares.

use tictactoe_minimax::Position;
use crossterm::event::KeyCode;

/// Moves the cursor one square in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Square selected by a digit key, `1` top-left through `9` bottom-right.
pub fn keypad_square(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c.to_digit(10).and_then(Position::from_keypad),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_between_neighbours() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_keypad_digits() {
        assert_eq!(keypad_square(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(keypad_square(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(keypad_square(KeyCode::Char('0')), None);
        assert_eq!(keypad_square(KeyCode::Char('x')), None);
    }
}
