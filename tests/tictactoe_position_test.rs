//! Tests for tic-tac-toe positions and board parsing.

use strum::IntoEnumIterator;
use tictactoe_minimax::{Board, BoardParseError, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_iteration_matches_index_order() {
    let indices: Vec<usize> = Position::iter().map(Position::to_index).collect();
    assert_eq!(indices, (0..9).collect::<Vec<_>>());
    assert_eq!(Position::iter().collect::<Vec<_>>(), Position::ALL.to_vec());
}

#[test]
fn test_keypad_numbers_are_one_based() {
    assert_eq!(Position::from_keypad(1), Some(Position::TopLeft));
    assert_eq!(Position::from_keypad(5), Some(Position::Center));
    assert_eq!(Position::from_keypad(0), None);
    assert_eq!(Position::from_keypad(10), None);
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("Top-right"), Some(Position::TopRight));
    assert_eq!(Position::from_label_or_number("6"), Some(Position::BottomLeft));
    assert_eq!(Position::from_label_or_number("nowhere"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_board_parse_accepts_empty_markers() {
    let a = Board::parse("X.O-_ ...").unwrap();
    let b = Board::parse("x.o|...|...").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_compact(), "X.O......");
}

#[test]
fn test_board_parse_errors() {
    assert_eq!(Board::parse(""), Err(BoardParseError::WrongLength(0)));
    assert_eq!(
        Board::parse("XOXOXOXOXO"),
        Err(BoardParseError::WrongLength(10))
    );
    assert!(matches!(
        Board::parse("XO?......"),
        Err(BoardParseError::InvalidSymbol { index: 2, symbol: '?' })
    ));
}
