//! Keyboard handling.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Place a mark at the cursor.
    PlaceAtCursor,
    /// Place a mark at a keypad position.
    Place(Position),
    /// Restart in the current mode.
    Restart,
    /// Restart in the other mode.
    ToggleMode,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, `None` for keys the game ignores.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| Position::from_label_or_number(&digit.to_string()))
            .map(Action::Place),
        _ => None,
    }
}

/// Moves the cursor one square, staying put at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
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
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
    }

    #[test]
    fn test_keypad_digits() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Place(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Place(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::PlaceAtCursor));
        assert_eq!(action_for(KeyCode::Char('m')), Some(Action::ToggleMode));
        assert_eq!(action_for(KeyCode::Tab), None);
    }
}
