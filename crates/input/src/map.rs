//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command.
///
/// Down starts soft drop; the matching stop comes from
/// [`handle_key_release`] on terminals that report releases, or from the
/// caller's grace timer on terminals that do not.
pub fn handle_key_press(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDropOn)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::RotateCw),
        KeyCode::Char('z')
        | KeyCode::Char('Z')
        | KeyCode::Char('y')
        | KeyCode::Char('Y') => Some(Command::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(Command::HardDrop),

        _ => None,
    }
}

/// Map a key release to a game command (kitty-protocol terminals only).
pub fn handle_key_release(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDropOff)
        }
        _ => None,
    }
}

/// Check if key restarts the game.
pub fn is_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Char('H'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Char('L'))),
            Some(Command::MoveRight)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Up)),
            Some(Command::RotateCw)
        );
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Char('z'))),
            Some(Command::RotateCcw)
        );
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Char('W'))),
            Some(Command::RotateCw)
        );
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Char('Y'))),
            Some(Command::RotateCcw)
        );
    }

    #[test]
    fn test_soft_drop_press_and_release() {
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Down)),
            Some(Command::SoftDropOn)
        );
        assert_eq!(
            handle_key_release(KeyEvent::from(KeyCode::Down)),
            Some(Command::SoftDropOff)
        );
        assert_eq!(
            handle_key_release(KeyEvent::from(KeyCode::Char('s'))),
            Some(Command::SoftDropOff)
        );
        // Releasing a non-drop key stops nothing.
        assert_eq!(handle_key_release(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_press(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::HardDrop)
        );
        assert!(is_reset(KeyEvent::from(KeyCode::Char('r'))));
        assert!(is_reset(KeyEvent::from(KeyCode::Char('R'))));
        assert!(!is_reset(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
