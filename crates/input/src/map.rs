//! Key mapping from terminal events to engine commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an engine command.
///
/// `running` mirrors the game's state: direction keys only count while a game
/// is running, and space only starts a game that is not running. Enter acts
/// as the start/stop button and works in every state.
pub fn map_key(key: KeyEvent, running: bool) -> Option<Command> {
    if let Some(dir) = direction_for(key.code) {
        return running.then_some(Command::Turn(dir));
    }

    match key.code {
        KeyCode::Char(' ') if !running => Some(Command::Start),
        KeyCode::Enter => Some(Command::Toggle),
        _ => None,
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            map_key(key(KeyCode::Up), true),
            Some(Command::Turn(Direction::Up))
        );
        assert_eq!(
            map_key(key(KeyCode::Down), true),
            Some(Command::Turn(Direction::Down))
        );
        assert_eq!(
            map_key(key(KeyCode::Left), true),
            Some(Command::Turn(Direction::Left))
        );
        assert_eq!(
            map_key(key(KeyCode::Right), true),
            Some(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_either_case() {
        for (lower, upper, dir) in [
            ('w', 'W', Direction::Up),
            ('a', 'A', Direction::Left),
            ('s', 'S', Direction::Down),
            ('d', 'D', Direction::Right),
        ] {
            assert_eq!(
                map_key(key(KeyCode::Char(lower)), true),
                Some(Command::Turn(dir))
            );
            assert_eq!(
                map_key(key(KeyCode::Char(upper)), true),
                Some(Command::Turn(dir))
            );
        }
    }

    #[test]
    fn test_direction_keys_ignored_when_not_running() {
        assert_eq!(map_key(key(KeyCode::Up), false), None);
        assert_eq!(map_key(key(KeyCode::Char('d')), false), None);
    }

    #[test]
    fn test_space_only_starts_a_stopped_game() {
        assert_eq!(map_key(key(KeyCode::Char(' ')), false), Some(Command::Start));
        assert_eq!(map_key(key(KeyCode::Char(' ')), true), None);
    }

    #[test]
    fn test_enter_toggles_in_any_state() {
        assert_eq!(map_key(key(KeyCode::Enter), false), Some(Command::Toggle));
        assert_eq!(map_key(key(KeyCode::Enter), true), Some(Command::Toggle));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(key(KeyCode::Char('x')), true), None);
        assert_eq!(map_key(key(KeyCode::Tab), false), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Char('x'))));
    }
}
