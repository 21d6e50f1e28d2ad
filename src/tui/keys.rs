/// Keyboard event to command mapping
///
/// This module converts crossterm KeyEvents into scoreboard actions or
/// host-only commands (name input editing, quitting).
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use crate::game::Action;
use crate::types::TeamId;

/// What the host should do with a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Dispatch(Action),
    /// Start editing a team name, seeding the input with the current name
    BeginEdit(TeamId),
    PushChar(char),
    Backspace,
    CycleColor(TeamId),
    Quit,
}

/// Handle keys while a team name is being edited
///
/// Every printable key goes into the input, so scoring shortcuts are disabled
/// until the edit is committed or cancelled.
fn handle_edit_keys(key: KeyEvent, team: TeamId, input: &str) -> Option<HostCommand> {
    match key.code {
        KeyCode::Enter => Some(HostCommand::Dispatch(Action::CommitName {
            team,
            name: input.to_string(),
        })),
        KeyCode::Esc => Some(HostCommand::Dispatch(Action::CancelEdit)),
        KeyCode::Backspace => Some(HostCommand::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostCommand::PushChar(c))
        }
        _ => None,
    }
}

fn handle_scoreboard_keys(key: KeyEvent) -> Option<HostCommand> {
    let action = match key.code {
        KeyCode::Char('q') => return Some(HostCommand::Quit),
        KeyCode::Char('a') => Action::IncrementScore(TeamId::Team1),
        KeyCode::Char('z') => Action::DecrementScore(TeamId::Team1),
        KeyCode::Char('k') => Action::IncrementScore(TeamId::Team2),
        KeyCode::Char('m') => Action::DecrementScore(TeamId::Team2),
        KeyCode::Char('A') => Action::IncrementTally(TeamId::Team1),
        KeyCode::Char('Z') => Action::DecrementTally(TeamId::Team1),
        KeyCode::Char('K') => Action::IncrementTally(TeamId::Team2),
        KeyCode::Char('M') => Action::DecrementTally(TeamId::Team2),
        KeyCode::Char('r') => Action::ResetScores,
        KeyCode::Char('R') => Action::ResetTallies,
        KeyCode::Char('e') => return Some(HostCommand::BeginEdit(TeamId::Team1)),
        KeyCode::Char('E') => return Some(HostCommand::BeginEdit(TeamId::Team2)),
        KeyCode::Char('c') => return Some(HostCommand::CycleColor(TeamId::Team1)),
        KeyCode::Char('C') => return Some(HostCommand::CycleColor(TeamId::Team2)),
        _ => return None,
    };
    Some(HostCommand::Dispatch(action))
}

/// Map a key press to a host command
///
/// `editing` is the store's current edit focus and `input` the host-local
/// name buffer.
pub fn key_to_command(key: KeyEvent, editing: Option<TeamId>, input: &str) -> Option<HostCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(HostCommand::Quit);
    }

    let command = match editing {
        Some(team) => handle_edit_keys(key, team, input),
        None => handle_scoreboard_keys(key),
    };
    trace!("KEY: {:?} -> {:?}", key.code, command);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_score_keys() {
        assert_eq!(
            key_to_command(press(KeyCode::Char('a')), None, ""),
            Some(HostCommand::Dispatch(Action::IncrementScore(TeamId::Team1)))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('m')), None, ""),
            Some(HostCommand::Dispatch(Action::DecrementScore(TeamId::Team2)))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('r')), None, ""),
            Some(HostCommand::Dispatch(Action::ResetScores))
        );
    }

    #[test]
    fn test_tally_keys() {
        assert_eq!(
            key_to_command(press(KeyCode::Char('K')), None, ""),
            Some(HostCommand::Dispatch(Action::IncrementTally(TeamId::Team2)))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('R')), None, ""),
            Some(HostCommand::Dispatch(Action::ResetTallies))
        );
    }

    #[test]
    fn test_edit_key_begins_edit() {
        assert_eq!(
            key_to_command(press(KeyCode::Char('E')), None, ""),
            Some(HostCommand::BeginEdit(TeamId::Team2))
        );
    }

    #[test]
    fn test_characters_go_to_input_while_editing() {
        assert_eq!(
            key_to_command(press(KeyCode::Char('a')), Some(TeamId::Team1), "Eag"),
            Some(HostCommand::PushChar('a'))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('q')), Some(TeamId::Team1), ""),
            Some(HostCommand::PushChar('q'))
        );
    }

    #[test]
    fn test_enter_commits_input() {
        assert_eq!(
            key_to_command(press(KeyCode::Enter), Some(TeamId::Team2), " Hawks "),
            Some(HostCommand::Dispatch(Action::CommitName {
                team: TeamId::Team2,
                name: " Hawks ".to_string(),
            }))
        );
    }

    #[test]
    fn test_esc_cancels_edit() {
        assert_eq!(
            key_to_command(press(KeyCode::Esc), Some(TeamId::Team1), "x"),
            Some(HostCommand::Dispatch(Action::CancelEdit))
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_command(key, Some(TeamId::Team1), ""), Some(HostCommand::Quit));
        assert_eq!(key_to_command(key, None, ""), Some(HostCommand::Quit));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(key_to_command(press(KeyCode::Char('x')), None, ""), None);
        assert_eq!(key_to_command(press(KeyCode::Tab), Some(TeamId::Team1), ""), None);
    }
}
