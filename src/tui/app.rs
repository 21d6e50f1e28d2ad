use ratatui::style::Color;
use tracing::debug;

use super::keys::HostCommand;
use crate::config::Config;
use crate::game::{Action, GameStore};
use crate::layout::LayoutConfig;
use crate::layout_constants::MAX_TEAM_NAME_LENGTH;
use crate::types::TeamId;

/// Colors offered when cycling a team's color
pub const TEAM_PALETTE: [Color; 6] = [
    Color::Rgb(255, 0, 0),
    Color::Rgb(0, 0, 255),
    Color::Rgb(0, 160, 0),
    Color::Rgb(255, 140, 0),
    Color::Rgb(128, 0, 128),
    Color::Rgb(40, 40, 40),
];

/// Next palette entry after `current`; colors outside the palette restart at the first entry
pub fn next_team_color(current: Color) -> Color {
    match TEAM_PALETTE.iter().position(|c| *c == current) {
        Some(idx) => TEAM_PALETTE[(idx + 1) % TEAM_PALETTE.len()],
        None => TEAM_PALETTE[0],
    }
}

/// Terminal host state: the store plus what only the host needs
pub struct App {
    pub store: GameStore,
    pub layout_config: LayoutConfig,
    /// Text typed into the name field of the team holding edit focus
    pub name_input: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            store: GameStore::new(config),
            layout_config: config.layout.clone(),
            name_input: String::new(),
            should_quit: false,
        }
    }

    pub fn apply(&mut self, command: HostCommand) {
        match command {
            HostCommand::Dispatch(action) => {
                self.store.dispatch(action);
                if self.store.edit_focus().is_none() {
                    self.name_input.clear();
                }
            }
            HostCommand::BeginEdit(team) => {
                self.name_input = self.store.name(team).to_string();
                self.store.dispatch(Action::SetEditFocus(Some(team)));
            }
            HostCommand::PushChar(c) => {
                // Leave room for surrounding whitespace that the commit trims away
                if self.name_input.chars().count() < MAX_TEAM_NAME_LENGTH * 2 {
                    self.name_input.push(c);
                }
            }
            HostCommand::Backspace => {
                self.name_input.pop();
            }
            HostCommand::CycleColor(team) => {
                let color = next_team_color(self.store.color(team));
                self.store.dispatch(Action::SetTeamColor { team, color });
            }
            HostCommand::Quit => {
                debug!("APP: Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Name field contents for `team` while it is being edited
    pub fn editing_input(&self, team: TeamId) -> Option<&str> {
        self.store
            .is_editing(team)
            .then_some(self.name_input.as_str())
    }
}
