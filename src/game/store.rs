use ratatui::style::Color;
use tracing::trace;

use super::action::Action;
use super::reducer::reduce;
use super::state::{GameState, Team};
use crate::config::Config;
use crate::types::TeamId;

/// Owns one scoreboard's state and applies actions in dispatch order
///
/// Stores are plain values: create as many isolated ones as needed.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    state: GameState,
}

impl GameStore {
    /// Seed team names, colors and the score step from configuration
    pub fn new(config: &Config) -> Self {
        let mut state = GameState {
            score_increment: config.score_increment,
            ..GameState::default()
        };
        for team in TeamId::ALL {
            *state.team_mut(team) = Team::new(config.teams.name(team), config.teams.color(team));
        }
        Self::from_state(state)
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Apply one action
    ///
    /// Uses mem::take to move the state through the reducer without cloning.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self, team: TeamId) -> u32 {
        self.state.team(team).score
    }

    pub fn wins(&self, team: TeamId) -> u32 {
        self.state.game_wins.get(team)
    }

    pub fn edit_focus(&self) -> Option<TeamId> {
        self.state.editing_team
    }

    pub fn is_editing(&self, team: TeamId) -> bool {
        self.state.editing_team == Some(team)
    }

    pub fn name(&self, team: TeamId) -> &str {
        &self.state.team(team).name
    }

    pub fn color(&self, team: TeamId) -> Color {
        self.state.team(team).color
    }

    pub fn total_games(&self) -> u32 {
        self.state.total_games()
    }
}
