use ratatui::style::Color;

use crate::layout_constants::{DEFAULT_SCORE_INCREMENT, DEFAULT_WIN_CONDITION};
use crate::types::TeamId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub score: u32,
    pub color: Color,
}

impl Team {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            score: 0,
            color,
        }
    }

    /// Out-of-the-box name and color: red "Team 1", blue "Team 2"
    pub fn default_for(team: TeamId) -> Self {
        match team {
            TeamId::Team1 => Team::new("Team 1", Color::Rgb(255, 0, 0)),
            TeamId::Team2 => Team::new("Team 2", Color::Rgb(0, 0, 255)),
        }
    }
}

/// Games won per team; separate lifecycle from the live score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameWins {
    pub team1: u32,
    pub team2: u32,
}

impl GameWins {
    pub fn get(&self, team: TeamId) -> u32 {
        match team {
            TeamId::Team1 => self.team1,
            TeamId::Team2 => self.team2,
        }
    }

    pub fn get_mut(&mut self, team: TeamId) -> &mut u32 {
        match team {
            TeamId::Team1 => &mut self.team1,
            TeamId::Team2 => &mut self.team2,
        }
    }
}

/// Root game state - single source of truth for one scoreboard
///
/// All changes happen through `reduce`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub team1: Team,
    pub team2: Team,
    pub game_wins: GameWins,
    pub score_increment: u32,
    pub editing_team: Option<TeamId>,

    // Reserved for a future game-over flow; nothing evaluates these
    pub win_condition: u32,
    pub is_game_active: bool,
    pub winner: Option<TeamId>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            team1: Team::default_for(TeamId::Team1),
            team2: Team::default_for(TeamId::Team2),
            game_wins: GameWins::default(),
            score_increment: DEFAULT_SCORE_INCREMENT,
            editing_team: None,
            win_condition: DEFAULT_WIN_CONDITION,
            is_game_active: true,
            winner: None,
        }
    }
}

impl GameState {
    pub fn team(&self, team: TeamId) -> &Team {
        match team {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
        }
    }

    pub fn team_mut(&mut self, team: TeamId) -> &mut Team {
        match team {
            TeamId::Team1 => &mut self.team1,
            TeamId::Team2 => &mut self.team2,
        }
    }

    /// Number of the game currently being played
    pub fn total_games(&self) -> u32 {
        self.game_wins
            .team1
            .saturating_add(self.game_wins.team2)
            .saturating_add(1)
    }
}
