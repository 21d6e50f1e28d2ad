//! Screen reader labels handed through to the presentation layer.

use crate::types::TeamId;

/// e.g. "Team 1 games won: 3"
pub fn wins_label(team: TeamId, wins: u32) -> String {
    let game_text = if wins == 1 { "game" } else { "games" };
    format!("Team {} {} won: {}", team.number(), game_text, wins)
}

/// e.g. "Increment team 2 games won"
pub fn tally_button_label(team: TeamId, increment: bool) -> String {
    let verb = if increment { "Increment" } else { "Decrement" };
    format!("{} team {} games won", verb, team.number())
}

pub fn total_games_label(total_games: u32) -> String {
    format!("Game {} of match", total_games)
}

pub fn score_label(name: &str, score: u32) -> String {
    format!("{} score: {}", name, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wins_label_pluralization() {
        assert_eq!(wins_label(TeamId::Team1, 0), "Team 1 games won: 0");
        assert_eq!(wins_label(TeamId::Team1, 1), "Team 1 game won: 1");
        assert_eq!(wins_label(TeamId::Team2, 5), "Team 2 games won: 5");
    }

    #[test]
    fn test_tally_button_label() {
        assert_eq!(tally_button_label(TeamId::Team1, true), "Increment team 1 games won");
        assert_eq!(tally_button_label(TeamId::Team2, false), "Decrement team 2 games won");
    }

    #[test]
    fn test_total_games_label() {
        assert_eq!(total_games_label(3), "Game 3 of match");
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label("Eagles", 12), "Eagles score: 12");
    }
}
