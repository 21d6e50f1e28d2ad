use tracing::debug;

use super::action::Action;
use super::state::GameState;
use crate::layout_constants::MAX_TEAM_NAME_LENGTH;

/// Pure state reducer
///
/// Takes the current state and an action, returns the next state. No I/O and
/// no failure path: inputs that would break an invariant (decrement below
/// zero, blank names) leave the state unchanged instead.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok(state) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: GameState, action: Action) -> GameState {
    let state = match reduce_scores(state, &action) {
        Ok(state) => return state,
        Err(state) => state,
    };

    let state = match reduce_tallies(state, &action) {
        Ok(state) => return state,
        Err(state) => state,
    };

    let state = match reduce_edit_focus(state, &action) {
        Ok(state) => return state,
        Err(state) => state,
    };

    match action {
        Action::SetTeamColor { team, color } => {
            let mut new_state = state;
            new_state.team_mut(team).color = color;
            new_state
        }
        _ => state,
    }
}

fn reduce_scores(state: GameState, action: &Action) -> Result<GameState, GameState> {
    let mut new_state = state;
    match action {
        Action::IncrementScore(team) => {
            let step = new_state.score_increment;
            let score = &mut new_state.team_mut(*team).score;
            *score = score.saturating_add(step);
            debug!("SCORE: {} -> {}", team, score);
        }
        Action::DecrementScore(team) => {
            let step = new_state.score_increment;
            let score = &mut new_state.team_mut(*team).score;
            *score = score.saturating_sub(step);
            debug!("SCORE: {} -> {}", team, score);
        }
        Action::ResetScores => {
            new_state.team1.score = 0;
            new_state.team2.score = 0;
            new_state.is_game_active = true;
            new_state.winner = None;
            debug!("SCORE: Reset (wins stay {} - {})", new_state.game_wins.team1, new_state.game_wins.team2);
        }
        _ => return Err(new_state),
    }
    Ok(new_state)
}

fn reduce_tallies(state: GameState, action: &Action) -> Result<GameState, GameState> {
    let mut new_state = state;
    match action {
        Action::IncrementTally(team) => {
            let wins = new_state.game_wins.get_mut(*team);
            *wins = wins.saturating_add(1);
            debug!("TALLY: {} -> {}", team, wins);
        }
        Action::DecrementTally(team) => {
            let wins = new_state.game_wins.get_mut(*team);
            *wins = wins.saturating_sub(1);
            debug!("TALLY: {} -> {}", team, wins);
        }
        Action::ResetTallies => {
            new_state.game_wins.team1 = 0;
            new_state.game_wins.team2 = 0;
            debug!("TALLY: Reset");
        }
        _ => return Err(new_state),
    }
    Ok(new_state)
}

fn reduce_edit_focus(state: GameState, action: &Action) -> Result<GameState, GameState> {
    let mut new_state = state;
    match action {
        Action::SetEditFocus(team) => {
            debug!("EDIT: Focus {:?} -> {:?}", new_state.editing_team, team);
            new_state.editing_team = *team;
        }
        Action::CancelEdit => {
            debug!("EDIT: Cancelled");
            new_state.editing_team = None;
        }
        Action::CommitName { team, name } => {
            match normalize_team_name(name) {
                Some(valid) => {
                    debug!("EDIT: {} renamed to {:?}", team, valid);
                    new_state.team_mut(*team).name = valid;
                }
                None => debug!("EDIT: Blank name for {} ignored", team),
            }
            // Focus is released whether or not the name was accepted
            new_state.editing_team = None;
        }
        _ => return Err(new_state),
    }
    Ok(new_state)
}

/// Trim and cap a raw name; `None` when nothing is left after trimming
///
/// The cap counts UTF-16 code units. A character that would cross the cap is
/// dropped whole, never split.
pub fn normalize_team_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut units = 0;
    let capped: String = trimmed
        .chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= MAX_TEAM_NAME_LENGTH
        })
        .collect();
    Some(capped)
}
