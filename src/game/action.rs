use ratatui::style::Color;

use crate::types::TeamId;

/// Every state change in the scorekeeper goes through one of these
///
/// Actions are dispatched from:
/// - User input (key presses mapped by the host)
/// - Tests and other embedders driving a `GameStore` directly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Live score
    IncrementScore(TeamId),
    DecrementScore(TeamId),
    ResetScores,

    // Games won
    IncrementTally(TeamId),
    DecrementTally(TeamId),
    ResetTallies,

    // Name editing
    SetEditFocus(Option<TeamId>),
    /// Escape in the name field; same as `SetEditFocus(None)`
    CancelEdit,
    CommitName { team: TeamId, name: String },

    // Appearance
    SetTeamColor { team: TeamId, color: Color },
}
