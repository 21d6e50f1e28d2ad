//! Score and tally store
//!
//! Two live scores, two games-won tallies and the name edit focus, changed
//! only through `Action`s applied by the pure `reduce` function.

pub mod action;
pub mod labels;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::Action;
pub use reducer::{normalize_team_name, reduce};
pub use state::{GameState, GameWins, Team};
pub use store::GameStore;
