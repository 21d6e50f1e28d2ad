//! Default layout tuning values.
//!
//! These seed `LayoutConfig::default()`. Product tuning goes through the
//! `[layout]` section of the config file rather than through these constants.

// Portrait zone geometry

/// Screen divides into two equal horizontal bands, one per team
pub const ZONE_SPLIT: f64 = 0.5;

/// Maximum card height as a ratio of zone height
pub const CARD_MAX_HEIGHT_RATIO: f64 = 0.60;

/// Score font size as a ratio of card height (leaves room for the divider and games won section)
pub const SCORE_FONT_RATIO: f64 = 0.50;

/// Horizontal card margin, as a percentage of viewport width
pub const HORIZONTAL_MARGIN_PERCENT: f64 = 7.5;

/// Minimum score font size for readability
pub const MIN_SAFE_FONT_SIZE: f64 = 120.0;

/// Maximum score font size (original design size)
pub const MAX_SAFE_FONT_SIZE: f64 = 240.0;

// Controls

/// Reset button diameter
pub const RESET_BUTTON_SIZE: f64 = 56.0;

/// Portrait tally badge distance from the top edge
pub const TALLY_TOP_MARGIN: f64 = 24.0;

/// Portrait reset button vertical anchor (midline)
pub const PORTRAIT_RESET_TOP_PERCENT: f64 = 50.0;

// Landscape anchors

/// Landscape tally badge vertical anchor
pub const LANDSCAPE_TALLY_TOP_PERCENT: f64 = 25.0;

/// Landscape reset button vertical anchor
pub const LANDSCAPE_RESET_TOP_PERCENT: f64 = 45.0;

/// Offset of each team's games-won column from its outer edge
pub const LANDSCAPE_TALLY_OFFSET: f64 = 10.0;

/// Width of the centered landscape tally badge
pub const LANDSCAPE_TALLY_BADGE_WIDTH: f64 = 150.0;

// Store

/// Default points added or removed per score tap
pub const DEFAULT_SCORE_INCREMENT: u32 = 1;

/// Longest accepted team display name, in UTF-16 code units
pub const MAX_TEAM_NAME_LENGTH: usize = 20;

/// Reserved; never evaluated
pub const DEFAULT_WIN_CONDITION: u32 = 10;
