use tracing::trace;

use super::config::{Dimension, LayoutConfig};
use crate::types::{Orientation, TeamId, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAnchor {
    Top(f64),
    Bottom(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalAnchor {
    Left(Dimension),
    Right(Dimension),
}

/// Absolute position of a team's score card inside its band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelOffset {
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
}

/// Top band belongs to team 1, bottom band to team 2; placement is mirrored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelOffsets {
    pub top: PanelOffset,
    pub bottom: PanelOffset,
}

/// Where the shared controls sit for the current orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlAnchors {
    /// Vertical anchor of the "wins - wins" tally badge
    pub tally_badge_top: Dimension,
    /// Fixed badge width (landscape only)
    pub tally_badge_width: Option<f64>,
    /// Vertical anchor of the reset button center
    pub reset_button_top: Dimension,
    pub reset_button_size: f64,
    /// Distance of each team's games-won column from its outer edge (landscape only)
    pub team_tally_offset: Option<f64>,
}

/// Geometry derived from one viewport sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub orientation: Orientation,
    pub zone_height: f64,
    pub max_card_height: f64,
    pub safe_font_size: f64,
    /// `max_card_height` as a fraction of viewport height
    pub max_height_fraction: f64,
    pub panel_offsets: PanelOffsets,
    pub controls: ControlAnchors,
}

impl LayoutResult {
    /// Max card height as a percentage of the screen height
    pub fn max_height_percent(&self) -> f64 {
        self.max_height_fraction * 100.0
    }

    pub fn panel_offset(&self, team: TeamId) -> PanelOffset {
        match team {
            TeamId::Team1 => self.panel_offsets.top,
            TeamId::Team2 => self.panel_offsets.bottom,
        }
    }
}

/// `width > height` is landscape; ties and degenerate samples are portrait
pub fn classify_orientation(viewport: Viewport) -> Orientation {
    if viewport.is_usable() && viewport.width > viewport.height {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}

/// Score digit size for a card of the given height, bounded to the readable range
///
/// Uses min/max rather than `f64::clamp` so inverted bounds cannot panic.
pub fn safe_font_size(max_card_height: f64, config: &LayoutConfig) -> f64 {
    let scaled = finite_or_zero(max_card_height * config.score_font_ratio);
    config
        .max_safe_font_size
        .min(config.min_safe_font_size.max(scaled))
}

/// Derive the full layout for a viewport sample
///
/// Pure: the same `(viewport, config)` always yields the same result, and
/// unusable samples produce a zeroed portrait layout instead of NaN.
pub fn compute_layout(viewport: Viewport, config: &LayoutConfig) -> LayoutResult {
    let orientation = classify_orientation(viewport);

    let (zone_height, max_card_height, max_height_fraction) = if viewport.is_usable() {
        let zone_height = finite_or_zero(viewport.height * config.zone_split);
        let max_card_height = finite_or_zero(zone_height * config.card_max_height_ratio);
        let fraction = finite_or_zero(max_card_height / viewport.height);
        (zone_height, max_card_height, fraction)
    } else {
        trace!(
            "LAYOUT: Unusable viewport {}x{}, using zeroed geometry",
            viewport.width,
            viewport.height
        );
        (0.0, 0.0, 0.0)
    };

    let vertical_margin = finite_or_zero((zone_height - max_card_height) / 2.0);
    let panel_offsets = PanelOffsets {
        top: PanelOffset {
            vertical: VerticalAnchor::Top(vertical_margin),
            horizontal: HorizontalAnchor::Left(config.horizontal_margin),
        },
        bottom: PanelOffset {
            vertical: VerticalAnchor::Bottom(vertical_margin),
            horizontal: HorizontalAnchor::Right(config.horizontal_margin),
        },
    };

    let result = LayoutResult {
        orientation,
        zone_height,
        max_card_height,
        safe_font_size: safe_font_size(max_card_height, config),
        max_height_fraction,
        panel_offsets,
        controls: control_anchors(orientation, config),
    };

    trace!(
        "LAYOUT: {}x{} -> {} card={:.1} font={:.1}",
        viewport.width,
        viewport.height,
        result.orientation,
        result.max_card_height,
        result.safe_font_size
    );

    result
}

fn control_anchors(orientation: Orientation, config: &LayoutConfig) -> ControlAnchors {
    match orientation {
        Orientation::Portrait => ControlAnchors {
            tally_badge_top: Dimension::Px(config.tally_top_margin),
            tally_badge_width: None,
            reset_button_top: config.portrait_reset_top,
            reset_button_size: config.reset_button_size,
            team_tally_offset: None,
        },
        Orientation::Landscape => ControlAnchors {
            tally_badge_top: config.landscape_tally_top,
            tally_badge_width: Some(config.landscape_tally_badge_width),
            reset_button_top: config.landscape_reset_top,
            reset_button_size: config.reset_button_size,
            team_tally_offset: Some(config.landscape_tally_offset),
        },
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
