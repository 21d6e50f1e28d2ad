use std::fmt;

use anyhow::bail;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::layout_constants::*;

/// A length that is either absolute or relative to the enclosing extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f64),
    Percent(f64),
}

impl Dimension {
    /// Resolve to an absolute length against `extent` (the width or height it is relative to)
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Dimension::Px(px) => px,
            Dimension::Percent(pct) => extent * pct / 100.0,
        }
    }

    fn value(self) -> f64 {
        match self {
            Dimension::Px(v) | Dimension::Percent(v) => v,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(px) => write!(f, "{}px", px),
            Dimension::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Parse a dimension string
/// Supports:
/// - Percentages: "7.5%"
/// - Pixels: "12px" or a bare "12"
fn parse_dimension(s: &str) -> Option<Dimension> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        return pct.trim().parse::<f64>().ok().map(Dimension::Percent);
    }
    let px = s.strip_suffix("px").unwrap_or(s);
    px.trim().parse::<f64>().ok().map(Dimension::Px)
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(px) => Ok(Dimension::Px(px)),
            Raw::Text(s) => parse_dimension(&s)
                .ok_or_else(|| de::Error::custom(format!("Invalid dimension: {}", s))),
        }
    }
}

/// Every tuning value the layout engine reads
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub zone_split: f64,
    pub card_max_height_ratio: f64,
    pub score_font_ratio: f64,
    pub horizontal_margin: Dimension,
    pub min_safe_font_size: f64,
    pub max_safe_font_size: f64,
    pub reset_button_size: f64,
    pub tally_top_margin: f64,
    pub portrait_reset_top: Dimension,
    pub landscape_tally_top: Dimension,
    pub landscape_reset_top: Dimension,
    pub landscape_tally_offset: f64,
    pub landscape_tally_badge_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            zone_split: ZONE_SPLIT,
            card_max_height_ratio: CARD_MAX_HEIGHT_RATIO,
            score_font_ratio: SCORE_FONT_RATIO,
            horizontal_margin: Dimension::Percent(HORIZONTAL_MARGIN_PERCENT),
            min_safe_font_size: MIN_SAFE_FONT_SIZE,
            max_safe_font_size: MAX_SAFE_FONT_SIZE,
            reset_button_size: RESET_BUTTON_SIZE,
            tally_top_margin: TALLY_TOP_MARGIN,
            portrait_reset_top: Dimension::Percent(PORTRAIT_RESET_TOP_PERCENT),
            landscape_tally_top: Dimension::Percent(LANDSCAPE_TALLY_TOP_PERCENT),
            landscape_reset_top: Dimension::Percent(LANDSCAPE_RESET_TOP_PERCENT),
            landscape_tally_offset: LANDSCAPE_TALLY_OFFSET,
            landscape_tally_badge_width: LANDSCAPE_TALLY_BADGE_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Check that every value is finite and inside the range the layout math expects
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, ratio) in [
            ("zone_split", self.zone_split),
            ("card_max_height_ratio", self.card_max_height_ratio),
        ] {
            if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
                bail!("{} must be in (0, 1], got {}", name, ratio);
            }
        }

        for (name, value) in [
            ("score_font_ratio", self.score_font_ratio),
            ("min_safe_font_size", self.min_safe_font_size),
            ("max_safe_font_size", self.max_safe_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                bail!("{} must be a positive number, got {}", name, value);
            }
        }

        if self.min_safe_font_size > self.max_safe_font_size {
            bail!(
                "min_safe_font_size ({}) exceeds max_safe_font_size ({})",
                self.min_safe_font_size,
                self.max_safe_font_size
            );
        }

        for (name, value) in [
            ("horizontal_margin", self.horizontal_margin.value()),
            ("portrait_reset_top", self.portrait_reset_top.value()),
            ("landscape_tally_top", self.landscape_tally_top.value()),
            ("landscape_reset_top", self.landscape_reset_top.value()),
            ("reset_button_size", self.reset_button_size),
            ("tally_top_margin", self.tally_top_margin),
            ("landscape_tally_offset", self.landscape_tally_offset),
            ("landscape_tally_badge_width", self.landscape_tally_badge_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative number, got {}", name, value);
            }
        }

        Ok(())
    }
}
