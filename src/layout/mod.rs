//! Orientation-responsive layout engine
//!
//! Derives score card bounds, font size and control positions from a viewport
//! sample. Holds no state between samples.

pub mod config;
pub mod engine;

pub use config::{Dimension, LayoutConfig};
pub use engine::{
    classify_orientation, compute_layout, safe_font_size, ControlAnchors, HorizontalAnchor,
    LayoutResult, PanelOffset, PanelOffsets, VerticalAnchor,
};
