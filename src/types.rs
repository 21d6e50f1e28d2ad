/// Shared types used across the application
///
/// This module contains type definitions that are shared between
/// the library (game store, layout engine, tui) and the binary (main.rs).
use std::fmt;

/// One of the two fixed participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamId {
    Team1,
    Team2,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::Team1, TeamId::Team2];

    /// 1-based team number as shown to the user
    pub fn number(self) -> u8 {
        match self {
            TeamId::Team1 => 1,
            TeamId::Team2 => 2,
        }
    }

    pub fn other(self) -> TeamId {
        match self {
            TeamId::Team1 => TeamId::Team2,
            TeamId::Team2 => TeamId::Team1,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Current rendering surface, sampled by the host on mount and on every resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// False for zero, negative, NaN or infinite dimensions
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
