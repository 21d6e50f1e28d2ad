use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::game::{normalize_team_name, Team};
use crate::layout::LayoutConfig;
use crate::layout_constants::DEFAULT_SCORE_INCREMENT;
use crate::types::TeamId;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub score_increment: u32,
    pub teams: TeamsConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TeamsConfig {
    pub team1: TeamConfig,
    pub team2: TeamConfig,
}

/// Per-team overrides; unset fields fall back to the built-in team defaults
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TeamConfig {
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub color: Option<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            score_increment: DEFAULT_SCORE_INCREMENT,
            teams: TeamsConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl TeamsConfig {
    pub fn get(&self, team: TeamId) -> &TeamConfig {
        match team {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
        }
    }

    /// Configured display name, trimmed and capped like a committed name
    pub fn name(&self, team: TeamId) -> String {
        self.get(team)
            .name
            .as_deref()
            .and_then(normalize_team_name)
            .unwrap_or_else(|| Team::default_for(team).name)
    }

    pub fn color(&self, team: TeamId) -> Color {
        self.get(team)
            .color
            .unwrap_or_else(|| Team::default_for(team).color)
    }
}

/// A config together with the fallbacks taken while loading it
///
/// Config is read before logging is set up, so the caller emits `warnings`
/// once a subscriber is installed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    fn fallback(warning: String) -> Self {
        LoadedConfig {
            config: Config::default(),
            warnings: vec![warning],
        }
    }
}

impl Config {
    /// Replace values the store and layout engine cannot work with by their defaults
    fn sanitized(mut self) -> LoadedConfig {
        let mut warnings = Vec::new();
        if self.score_increment == 0 {
            warnings.push(format!(
                "score_increment must be at least 1, using {}",
                DEFAULT_SCORE_INCREMENT
            ));
            self.score_increment = DEFAULT_SCORE_INCREMENT;
        }
        if let Err(e) = self.layout.validate() {
            warnings.push(format!("Invalid [layout] section ({}), using defaults", e));
            self.layout = LayoutConfig::default();
        }
        LoadedConfig {
            config: self,
            warnings,
        }
    }
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "orange", etc.
/// - Hex colors: "#FF0000", "#f00"
/// - RGB tuples: "255,0,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse config file contents, replacing unusable values with defaults
pub fn parse(content: &str) -> anyhow::Result<LoadedConfig> {
    let config: Config = toml::from_str(content)?;
    Ok(config.sanitized())
}

pub fn read() -> LoadedConfig {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return LoadedConfig::default(),
    };

    if !config_path.exists() {
        return LoadedConfig::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            return LoadedConfig::fallback(format!(
                "Failed to read {}: {}",
                config_path.display(),
                e
            ));
        }
    };

    parse(&content).unwrap_or_else(|e| {
        LoadedConfig::fallback(format!("Failed to parse {}: {:#}", config_path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Dimension;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#00f"), Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("#éé"), None);
    }

    #[test]
    fn test_default_team_names_and_colors() {
        let config = Config::default();

        assert_eq!(config.teams.name(TeamId::Team1), "Team 1");
        assert_eq!(config.teams.color(TeamId::Team1), Color::Rgb(255, 0, 0));
        assert_eq!(config.teams.color(TeamId::Team2), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r##"
log_level = "debug"
log_file = "/tmp/scorekeeper.log"
score_increment = 2

[teams.team1]
name = "  Eagles  "
color = "#00FF00"

[teams.team2]
color = "orange"

[layout]
card_max_height_ratio = 0.85
horizontal_margin = "5%"
        "##;

        let config = parse(toml_str).unwrap().config;

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.score_increment, 2);
        assert_eq!(config.teams.name(TeamId::Team1), "Eagles");
        assert_eq!(config.teams.color(TeamId::Team1), Color::Rgb(0, 255, 0));
        assert_eq!(config.teams.name(TeamId::Team2), "Team 2");
        assert_eq!(config.teams.color(TeamId::Team2), Color::Rgb(255, 165, 0));
        assert_eq!(config.layout.card_max_height_ratio, 0.85);
        assert_eq!(config.layout.horizontal_margin, Dimension::Percent(5.0));
    }

    #[test]
    fn test_blank_configured_name_uses_default() {
        let config = parse("[teams.team2]\nname = \"   \"").unwrap().config;

        assert_eq!(config.teams.name(TeamId::Team2), "Team 2");
    }

    #[test]
    fn test_invalid_layout_falls_back_to_defaults() {
        let loaded = parse("[layout]\nzone_split = 2.0\ncard_max_height_ratio = 0.7").unwrap();

        assert_eq!(loaded.config.layout, LayoutConfig::default());
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("[layout]"));
        assert!(loaded.warnings[0].contains("zone_split"));
    }

    #[test]
    fn test_zero_increment_falls_back_to_default() {
        let loaded = parse("score_increment = 0").unwrap();

        assert_eq!(loaded.config.score_increment, DEFAULT_SCORE_INCREMENT);
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("score_increment"));
    }

    #[test]
    fn test_valid_config_has_no_warnings() {
        let loaded = parse("score_increment = 2\n[layout]\nzone_split = 0.5").unwrap();

        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_fallback_carries_reason() {
        let loaded = LoadedConfig::fallback("Failed to parse config.toml: bad".to_string());

        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.warnings, vec!["Failed to parse config.toml: bad".to_string()]);
    }

    #[test]
    fn test_invalid_color_is_a_parse_error() {
        assert!(parse("[teams.team1]\ncolor = \"not-a-color\"").is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse("").unwrap(), LoadedConfig::default());
    }
}
