use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use scorekeeper::config;
use scorekeeper::game::labels::{score_label, total_games_label, wins_label};
use scorekeeper::game::GameState;
use scorekeeper::layout::{compute_layout, HorizontalAnchor, PanelOffset, VerticalAnchor};
use scorekeeper::tui;
use scorekeeper::types::{TeamId, Viewport};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Two-team scoreboard", long_about = "Two-team scoreboard\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout computed for a viewport
    Layout {
        /// Viewport width in pixels
        #[arg(short = 'W', long, allow_negative_numbers = true)]
        width: f64,

        /// Viewport height in pixels
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        height: f64,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("score_increment: {}", cfg.score_increment);
    for team in TeamId::ALL {
        println!();
        println!("[teams.{}]", team);
        println!("name: {}", cfg.teams.name(team));
        println!("color: {:?}", cfg.teams.color(team));
    }
    println!();
    println!("[layout]");
    let layout = &cfg.layout;
    println!("zone_split: {}", layout.zone_split);
    println!("card_max_height_ratio: {}", layout.card_max_height_ratio);
    println!("score_font_ratio: {}", layout.score_font_ratio);
    println!("horizontal_margin: {}", layout.horizontal_margin);
    println!("min_safe_font_size: {}", layout.min_safe_font_size);
    println!("max_safe_font_size: {}", layout.max_safe_font_size);
    println!("reset_button_size: {}", layout.reset_button_size);
    println!("tally_top_margin: {}", layout.tally_top_margin);
    println!("portrait_reset_top: {}", layout.portrait_reset_top);
    println!("landscape_tally_top: {}", layout.landscape_tally_top);
    println!("landscape_reset_top: {}", layout.landscape_reset_top);
    println!("landscape_tally_offset: {}", layout.landscape_tally_offset);
    println!("landscape_tally_badge_width: {}", layout.landscape_tally_badge_width);
}

fn format_offset(offset: &PanelOffset) -> String {
    let vertical = match offset.vertical {
        VerticalAnchor::Top(px) => format!("top: {:.1}px", px),
        VerticalAnchor::Bottom(px) => format!("bottom: {:.1}px", px),
    };
    let horizontal = match offset.horizontal {
        HorizontalAnchor::Left(d) => format!("left: {}", d),
        HorizontalAnchor::Right(d) => format!("right: {}", d),
    };
    format!("{{ {}, {} }}", vertical, horizontal)
}

fn handle_layout_command(cfg: &config::Config, width: f64, height: f64) {
    let result = compute_layout(Viewport::new(width, height), &cfg.layout);

    println!("Viewport: {}x{}", width, height);
    println!("orientation: {}", result.orientation);
    println!("zone_height: {:.1}", result.zone_height);
    println!("max_card_height: {:.1}", result.max_card_height);
    println!("max_height: {:.2}%", result.max_height_percent());
    println!("safe_font_size: {:.1}", result.safe_font_size);
    println!("top panel: {}", format_offset(&result.panel_offsets.top));
    println!("bottom panel: {}", format_offset(&result.panel_offsets.bottom));
    println!("tally badge top: {}", result.controls.tally_badge_top);
    println!("reset button top: {}", result.controls.reset_button_top);
}

/// Final scoreboard printed after leaving interactive mode
fn print_summary(state: &GameState) {
    for team in TeamId::ALL {
        let t = state.team(team);
        println!("{}", score_label(&t.name, t.score));
        println!("{}", wins_label(team, state.game_wins.get(team)));
    }
    println!("{}", total_games_label(state.total_games()));
}

fn main() {
    let config::LoadedConfig { config, warnings } = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Fallbacks taken while reading the config, now that a subscriber exists
    for warning in &warnings {
        tracing::warn!("CONFIG: {}", warning);
    }

    match cli.command {
        None => match tui::run(&config) {
            Ok(state) => print_summary(&state),
            Err(e) => {
                let err = anyhow::Error::from(e).context("Error running TUI");
                eprintln!("Error: {:#}", err);
                tracing::error!("Command failed: {:#}", err);
                std::process::exit(1);
            }
        },
        Some(Commands::Layout { width, height }) => handle_layout_command(&config, width, height),
        Some(Commands::Config) => handle_config_command(&config),
    }
}
