// Terminal host for the scoreboard: samples the terminal as the viewport,
// maps keys to store actions and draws the layout engine's output.
pub mod app;
pub mod keys;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use app::App;
pub use keys::{key_to_command, HostCommand};

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::game::GameState;
use crate::layout::compute_layout;

/// How long to wait for input before redrawing
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main entry point for interactive mode
///
/// Returns the final game state so the caller can print a summary.
pub fn run(config: &Config) -> Result<GameState, io::Error> {
    let mut terminal = setup_terminal()?;

    let mut app = App::new(config);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|_| app.store.state().clone())
}

/// Raw mode plus alternate screen; undone again if any later step fails
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let terminal = (|| -> Result<_, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })();
    undo_on_error(terminal, || {
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            warn!("TERMINAL: Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            warn!("TERMINAL: Failed to disable raw mode: {}", e);
        }
    })
}

/// Pass `result` through, running `undo` first when it is an error
fn undo_on_error<T, E: std::fmt::Display>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if let Err(e) = &result {
        debug!("TERMINAL: Setup failed ({}), restoring", e);
        undo();
    }
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), io::Error> {
    while !app.should_quit {
        // The latest terminal size is the only viewport sample that matters
        terminal.draw(|f| {
            let layout = compute_layout(view::viewport_for(f.area()), &app.layout_config);
            view::render(f, app, &layout);
        })?;

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let editing = app.store.edit_focus();
                if let Some(command) = key_to_command(key, editing, &app.name_input) {
                    app.apply(command);
                }
            }
            Event::Resize(width, height) => {
                debug!("RESIZE: {}x{}", width, height);
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_undo_on_error_runs_undo_for_failed_setup() {
        let undone = Cell::new(false);
        let result: Result<(), io::Error> = undo_on_error(
            Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || undone.set(true),
        );

        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_undo_on_error_skips_undo_on_success() {
        let undone = Cell::new(false);
        let result: Result<u8, io::Error> = undo_on_error(Ok(7), || undone.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}
