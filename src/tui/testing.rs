//! General test utilities for TUI tests.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use super::app::App;
use super::view::{render, viewport_for};
use crate::layout::compute_layout;

/// Render the full scoreboard into an off-screen buffer of the given size
pub fn render_app(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let layout = compute_layout(viewport_for(f.area()), &app.layout_config);
            render(f, app, &layout);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

pub fn buffer_text(buf: &Buffer) -> String {
    buffer_lines(buf).join("\n")
}
