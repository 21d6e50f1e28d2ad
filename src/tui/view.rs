/// Scoreboard rendering
///
/// Maps a `LayoutResult` onto terminal cells. The terminal is treated as a
/// viewport of nominal pixels (one cell is `CELL_WIDTH_PX` x `CELL_HEIGHT_PX`)
/// so the layout engine sees the same proportions a phone screen would.
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::App;
use crate::layout::{HorizontalAnchor, LayoutResult, VerticalAnchor};
use crate::types::{Orientation, TeamId, Viewport};

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

const BIG_DIGIT_HEIGHT: usize = 5;

const BIG_DIGITS: [[&str; BIG_DIGIT_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const HELP_TEXT: &str =
    " a/z k/m score · A/Z K/M wins · r reset · R reset wins · e/E name · c/C color · q quit";

pub fn viewport_for(area: Rect) -> Viewport {
    Viewport::new(
        f64::from(area.width) * CELL_WIDTH_PX,
        f64::from(area.height) * CELL_HEIGHT_PX,
    )
}

fn px_to_rows(px: f64) -> u16 {
    (px / CELL_HEIGHT_PX).round() as u16
}

fn px_to_cols(px: f64) -> u16 {
    (px / CELL_WIDTH_PX).round() as u16
}

/// Score digits drawn 3 cells wide and 5 rows tall
pub fn big_number_lines(n: u32) -> Vec<String> {
    let digits: Vec<usize> = n
        .to_string()
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();
    (0..BIG_DIGIT_HEIGHT)
        .map(|row| {
            digits
                .iter()
                .map(|&d| BIG_DIGITS[d][row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Truncate `text` to `width` display columns, marking the cut with '…'
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// One band per team: stacked in portrait, side by side in landscape
pub fn team_areas(area: Rect, orientation: Orientation) -> [Rect; 2] {
    let direction = match orientation {
        Orientation::Portrait => Direction::Vertical,
        Orientation::Landscape => Direction::Horizontal,
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Score card placement inside a team's band
pub fn card_area(band: Rect, team: TeamId, layout: &LayoutResult, viewport: Viewport) -> Rect {
    if layout.orientation.is_landscape() {
        return band.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
    }

    let offset = layout.panel_offset(team);
    let height = px_to_rows(layout.max_card_height).min(band.height);
    let margin = match offset.horizontal {
        HorizontalAnchor::Left(d) | HorizontalAnchor::Right(d) => {
            px_to_cols(d.resolve(viewport.width))
        }
    };
    let width = band.width.saturating_sub(margin.saturating_mul(2));
    let y = match offset.vertical {
        VerticalAnchor::Top(m) => band.y.saturating_add(px_to_rows(m)),
        VerticalAnchor::Bottom(m) => band
            .bottom()
            .saturating_sub(px_to_rows(m).saturating_add(height)),
    };
    Rect::new(band.x.saturating_add(margin), y, width, height).intersection(band)
}

pub fn render(frame: &mut Frame, app: &App, layout: &LayoutResult) {
    let area = frame.area();
    let viewport = viewport_for(area);
    let bands = team_areas(area, layout.orientation);

    for (team, band) in TeamId::ALL.into_iter().zip(bands) {
        render_team(frame, app, team, band, layout, viewport);
    }
    render_tally_badge(frame, app, layout, area, viewport);
    render_reset_button(frame, layout, area, viewport);

    if area.height > 0 {
        let help_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        let help = fit_to_width(HELP_TEXT, usize::from(area.width));
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::White).bg(Color::Black)),
            help_area,
        );
    }
}

fn render_team(
    frame: &mut Frame,
    app: &App,
    team: TeamId,
    band: Rect,
    layout: &LayoutResult,
    viewport: Viewport,
) {
    let color = app.store.color(team);
    frame.render_widget(Block::default().style(Style::default().bg(color)), band);

    let card = card_area(band, team, layout, viewport);
    if card.width < 3 || card.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White).bg(color));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![name_line(app, team, usize::from(inner.width))];
    lines.extend(score_lines(app.store.score(team), inner, layout));

    let wins_text = format!("Games Won  {}", app.store.wins(team));
    let pinned_wins = match layout.controls.team_tally_offset {
        Some(offset_px) if inner.height > 1 => Some(offset_px),
        _ => {
            lines.push(Line::from(wins_text.clone()));
            None
        }
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    // Landscape: wins column pinned near the team's outer edge, on the card's last row
    if let Some(offset_px) = pinned_wins {
        let offset = px_to_cols(offset_px).min(inner.width);
        let row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        let (padded, alignment) = match team {
            TeamId::Team1 => (
                Rect { x: row.x + offset, width: row.width - offset, ..row },
                Alignment::Left,
            ),
            TeamId::Team2 => (Rect { width: row.width - offset, ..row }, Alignment::Right),
        };
        frame.render_widget(Paragraph::new(wins_text).alignment(alignment), padded);
    }
}

fn name_line(app: &App, team: TeamId, width: usize) -> Line<'static> {
    match app.editing_input(team) {
        Some(input) => Line::from(Span::styled(
            fit_to_width(&format!("{}▏", input), width),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        None => Line::from(Span::styled(
            fit_to_width(app.store.name(team), width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    }
}

/// Big digits when the safe font size and the card both have room, plain text otherwise
fn score_lines(score: u32, inner: Rect, layout: &LayoutResult) -> Vec<Line<'static>> {
    let big = big_number_lines(score);
    let font_rows = usize::from(px_to_rows(layout.safe_font_size));
    let fits = font_rows >= BIG_DIGIT_HEIGHT
        && usize::from(inner.height) >= BIG_DIGIT_HEIGHT + 2
        && big[0].width() <= usize::from(inner.width);

    if fits {
        big.into_iter().map(Line::from).collect()
    } else {
        vec![Line::from(Span::styled(
            score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))]
    }
}

fn render_tally_badge(
    frame: &mut Frame,
    app: &App,
    layout: &LayoutResult,
    area: Rect,
    viewport: Viewport,
) {
    let tally = format!(
        "{} - {}",
        app.store.wins(TeamId::Team1),
        app.store.wins(TeamId::Team2)
    );
    let game = format!("Game {}", app.store.total_games());
    let content_width = (tally.width().max(game.width()) + 4) as u16;

    let controls = &layout.controls;
    let width = controls
        .tally_badge_width
        .map(px_to_cols)
        .unwrap_or(content_width)
        .max(content_width)
        .min(area.width);
    let top = area
        .y
        .saturating_add(px_to_rows(controls.tally_badge_top.resolve(viewport.height)));
    let x = area.x + (area.width - width) / 2;
    let rect = Rect::new(x, top, width, 4).intersection(area);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(vec![Line::from(game), Line::from(tally)])
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        rect,
    );
}

fn render_reset_button(frame: &mut Frame, layout: &LayoutResult, area: Rect, viewport: Viewport) {
    let controls = &layout.controls;
    let width = px_to_cols(controls.reset_button_size).max(5).min(area.width);
    let center = area
        .y
        .saturating_add(px_to_rows(controls.reset_button_top.resolve(viewport.height)));
    let x = area.x + (area.width - width) / 2;
    let rect = Rect::new(x, center.saturating_sub(1), width, 3).intersection(area);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new("↻ r")
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        rect,
    );
}
