//! UI rendering methods.
//!
//! Handles all drawing/rendering for the TUI:
//! - Main layout (two panes, output, command bar)
//! - Overlays (loader, load failure, project carousel)
//!
//! Rendering also records the clickable regions used by mouse input.

mod layout;
mod output;
mod overlays;
mod panes;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use super::state::{App, LoadState, BOTTOM_HORIZONTAL_PADDING};

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    let palette = app.skin().palette();
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(palette.background)
                .fg(palette.foreground),
        ),
        area,
    );
    app.hits.clear();

    let output_width =
        area.width
            .saturating_sub(BOTTOM_HORIZONTAL_PADDING.saturating_mul(2)) as usize;
    let output_lines = output::output_lines_owned(app, output_width);
    let output_height = output_lines.len() as u16;
    let command_height = 1u16;

    // Vertical layout: panes | output | command bar
    let split_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(output_height),
            Constraint::Length(command_height),
        ])
        .split(area);

    let App { load, hits, .. } = &mut *app;
    match load {
        LoadState::Loading => overlays::render_loader(frame, split_chunks[0], &palette),
        LoadState::Failed(message) => {
            overlays::render_load_failure(frame, split_chunks[0], &palette, message)
        }
        LoadState::Ready(session) => {
            panes::render_panes(session, hits, frame, split_chunks[0], &palette)
        }
    }

    if output_height > 0 {
        let output_area = layout::inset_horizontal(split_chunks[1], BOTTOM_HORIZONTAL_PADDING);
        let output = Paragraph::new(output_lines).style(Style::default().fg(palette.dim));
        frame.render_widget(output, output_area);
    }

    let command_area = layout::inset_horizontal(split_chunks[2], BOTTOM_HORIZONTAL_PADDING);
    layout::render_command_bar(app, frame, command_area, &palette);

    // Render the carousel on top if open
    let App { load, hits, .. } = &mut *app;
    if let LoadState::Ready(session) = load {
        if let Some(carousel) = session.modal() {
            overlays::render_carousel(carousel, hits, frame, area, &palette);
        }
    }
}
