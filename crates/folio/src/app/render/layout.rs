use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::session::Pane;
use crate::theme::Palette;

use super::super::state::App;

/// Render command bar (focus indicator or input).
pub(super) fn render_command_bar(app: &App, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
    let label_text = format!("skin: {} | v{}", app.skin().name(), env!("CARGO_PKG_VERSION"));
    let width = area.width as usize;
    let label_len = label_text.chars().count();
    if width > label_len + 1 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length((label_len + 1) as u16),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(command_line(app, palette)), chunks[0]);

        let dim_style = Style::default().fg(palette.dim).add_modifier(Modifier::DIM);
        let label = Paragraph::new(Line::from(Span::styled(label_text, dim_style)))
            .alignment(Alignment::Right);
        frame.render_widget(label, chunks[1]);
        return;
    }

    frame.render_widget(Paragraph::new(command_line(app, palette)), area);
}

/// Build the command line content (focus label or input).
fn command_line<'a>(app: &'a App, palette: &Palette) -> Line<'a> {
    if app.command_active {
        // Command input mode: show input with cursor
        Line::from(vec![
            Span::styled(":", Style::default().fg(palette.accent)),
            Span::styled(
                app.command_input.as_str(),
                Style::default().fg(palette.foreground),
            ),
            Span::styled(
                " ",
                Style::default().bg(palette.foreground).fg(palette.background),
            ),
        ])
    } else {
        let label = match app.session().map(|session| session.nav().focused_pane) {
            Some(Pane::Left) => "-- SECTIONS --",
            Some(Pane::Right) => "-- ENTRIES --",
            None => "-- LOADING --",
        };
        Line::from(vec![Span::styled(
            label,
            Style::default().bg(palette.accent).fg(palette.background),
        )])
    }
}

/// Inset a rect horizontally by padding on each side.
pub(super) fn inset_horizontal(area: Rect, padding: u16) -> Rect {
    if area.width <= padding * 2 {
        return area;
    }
    Rect {
        x: area.x + padding,
        width: area.width - padding * 2,
        ..area
    }
}

/// Create a centered rect with given percentage of parent.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = r.width * percent_x / 100;
    let popup_height = r.height * percent_y / 100;
    let x = r.x + (r.width.saturating_sub(popup_width)) / 2;
    let y = r.y + (r.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}
