//! The two browsing panes: sections on the left, entries on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::HitAreas;
use crate::catalog::stats::PaneStats;
use crate::catalog::Entry;
use crate::session::{Pane, RightPane, Session};
use crate::theme::Palette;

use super::output::{truncate_label, wrap_text};

pub(super) fn render_panes(
    session: &Session,
    hits: &mut HitAreas,
    frame: &mut ratatui::Frame,
    area: Rect,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(area);
    hits.left_pane = Some(chunks[0]);
    hits.right_pane = Some(chunks[1]);
    render_sections(session, hits, frame, chunks[0], palette);
    render_entries(session, hits, frame, chunks[1], palette);
}

fn pane_block(title: &str, stats: &PaneStats, focused: bool, width: u16, palette: &Palette) -> Block<'static> {
    let border = if focused {
        palette.border_focused
    } else {
        palette.border
    };
    let title = truncate_label(title, width.saturating_sub(4) as usize);
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(format!(" {stats} ")).right_aligned())
        .style(Style::default().bg(palette.background).fg(palette.foreground))
}

fn selected_style(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().bg(palette.selection_bg).fg(palette.selection_fg)
    } else {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}

/// First visible row so that `target` stays on screen.
fn scroll_offset(target: usize, height: usize) -> usize {
    target.saturating_sub(height.saturating_sub(1))
}

fn render_sections(
    session: &Session,
    hits: &mut HitAreas,
    frame: &mut ratatui::Frame,
    area: Rect,
    palette: &Palette,
) {
    let nav = session.nav();
    let focused = nav.focused_pane == Pane::Left;
    let block = pane_block(
        &session.left_path(),
        session.left_stats(),
        focused,
        area.width,
        palette,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    let offset = scroll_offset(nav.selected_section.unwrap_or(0), height);
    let mut lines = Vec::new();
    for (row, (index, section)) in session
        .catalog()
        .sections()
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .enumerate()
    {
        let style = if nav.selected_section == Some(index) {
            selected_style(focused, palette)
        } else {
            Style::default()
        };
        let label = truncate_label(&section.title, inner.width as usize);
        lines.push(Line::from(Span::styled(label, style)));
        hits.section_rows.push((
            Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
            index,
        ));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Display rows for one entry.
fn entry_lines(entry: &Entry, session: &Session, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    match entry {
        Entry::Text { content } => wrap_text(content, width)
            .into_iter()
            .map(Line::raw)
            .collect(),
        Entry::Link(link) => vec![Line::from(vec![
            Span::styled(
                link.label.clone(),
                Style::default()
                    .fg(palette.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(format!("  {}", link.url), Style::default().fg(palette.dim)),
        ])],
        Entry::Project { .. } => vec![Line::from(Span::styled(
            truncate_label(&entry.display_label(session.catalog()), width),
            Style::default().fg(palette.accent),
        ))],
        Entry::Unknown { .. } => vec![Line::from(Span::styled(
            truncate_label(&entry.display_label(session.catalog()), width),
            Style::default().fg(palette.dim),
        ))],
    }
}

fn render_entries(
    session: &Session,
    hits: &mut HitAreas,
    frame: &mut ratatui::Frame,
    area: Rect,
    palette: &Palette,
) {
    let nav = session.nav();
    let focused = nav.focused_pane == Pane::Right;
    let block = pane_block(
        &session.right_path(),
        session.right_stats(),
        focused,
        area.width,
        palette,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let width = inner.width as usize;
    let height = inner.height as usize;

    if let RightPane::Output(output) = session.right_pane() {
        let lines: Vec<Line> = output
            .iter()
            .flat_map(|line| wrap_text(line, width))
            .map(Line::raw)
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let Some(section) = session.current_section() else {
        return;
    };
    if section.entries.is_empty() {
        let empty = Line::from(Span::styled("(no entries)", Style::default().fg(palette.dim)));
        frame.render_widget(Paragraph::new(empty), inner);
        return;
    }

    // Flatten entries into rows tagged with their entry index.
    let mut rows: Vec<(usize, Line<'static>)> = Vec::new();
    let mut selected_row = 0;
    for (index, entry) in section.entries.iter().enumerate() {
        if nav.selected_entry == Some(index) {
            selected_row = rows.len();
        }
        let selected = nav.selected_entry == Some(index);
        for line in entry_lines(entry, session, width, palette) {
            let line = if selected {
                line.style(selected_style(focused, palette))
            } else {
                line
            };
            rows.push((index, line));
        }
    }

    let offset = scroll_offset(selected_row, height);
    let mut lines = Vec::new();
    for (row, (index, line)) in rows.into_iter().skip(offset).take(height).enumerate() {
        hits.entry_rows.push((
            Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
            index,
        ));
        lines.push(line);
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
