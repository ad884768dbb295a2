use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::state::HitAreas;
use crate::carousel::{Carousel, MediaView};
use crate::catalog::stats::SizeEstimate;
use crate::theme::Palette;

use super::layout::centered_rect;
use super::output::{truncate_label, wrap_text};

const DESCRIPTION_MAX_LINES: usize = 6;
const PREV_LABEL: &str = "[ < ]";
const NEXT_LABEL: &str = "[ > ]";
const CLOSE_LABEL: &str = "[ Close ]";
const BUTTON_GAP: u16 = 2;

fn overlay_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_focused))
        .style(Style::default().bg(palette.background).fg(palette.foreground))
}

/// Render loading indicator while the dataset is read.
pub(super) fn render_loader(frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
    let rect = centered_rect(60, 30, area);
    frame.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled("Loading...", Style::default().fg(palette.accent))),
        Line::raw(""),
        Line::from(Span::styled(
            "Reading sections and projects",
            Style::default().fg(palette.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(overlay_block(palette)), rect);
}

/// Render the terminal load failure. Nothing else is shown afterwards.
pub(super) fn render_load_failure(
    frame: &mut ratatui::Frame,
    area: Rect,
    palette: &Palette,
    message: &str,
) {
    let rect = centered_rect(70, 40, area);
    frame.render_widget(Clear, rect);
    let width = rect.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            "Failed to load data",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(wrap_text(message, width).into_iter().map(Line::raw));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press ctrl+c to exit.",
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(
        Paragraph::new(lines).block(overlay_block(palette).title(" Error ")),
        rect,
    );
}

fn media_lines(view: &MediaView, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    match view {
        MediaView::Placeholder => vec![Line::from(Span::styled(
            "[ no screenshots ]",
            Style::default().fg(palette.dim),
        ))],
        MediaView::Ready {
            kind,
            filename,
            source,
            bytes,
        } => vec![
            Line::from(Span::styled(
                format!("[ {} ]", kind.label()),
                Style::default().fg(palette.accent),
            )),
            Line::raw(truncate_label(filename, width)),
            Line::from(Span::styled(
                truncate_label(
                    &format!(
                        "{} ({})",
                        source.display(),
                        SizeEstimate::from_bytes(*bytes)
                    ),
                    width,
                ),
                Style::default().fg(palette.dim),
            )),
        ],
        MediaView::Failed { source } => vec![
            Line::from(Span::styled(
                "Failed to load",
                Style::default().fg(palette.accent),
            )),
            Line::from(Span::styled(
                truncate_label(&source.display().to_string(), width),
                Style::default().fg(palette.dim),
            )),
        ],
    }
}

/// Render the project carousel and record its clickable regions.
pub(super) fn render_carousel(
    carousel: &Carousel,
    hits: &mut HitAreas,
    frame: &mut ratatui::Frame,
    area: Rect,
    palette: &Palette,
) {
    let popup = centered_rect(70, 80, area);
    hits.popup = Some(popup);
    frame.render_widget(Clear, popup);

    let project = carousel.project();
    let title = match &project.year {
        Some(year) => format!(" {}  {} ", project.title, year),
        None => format!(" {} ", project.title),
    };
    let block = overlay_block(palette)
        .title(Span::styled(
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Left/Right browse | Esc close ").right_aligned());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    let width = inner.width as usize;

    let description = project
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("(No description provided)");
    let description_lines: Vec<Line> = wrap_text(description, width)
        .into_iter()
        .take(DESCRIPTION_MAX_LINES)
        .map(Line::raw)
        .collect();
    let link_count = project.links.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(description_lines.len() as u16),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(link_count),
        ])
        .split(inner);

    let meta = format!(
        "{}  |  {}",
        project.role.as_deref().unwrap_or("Role: -"),
        project.platform.as_deref().unwrap_or("Platform: -")
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(meta, Style::default().fg(palette.dim)))),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(description_lines), chunks[1]);

    let media_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let media_inner = media_block.inner(chunks[2]);
    frame.render_widget(media_block, chunks[2]);
    frame.render_widget(
        Paragraph::new(media_lines(carousel.view(), media_inner.width as usize, palette))
            .alignment(Alignment::Center),
        media_inner,
    );

    if let Some(caption) = carousel.caption() {
        frame.render_widget(
            Paragraph::new(caption).alignment(Alignment::Center),
            chunks[3],
        );
    }

    render_controls(hits, frame, chunks[4], palette);

    for (row, link) in project.links.iter().enumerate() {
        let rect = Rect::new(chunks[5].x, chunks[5].y + row as u16, chunks[5].width, 1);
        if rect.y >= chunks[5].y + chunks[5].height {
            break;
        }
        let line = Line::from(vec![
            Span::styled(
                link.label.clone(),
                Style::default()
                    .fg(palette.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(format!("  {}", link.url), Style::default().fg(palette.dim)),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
        hits.popup_links
            .push((rect, link.label.clone(), link.url.clone()));
    }
}

/// Centered `[ < ]  [ > ]  [ Close ]` row.
fn render_controls(hits: &mut HitAreas, frame: &mut ratatui::Frame, area: Rect, palette: &Palette) {
    let labels = [PREV_LABEL, NEXT_LABEL, CLOSE_LABEL];
    let total: u16 = labels.iter().map(|label| label.len() as u16).sum::<u16>()
        + BUTTON_GAP * (labels.len() as u16 - 1);
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let mut rects = Vec::with_capacity(labels.len());
    for label in labels {
        let width = (label.len() as u16).min((area.x + area.width).saturating_sub(x));
        let rect = Rect::new(x, area.y, width, area.height.min(1));
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default()
                    .bg(palette.selection_bg)
                    .fg(palette.selection_fg),
            )),
            rect,
        );
        rects.push(rect);
        x = x.saturating_add(label.len() as u16 + BUTTON_GAP);
    }
    hits.prev_button = rects.first().copied();
    hits.next_button = rects.get(1).copied();
    hits.close_button = rects.get(2).copied();
}
