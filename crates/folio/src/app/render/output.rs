use ratatui::text::Line;

use crate::commands::command_hint_lines;

use super::super::state::{App, OUTPUT_MAX_LINES};

/// Output area lines (command hints when typing, or the status message).
pub(super) fn output_lines_owned(app: &App, width: usize) -> Vec<Line<'static>> {
    if app.command_active {
        let hints = command_hint_lines(&app.command_input, OUTPUT_MAX_LINES);
        if hints.is_empty() {
            return vec![Line::raw("No commands found.")];
        }
        return hints.into_iter().map(Line::raw).collect();
    }

    let Some(message) = app.output.as_ref() else {
        return Vec::new();
    };
    if message.trim().is_empty() {
        return Vec::new();
    }

    wrap_text_lines(message, width, OUTPUT_MAX_LINES)
}

fn wrap_text_lines(message: &str, width: usize, max_lines: usize) -> Vec<Line<'static>> {
    wrap_text(message, width)
        .into_iter()
        .take(max_lines)
        .map(Line::raw)
        .collect()
}

/// Hard-wrap every line of `message` to `width` columns.
pub(super) fn wrap_text(message: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    message
        .lines()
        .flat_map(|line| wrap_preserve(line, width))
        .collect()
}

fn wrap_preserve(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let mut output = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for ch in line.chars() {
        if count >= width {
            output.push(current);
            current = String::new();
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    output.push(current);
    output
}

/// Shorten a label to `max_len` characters, ending in "..." when cut.
pub(super) fn truncate_label(label: &str, max_len: usize) -> String {
    let len = label.chars().count();
    if len <= max_len {
        return label.to_string();
    }
    if max_len <= 3 {
        return label.chars().take(max_len).collect();
    }
    let keep = max_len - 3;
    let mut out: String = label.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::{truncate_label, wrap_text};

    #[test]
    fn wrap_text_splits_long_lines_and_keeps_blank_ones() {
        assert_eq!(
            wrap_text("abcdef\n\nxy", 4),
            vec!["abcd", "ef", "", "xy"]
        );
    }

    #[test]
    fn truncate_label_adds_ellipsis() {
        assert_eq!(truncate_label("portfolio", 20), "portfolio");
        assert_eq!(truncate_label("portfolio", 6), "por...");
        assert_eq!(truncate_label("portfolio", 2), "po");
    }
}
