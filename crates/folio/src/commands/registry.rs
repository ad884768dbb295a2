//! Command registry and metadata.
//!
//! Defines all available commands with their usage and descriptions.
//! Used for parsing validation, completion, hints and help display.

use crate::theme::Skin;

/// Metadata for a single command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// All commands, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        description: "show this list",
    },
    CommandSpec {
        name: "ls",
        usage: "ls",
        description: "re-list the focused pane",
    },
    CommandSpec {
        name: "open",
        usage: "open <n>",
        description: "open nth entry in right pane (1-based)",
    },
    CommandSpec {
        name: "cd",
        usage: "cd <sectionId>",
        description: "change left selection to sectionId (e.g. 'cd gamejams')",
    },
    CommandSpec {
        name: "skin",
        usage: "skin <name>",
        description: "set skin",
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        description: "clear right pane (temporary)",
    },
    CommandSpec {
        name: "quit",
        usage: "quit",
        description: "clear and show goodbye",
    },
];

pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|command| command.name)
}

fn usage_width() -> usize {
    COMMANDS
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or(0)
}

/// Lines printed by `help`, including the current skin names.
pub fn command_help_lines() -> Vec<String> {
    let width = usage_width();
    let mut lines = vec!["Commands:".to_string()];
    for command in COMMANDS.iter().filter(|command| command.name != "help") {
        let description = if command.name == "skin" {
            format!("{} ({})", command.description, Skin::names().join(", "))
        } else {
            command.description.to_string()
        };
        lines.push(format!(
            "  {:<width$}  {}",
            command.usage,
            description,
            width = width
        ));
    }
    lines
}

/// Hint lines matching the verb typed so far.
///
/// Used below the command bar while typing.
pub fn command_hint_lines(input: &str, max: usize) -> Vec<String> {
    let query = input
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();
    let width = usage_width();
    COMMANDS
        .iter()
        .filter(|command| query.is_empty() || command.name.starts_with(&query))
        .take(max)
        .map(|command| {
            format!(
                "{:<width$}  {}",
                command.usage,
                command.description,
                width = width
            )
        })
        .collect()
}
