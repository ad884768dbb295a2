//! Command execution handlers.
//!
//! Commands run against the session and either leave the listing in place
//! or replace the right pane with output lines. Links opened through
//! `open` come back as an [`Effect`] for the app layer to carry out.


use super::parse::{parse_command, Command, CommandError};
use super::registry::command_help_lines;
use crate::session::{Effect, Pane, Session};
use crate::theme::Skin;

/// Result of command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub ok: bool,
    /// Lines written to the right pane, if the command produced output.
    pub lines: Option<Vec<String>>,
    pub effect: Option<Effect>,
}

impl CommandOutcome {
    fn quiet() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    fn output(lines: Vec<String>) -> Self {
        Self {
            ok: true,
            lines: Some(lines),
            effect: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            lines: Some(vec![message.into()]),
            effect: None,
        }
    }
}

/// Parse and run one command line. Empty input does nothing.
pub fn execute_line(session: &mut Session, line: &str) -> CommandOutcome {
    let outcome = match parse_command(line) {
        Ok(command) => run_command(session, command),
        Err(CommandError::Empty) => return CommandOutcome::quiet(),
        Err(err) => CommandOutcome::failure(err.to_string()),
    };
    if !outcome.ok {
        log::debug!("command failed: {}", line.trim());
    }
    if let Some(lines) = &outcome.lines {
        session.show_output(lines.clone());
    }
    outcome
}

/// Dispatch a parsed command. Output is returned, not rendered.
pub fn run_command(session: &mut Session, command: Command) -> CommandOutcome {
    match command {
        Command::Help => CommandOutcome::output(command_help_lines()),
        Command::Ls => {
            session.relist();
            CommandOutcome::quiet()
        }
        Command::Open(n) => open_entry(session, n),
        Command::Cd(query) => change_section(session, &query),
        Command::Skin { skin, typed } => switch_skin(session, skin, &typed),
        Command::Clear => CommandOutcome::output(vec!["(cleared)".to_string()]),
        Command::Quit => CommandOutcome::output(vec!["Goodbye.".to_string()]),
    }
}

fn open_entry(session: &mut Session, n: Option<i64>) -> CommandOutcome {
    if session.nav().focused_pane != Pane::Right {
        return CommandOutcome::failure("open: focus right pane to open entries");
    }
    let Some(n) = n else {
        return CommandOutcome::failure(CommandError::InvalidIndex.to_string());
    };
    let count = session.current_section().map_or(0, |s| s.entries.len());
    let index = usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|index| *index < count);
    let Some(index) = index else {
        return CommandOutcome::failure(format!("open: entry {n} not found"));
    };
    // An earlier command may have replaced the listing.
    session.relist();
    session.select_entry(index);
    CommandOutcome {
        ok: true,
        lines: None,
        effect: session.activate_selected_entry(),
    }
}

fn change_section(session: &mut Session, query: &str) -> CommandOutcome {
    let Some(index) = session.catalog().find_section(query) else {
        return CommandOutcome::failure("cd: Permission denied");
    };
    session.select_section(index);
    session.set_focus(Pane::Right);
    CommandOutcome::quiet()
}

fn switch_skin(session: &mut Session, skin: Skin, typed: &str) -> CommandOutcome {
    let mut lines = vec![format!("skin: switched to {typed}")];
    if let Err(err) = session.apply_skin(skin) {
        log::warn!("{err}");
        lines.push(format!("skin: preference not saved ({err})"));
    }
    CommandOutcome::output(lines)
}
