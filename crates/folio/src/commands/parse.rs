//! Command parsing and completion.
//!
//! Handles tokenizing command input, validating verbs and payloads,
//! and providing tab-completion suggestions. Verbs are case-insensitive.

use thiserror::Error;

use super::registry::command_names;
use crate::theme::Skin;

/// Successfully parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls,
    /// 1-based entry index, or `None` when the argument is not a number.
    Open(Option<i64>),
    Cd(String),
    /// Resolved skin and the name as the user typed it.
    Skin { skin: Skin, typed: String },
    Clear,
    Quit,
}

/// Parse errors. The display text is what the right pane shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("open: invalid index (use open <n>)")]
    InvalidIndex,
    #[error("cd: missing sectionId")]
    MissingSection,
    #[error("skin: missing name")]
    MissingSkin,
    #[error("skin: unknown skin '{0}'")]
    UnknownSkin(String),
    #[error("Unknown command: {0} - type 'help' for a list.")]
    Unknown(String),
}

/// Parse a command line into a [`Command`].
///
/// The argument is the rest of the line with whitespace collapsed, except
/// for `open`, which only looks at its first token.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((verb, args)) = tokens.split_first() else {
        return Err(CommandError::Empty);
    };
    let verb = verb.to_lowercase();
    let argument = args.join(" ");

    match verb.as_str() {
        "help" => Ok(Command::Help),
        "ls" => Ok(Command::Ls),
        "open" => Ok(Command::Open(
            args.first().and_then(|token| token.parse::<i64>().ok()),
        )),
        "cd" => {
            if argument.is_empty() {
                Err(CommandError::MissingSection)
            } else {
                Ok(Command::Cd(argument))
            }
        }
        "skin" => {
            if argument.is_empty() {
                return Err(CommandError::MissingSkin);
            }
            match Skin::from_name(&argument) {
                Some(skin) => Ok(Command::Skin {
                    skin,
                    typed: argument,
                }),
                None => Err(CommandError::UnknownSkin(argument)),
            }
        }
        "clear" => Ok(Command::Clear),
        "quit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(verb)),
    }
}

/// Attempt to complete the current command input.
///
/// Completes verbs, and skin names after `skin`. Returns the completed
/// string if a unique completion exists, or the longest common prefix if
/// multiple matches exist.
pub fn complete_command_input(input: &str) -> Option<String> {
    let ends_with_space = input.ends_with(' ');
    let mut parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let current = if ends_with_space {
        ""
    } else {
        parts.pop().unwrap_or("")
    };

    let mut candidates: Vec<String> = match parts.as_slice() {
        [] => command_names()
            .filter(|name| name.starts_with(current))
            .map(str::to_string)
            .collect(),
        [verb] if verb.eq_ignore_ascii_case("skin") => Skin::names()
            .into_iter()
            .filter(|name| name.starts_with(current))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    candidates.sort();
    candidates.dedup();
    if candidates.is_empty() {
        return None;
    }

    let common_prefix = longest_common_prefix(&candidates);
    if common_prefix.is_empty() || common_prefix == current {
        return None;
    }

    let mut new_parts: Vec<String> = parts.iter().map(|part| part.to_string()).collect();
    new_parts.push(common_prefix.clone());
    let mut new_input = new_parts.join(" ");

    // Add trailing space if unique completion
    if candidates.len() == 1 && common_prefix == candidates[0] {
        new_input.push(' ');
    }
    Some(new_input)
}

/// Find the longest common prefix among strings.
fn longest_common_prefix(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut prefix = items[0].clone();
    for item in &items[1..] {
        let mut next = String::new();
        for (a, b) in prefix.chars().zip(item.chars()) {
            if a == b {
                next.push(a);
            } else {
                break;
            }
        }
        prefix = next;
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::{complete_command_input, parse_command, Command, CommandError};
    use crate::theme::Skin;

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
    }

    #[test]
    fn parse_is_case_insensitive_on_verbs() {
        assert_eq!(parse_command("HELP"), Ok(Command::Help));
        assert_eq!(parse_command("  Ls  "), Ok(Command::Ls));
        assert_eq!(parse_command("Quit now"), Ok(Command::Quit));
    }

    #[test]
    fn parse_open_reads_first_token() {
        assert_eq!(parse_command("open 2"), Ok(Command::Open(Some(2))));
        assert_eq!(parse_command("open 0 trailing"), Ok(Command::Open(Some(0))));
        assert_eq!(parse_command("open -3"), Ok(Command::Open(Some(-3))));
    }

    #[test]
    fn parse_open_keeps_non_numbers_for_dispatch() {
        for input in ["open", "open two", "open 1.5"] {
            assert_eq!(parse_command(input), Ok(Command::Open(None)));
        }
    }

    #[test]
    fn parse_cd_joins_remaining_tokens() {
        assert_eq!(
            parse_command("cd  odds   and ends"),
            Ok(Command::Cd("odds and ends".to_string()))
        );
        assert_eq!(
            parse_command("cd").unwrap_err().to_string(),
            "cd: missing sectionId"
        );
    }

    #[test]
    fn parse_skin_validates_name() {
        assert_eq!(
            parse_command("skin NEON"),
            Ok(Command::Skin {
                skin: Skin::Neon,
                typed: "NEON".to_string()
            })
        );
        assert_eq!(
            parse_command("skin").unwrap_err().to_string(),
            "skin: missing name"
        );
        assert_eq!(
            parse_command("skin mauve").unwrap_err().to_string(),
            "skin: unknown skin 'mauve'"
        );
    }

    #[test]
    fn parse_rejects_unknown_verb() {
        let err = parse_command("Frobnicate x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown command: frobnicate - type 'help' for a list."
        );
    }

    #[test]
    fn complete_verb_unique() {
        assert_eq!(complete_command_input("op").as_deref(), Some("open "));
        assert_eq!(complete_command_input("q").as_deref(), Some("quit "));
    }

    #[test]
    fn complete_verb_common_prefix() {
        assert_eq!(complete_command_input("cl").as_deref(), Some("clear "));
        assert!(complete_command_input("c").is_none());
    }

    #[test]
    fn complete_skin_names() {
        assert_eq!(complete_command_input("skin va").as_deref(), Some("skin vampire "));
        assert_eq!(complete_command_input("skin h").as_deref(), Some("skin hacker "));
        assert!(complete_command_input("skin ").is_none());
    }

    #[test]
    fn complete_returns_none_without_candidates() {
        assert!(complete_command_input("").is_none());
        assert!(complete_command_input("open 1").is_none());
        assert!(complete_command_input("zz").is_none());
    }
}
