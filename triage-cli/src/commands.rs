//! Command parsing and alias resolution
//!
//! Input lines are whitespace-split; the first token names a command (after
//! alias resolution), the second is its argument when it takes one. A bare
//! integer is shorthand for `detail <index>`.

use anyhow::anyhow;

/// Commands the session dispatches on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Refresh the cache and render the indexed table
    List,
    /// Render one item's full fields
    Detail(Option<usize>),
    /// Close an issue by index
    Close(Option<usize>),
    /// Create a new issue in the default repository
    New,
    /// Show command help, or the alias table
    Help(Option<String>),
}

/// Result of parsing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line; nothing to do
    Empty,
    /// A recognized command
    Command(Command),
    /// Anything else, echoed back as a diagnostic
    Unknown(String),
}

/// Alias -> command name
pub const ALIASES: &[(&str, &str)] = &[
    ("l", "list"),
    ("c", "close"),
    ("d", "detail"),
    ("n", "new"),
    ("h", "help"),
];

/// Command name -> one-line doc, in help display order
pub const COMMANDS: &[(&str, &str)] = &[
    ("list", "(list) Refresh and list all assigned items"),
    ("detail", "(detail {index}) Show full details for one item"),
    ("close", "(close {index}) Close an issue by index"),
    ("new", "(new) Create a new issue in the default repository"),
    ("help", "(help [alias]) Show commands, or the alias table"),
];

/// Parse one input line
///
/// Returns an error only for a recognized command with a malformed argument
/// (e.g. a non-numeric index); unrecognized input is not an error.
pub fn parse(line: &str) -> anyhow::Result<Input> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(Input::Empty);
    };
    let arg = tokens.next();

    let command = match resolve_alias(head) {
        "list" => Command::List,
        "detail" => Command::Detail(parse_index(arg)?),
        "close" => Command::Close(parse_index(arg)?),
        "new" => Command::New,
        "help" => Command::Help(arg.map(str::to_string)),
        _ => {
            if let Ok(index) = head.parse::<usize>() {
                Command::Detail(Some(index))
            } else {
                return Ok(Input::Unknown(line.to_string()));
            }
        }
    };

    Ok(Input::Command(command))
}

fn resolve_alias(token: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, name)| *name)
        .unwrap_or(token)
}

fn parse_index(arg: Option<&str>) -> anyhow::Result<Option<usize>> {
    arg.map(|s| {
        s.parse::<usize>()
            .map_err(|_| anyhow!("invalid index: {}", s))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_names() {
        assert_eq!(parse("list").unwrap(), Input::Command(Command::List));
        assert_eq!(parse("new").unwrap(), Input::Command(Command::New));
        assert_eq!(
            parse("detail 3").unwrap(),
            Input::Command(Command::Detail(Some(3)))
        );
        assert_eq!(
            parse("close 0").unwrap(),
            Input::Command(Command::Close(Some(0)))
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse("l").unwrap(), Input::Command(Command::List));
        assert_eq!(
            parse("c 2").unwrap(),
            Input::Command(Command::Close(Some(2)))
        );
        assert_eq!(parse("d").unwrap(), Input::Command(Command::Detail(None)));
        assert_eq!(parse("n").unwrap(), Input::Command(Command::New));
        assert_eq!(parse("h").unwrap(), Input::Command(Command::Help(None)));
    }

    #[test]
    fn test_bare_integer_is_detail_shorthand() {
        assert_eq!(
            parse("5").unwrap(),
            Input::Command(Command::Detail(Some(5)))
        );
    }

    #[test]
    fn test_help_topic() {
        assert_eq!(
            parse("help alias").unwrap(),
            Input::Command(Command::Help(Some("alias".to_string())))
        );
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert_eq!(parse("").unwrap(), Input::Empty);
        assert_eq!(parse("   ").unwrap(), Input::Empty);
    }

    #[test]
    fn test_unknown_input_echoed_back() {
        assert_eq!(
            parse("frobnicate now").unwrap(),
            Input::Unknown("frobnicate now".to_string())
        );
        // Negative numbers are not valid indices
        assert_eq!(
            parse("-1").unwrap(),
            Input::Unknown("-1".to_string())
        );
    }

    #[test]
    fn test_bad_index_argument_is_error() {
        assert!(parse("detail x").is_err());
        assert!(parse("close one").is_err());
    }

    #[test]
    fn test_every_alias_targets_a_command() {
        for (_, name) in ALIASES {
            assert!(COMMANDS.iter().any(|(cmd, _)| cmd == name));
        }
    }
}
