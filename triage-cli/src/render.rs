//! Output formatting
//!
//! Pure formatting only: every function returns a `String` for the caller to
//! print. Nothing in here touches the session state.

use triage_github::{Item, ItemKind};

use crate::commands::{ALIASES, COMMANDS};

const BODY_PREVIEW_LINES: usize = 20;

/// Indexed table of the current cache
pub fn list_table(items: &[Item], issue_count: u64) -> String {
    if items.is_empty() {
        return "No open items assigned to you.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} item{} assigned\n",
        issue_count,
        if issue_count == 1 { "" } else { "s" }
    ));
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{:<4}: {:<30} ({})\n",
            index, item.title, item.repo
        ));
    }
    out
}

/// Full multi-line record for one item
pub fn detail(item: &Item) -> String {
    let mut out = String::new();
    out.push_str(&format!("Type       : {}\n", item.kind));
    out.push_str(&format!("Title      : {}\n", item.title));
    out.push_str(&format!("Repo       : {}\n", item.repo));
    out.push_str(&format!("Created at : {}\n", item.created_at));
    out.push_str(&format!("URL        : {}\n", item.url));

    if !item.body.is_empty() {
        out.push('\n');
        for line in item.body.lines().take(BODY_PREVIEW_LINES) {
            out.push_str(&format!("  {}\n", line));
        }
        if item.body.lines().count() > BODY_PREVIEW_LINES {
            out.push_str("  ...(truncated)\n");
        }
    }

    out
}

/// One line telling the user a pull request cannot be closed
pub fn cannot_close(kind: ItemKind) -> String {
    format!("{} cannot be closed", kind)
}

/// Command table for `help`
pub fn help_table() -> String {
    let mut out = String::new();
    for (name, doc) in COMMANDS {
        out.push_str(&format!("{:<20}: {}\n", name, doc));
    }
    out
}

/// Alias table for `help alias`
pub fn alias_table() -> String {
    let mut out = String::new();
    for (alias, name) in ALIASES {
        out.push_str(&format!("{:<5} -> {}\n", alias, name));
    }
    out
}
