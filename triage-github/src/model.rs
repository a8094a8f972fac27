//! Record model for searchable work items

use std::fmt;

use serde::Deserialize;

/// Owner of a repository, discriminated by the GraphQL `__typename`
///
/// Organizations expose their display name as `name`; users only have
/// `login` (the search query aliases nothing, so both shapes arrive as-is).
/// `name()` normalizes the two.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum RepoOwner {
    Organization { name: String },
    User { login: String },
}

impl RepoOwner {
    /// The owner's name, regardless of which kind of owner it is
    pub fn name(&self) -> &str {
        match self {
            Self::Organization { name } => name,
            Self::User { login } => login,
        }
    }
}

/// The repository a work item belongs to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub owner: RepoOwner,
    pub name: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.name(), self.name)
    }
}

/// Kind of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Issue,
    PullRequest,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Issue => "Issue",
            Self::PullRequest => "PullRequest",
        };
        f.write_str(s)
    }
}

/// A searchable work item (issue or pull request)
///
/// Immutable once parsed from a search response. Items have no identity
/// beyond their position in the current session cache; the URL is what the
/// external close action is addressed with.
#[derive(Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
    /// Creation timestamp as reported by the API; kept opaque, never parsed
    pub created_at: String,
    pub title: String,
    pub url: String,
    /// Plain-text body; may be empty
    pub body: String,
    pub repo: Repository,
}
