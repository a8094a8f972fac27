//! Triage GitHub - GitHub integration for gh-triage
//!
//! This crate maps the `gh` search API response into addressable records and
//! drives the close/create actions through the external CLI.

mod client;
mod error;
mod model;
mod search;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use model::{Item, ItemKind, RepoOwner, Repository};
pub use search::SearchResults;
