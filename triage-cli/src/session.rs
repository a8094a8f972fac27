//! In-memory session cache
//!
//! The cache is the only addressing scheme exposed to the user: commands take
//! positions in the current item list. It is replaced wholesale on refresh,
//! so indices never survive a refresh.

use anyhow::anyhow;
use triage_core::GhRunner;
use triage_github::{GitHubClient, Item};

/// One interactive session: the client plus the current ordered item list
pub struct Session<R: GhRunner> {
    client: GitHubClient<R>,
    items: Vec<Item>,
    issue_count: u64,
}

impl<R: GhRunner> Session<R> {
    /// Create a session with an empty cache
    pub fn new(client: GitHubClient<R>) -> Self {
        Self {
            client,
            items: Vec::new(),
            issue_count: 0,
        }
    }

    /// Re-run the search and replace the cache
    ///
    /// The cache is only assigned after a fully successful fetch and parse;
    /// on error the previous items remain visible.
    pub fn refresh(&mut self) -> anyhow::Result<()> {
        let results = self.client.search_assigned()?;
        self.items = results.items;
        self.issue_count = results.issue_count;
        Ok(())
    }

    /// Current items, in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Server-reported total for the last successful search
    pub fn issue_count(&self) -> u64 {
        self.issue_count
    }

    /// Resolve an index against the current cache
    pub fn get(&self, index: usize) -> anyhow::Result<&Item> {
        self.items.get(index).ok_or_else(|| {
            anyhow!(
                "index {} out of range ({} item{} cached)",
                index,
                self.items.len(),
                if self.items.len() == 1 { "" } else { "s" }
            )
        })
    }

    /// The underlying client
    pub fn client(&self) -> &GitHubClient<R> {
        &self.client
    }
}
