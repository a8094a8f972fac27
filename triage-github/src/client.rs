//! GitHub client driving the external gh CLI

use tracing::{debug, info};

use triage_core::{Config, GhCli, GhRunner};

use crate::search::{parse_search_response, SearchResults, SEARCH_QUERY};
use crate::{Error, Result};

/// Client for the search, close, and create operations
///
/// Generic over the runner so tests can substitute an in-memory double; the
/// default is the real gh executable.
pub struct GitHubClient<R = GhCli> {
    runner: R,
    username: Option<String>,
    repo: Option<String>,
}

impl GitHubClient<GhCli> {
    /// Create a client from resolved configuration
    pub fn new(config: &Config) -> Self {
        Self {
            runner: GhCli::new().with_gh_path(config.gh.path.clone()),
            username: config.gh.username.clone(),
            repo: config.gh.repo.clone(),
        }
    }
}

impl<R: GhRunner> GitHubClient<R> {
    /// Create a client over a specific runner
    pub fn with_runner(runner: R, username: Option<String>, repo: Option<String>) -> Self {
        Self {
            runner,
            username,
            repo,
        }
    }

    /// Get the underlying runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn username(&self) -> Result<&str> {
        self.username.as_deref().ok_or_else(|| {
            Error::MissingEnv(
                "username not set. Set TRIAGE_USERNAME or add `username` to the config file"
                    .to_string(),
            )
        })
    }

    fn repo(&self) -> Result<&str> {
        self.repo.as_deref().ok_or_else(|| {
            Error::MissingEnv(
                "repository not set. Set TRIAGE_REPO or add `repo` to the config file".to_string(),
            )
        })
    }

    /// Search for open items assigned to the acting user
    ///
    /// Runs the fixed GraphQL search through `gh api graphql` and parses the
    /// captured output. Failures never yield a partial result.
    pub fn search_assigned(&self) -> Result<SearchResults> {
        let username = self.username()?;
        let filter = format!("assignee:{} is:open", username);

        debug!(%filter, "running search");

        let query_arg = format!("query={}", SEARCH_QUERY);
        let target_arg = format!("target={}", filter);
        let stdout = self
            .runner
            .capture(&["api", "graphql", "-f", &query_arg, "-F", &target_arg])?;

        let results = parse_search_response(&stdout)?;

        info!(
            count = results.items.len(),
            total = results.issue_count,
            "search complete"
        );

        Ok(results)
    }

    /// Close the issue at the given URL
    ///
    /// The terminal is inherited so gh's own confirmation output is visible.
    pub fn close_issue(&self, url: &str) -> Result<()> {
        info!(%url, "closing issue");
        self.runner.interactive(&["issue", "close", url])?;
        Ok(())
    }

    /// Create a new issue in the default repository, assigned to the acting
    /// user
    ///
    /// Fully delegated to `gh issue create`, which prompts for title and body
    /// on the inherited terminal.
    pub fn create_issue(&self) -> Result<()> {
        let username = self.username()?;
        let repo = self.repo()?;

        info!(%repo, %username, "creating issue");
        self.runner
            .interactive(&["--repo", repo, "issue", "create", "--assignee", username])?;
        Ok(())
    }
}

impl<R> std::fmt::Debug for GitHubClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("username", &self.username)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Runner double that records argument vectors and replays canned output
    struct FakeRunner {
        calls: RefCell<Vec<Vec<String>>>,
        stdout: String,
    }

    impl FakeRunner {
        fn new(stdout: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                stdout: stdout.to_string(),
            }
        }

        fn record(&self, args: &[&str]) {
            self.calls
                .borrow_mut()
                .push(args.iter().map(|s| s.to_string()).collect());
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl GhRunner for FakeRunner {
        fn capture(&self, args: &[&str]) -> triage_core::Result<String> {
            self.record(args);
            Ok(self.stdout.clone())
        }

        fn interactive(&self, args: &[&str]) -> triage_core::Result<()> {
            self.record(args);
            Ok(())
        }
    }

    const ONE_ISSUE: &str = r#"{"data":{"search":{"issueCount":1,"edges":[{"node":{"__typename":"Issue","createdAt":"2021-01-01T00:00:00Z","title":"Fix bug","url":"https://x/1","bodyText":"","repository":{"owner":{"__typename":"Organization","name":"acme"},"name":"widgets"}}}]}}}"#;

    #[test]
    fn test_search_requires_username() {
        let runner = FakeRunner::new(ONE_ISSUE);
        let client = GitHubClient::with_runner(runner, None, None);

        let err = client.search_assigned().unwrap_err();
        assert!(matches!(err, Error::MissingEnv(_)));
        assert!(client.runner.calls().is_empty());
    }

    #[test]
    fn test_search_builds_filter_and_parses() {
        let runner = FakeRunner::new(ONE_ISSUE);
        let client = GitHubClient::with_runner(runner, Some("alice".to_string()), None);

        let results = client.search_assigned().unwrap();
        assert_eq!(results.items.len(), 1);
        assert_eq!(results.items[0].title, "Fix bug");

        let calls = client.runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0], "api");
        assert_eq!(calls[0][1], "graphql");
        assert!(calls[0].contains(&"target=assignee:alice is:open".to_string()));
    }

    #[test]
    fn test_close_issue_passes_url() {
        let runner = FakeRunner::new("");
        let client = GitHubClient::with_runner(runner, Some("alice".to_string()), None);

        client.close_issue("https://x/1").unwrap();

        assert_eq!(
            client.runner.calls(),
            vec![vec![
                "issue".to_string(),
                "close".to_string(),
                "https://x/1".to_string()
            ]]
        );
    }

    #[test]
    fn test_create_requires_repo() {
        let runner = FakeRunner::new("");
        let client = GitHubClient::with_runner(runner, Some("alice".to_string()), None);

        let err = client.create_issue().unwrap_err();
        assert!(matches!(err, Error::MissingEnv(_)));
        assert!(client.runner.calls().is_empty());
    }

    #[test]
    fn test_create_requires_username() {
        let runner = FakeRunner::new("");
        let client = GitHubClient::with_runner(runner, None, Some("alice/todo".to_string()));

        let err = client.create_issue().unwrap_err();
        assert!(matches!(err, Error::MissingEnv(_)));
    }

    #[test]
    fn test_create_issue_arguments() {
        let runner = FakeRunner::new("");
        let client = GitHubClient::with_runner(
            runner,
            Some("alice".to_string()),
            Some("alice/todo".to_string()),
        );

        client.create_issue().unwrap();

        assert_eq!(
            client.runner.calls(),
            vec![vec![
                "--repo".to_string(),
                "alice/todo".to_string(),
                "issue".to_string(),
                "create".to_string(),
                "--assignee".to_string(),
                "alice".to_string()
            ]]
        );
    }
}
