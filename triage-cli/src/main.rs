//! Triage CLI - interactive triage for your assigned GitHub work
//!
//! Lists the open issues and pull requests assigned to you, then drops into
//! a prompt where items are addressed by their list index.

mod commands;
mod render;
mod repl;
mod session;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use triage_core::Config;
use triage_github::GitHubClient;

use repl::{ReadlinePrompt, Repl};
use session::Session;

/// Interactive triage for GitHub issues and pull requests assigned to you
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to the gh executable (overrides config and env)
    #[arg(long, env = "TRIAGE_GH_PATH")]
    gh_path: Option<String>,

    /// GitHub username used for the assignee search (overrides config and env)
    #[arg(long, env = "TRIAGE_USERNAME")]
    user: Option<String>,

    /// Default repository for new issues, owner/repo (overrides config and env)
    #[arg(long, env = "TRIAGE_REPO")]
    repo: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.gh_path, cli.user, cli.repo)?;

    if cli.verbose {
        tracing::info!(
            gh_path = %config.gh.path,
            username = ?config.gh.username,
            repo = ?config.gh.repo,
            "Configuration loaded"
        );
    }

    let client = GitHubClient::new(&config);
    let session = Session::new(client);
    let prompt = ReadlinePrompt::new()?;

    Repl::new(session, prompt).run()
}
