//! Read-eval-print loop
//!
//! The session has two states: awaiting a command, and terminated.
//! Termination happens only on end-of-input or an interrupt; every command,
//! including failed ones, returns to the awaiting state. Dispatch errors are
//! printed to stderr and never tear down the loop.

use anyhow::anyhow;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use triage_core::GhRunner;
use triage_github::ItemKind;

use crate::commands::{self, Command, Input};
use crate::render;
use crate::session::Session;

/// Seam for reading user input, so the loop is testable with scripted lines
pub trait Prompt {
    /// Read one line; `None` means end-of-input or interrupt
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Prompt backed by a rustyline editor with history
pub struct ReadlinePrompt {
    editor: DefaultEditor,
}

impl ReadlinePrompt {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for ReadlinePrompt {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// The interactive loop over one session
pub struct Repl<R: GhRunner, P: Prompt> {
    session: Session<R>,
    prompt: P,
}

impl<R: GhRunner, P: Prompt> Repl<R, P> {
    pub fn new(session: Session<R>, prompt: P) -> Self {
        Self { session, prompt }
    }

    /// Run until end-of-input or interrupt
    ///
    /// Starts with one `list` so the user sees their items immediately; a
    /// failing startup fetch is reported like any other command error and the
    /// loop still starts.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if let Err(e) = self.cmd_list() {
            eprintln!("{:#}", e);
        }

        loop {
            let Some(line) = self.prompt.read_line("> ")? else {
                break;
            };

            match commands::parse(&line) {
                Ok(Input::Empty) => {}
                Ok(Input::Command(command)) => {
                    if let Err(e) = self.dispatch(command) {
                        eprintln!("{:#}", e);
                    }
                }
                Ok(Input::Unknown(input)) => {
                    eprintln!("Unknown command: {}", input);
                }
                Err(e) => {
                    eprintln!("{:#}", e);
                }
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::List => self.cmd_list(),
            Command::Detail(index) => self.cmd_detail(index),
            Command::Close(index) => self.cmd_close(index),
            Command::New => self.cmd_new(),
            Command::Help(topic) => self.cmd_help(topic.as_deref()),
        }
    }

    fn cmd_list(&mut self) -> anyhow::Result<()> {
        self.session.refresh()?;
        print!(
            "{}",
            render::list_table(self.session.items(), self.session.issue_count())
        );
        Ok(())
    }

    fn cmd_detail(&mut self, index: Option<usize>) -> anyhow::Result<()> {
        let index = self.resolve_index(index, "Show which?: ")?;
        let item = self.session.get(index)?;
        print!("{}", render::detail(item));
        Ok(())
    }

    fn cmd_close(&mut self, index: Option<usize>) -> anyhow::Result<()> {
        let index = self.resolve_index(index, "Close which?: ")?;
        let item = self.session.get(index)?.clone();

        if item.kind != ItemKind::Issue {
            println!("{}", render::cannot_close(item.kind));
            return Ok(());
        }

        print!("{}", render::detail(&item));
        let reply = self.prompt.read_line("Close? (y/N): ")?;
        let confirmed = matches!(
            reply,
            Some(answer) if answer.trim().to_lowercase().starts_with('y')
        );

        if confirmed {
            self.session.client().close_issue(&item.url)?;
        } else {
            println!("Aborted");
        }

        Ok(())
    }

    fn cmd_new(&mut self) -> anyhow::Result<()> {
        self.session.client().create_issue()?;
        Ok(())
    }

    fn cmd_help(&mut self, topic: Option<&str>) -> anyhow::Result<()> {
        match topic {
            Some(t) if t.eq_ignore_ascii_case("alias") => print!("{}", render::alias_table()),
            _ => print!("{}", render::help_table()),
        }
        Ok(())
    }

    /// Use the given index, or ask for one
    fn resolve_index(&mut self, index: Option<usize>, prompt: &str) -> anyhow::Result<usize> {
        match index {
            Some(index) => Ok(index),
            None => {
                let line = self
                    .prompt
                    .read_line(prompt)?
                    .ok_or_else(|| anyhow!("aborted"))?;
                let token = line.trim();
                token
                    .parse()
                    .map_err(|_| anyhow!("invalid index: {}", token))
            }
        }
    }
}
