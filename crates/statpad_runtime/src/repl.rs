//! The main REPL implementation.

use std::fmt::Write as _;
use std::io::{self, Write};

use statpad_foundation::{Error, ErrorKind, Result};
use statpad_parser::stdlib;
use tracing::debug;

use crate::config::{OutputFormat, RuntimeConfig};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What a line of input produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print.
    Print(String),
    /// Nothing to print.
    Silent,
    /// Leave the REPL.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (catalog, format).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with a rustyline editor, as the configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize or the starting
    /// catalog cannot be loaded.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        let session = Session::from_config(config)?;
        Ok(Self::with_editor(editor)
            .with_session(session)
            .with_prompt(config.prompt.clone())
            .with_banner(config.show_banner))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor over an empty catalog.
    pub fn with_editor(editor: E) -> Self {
        let mut repl = Self {
            editor,
            session: Session::with_catalog(statpad_storage::Catalog::new()),
            show_banner: true,
            prompt: RuntimeConfig::default().prompt,
        };
        repl.refresh_keywords();
        repl
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.refresh_keywords();
        self
    }

    /// Shows or hides the welcome banner.
    #[must_use]
    pub const fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(self) -> Self {
        self.with_banner(false)
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Quit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one line: a `:command` or a query.
    ///
    /// # Errors
    ///
    /// Returns the command's or query's error.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Outcome::Silent);
        }
        if input.starts_with(':') {
            return self.eval_command(input);
        }
        self.session.respond(input).map(Outcome::Print)
    }

    fn eval_command(&mut self, input: &str) -> Result<Outcome> {
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };
        debug!(command, "repl command");

        match command {
            ":help" | ":h" => Ok(Outcome::Print(HELP.trim_end().to_string())),
            ":quit" | ":q" | ":exit" => Ok(Outcome::Quit),
            ":json" => {
                self.session.set_format(OutputFormat::Json);
                Ok(Outcome::Print("output format: json".into()))
            }
            ":text" => {
                self.session.set_format(OutputFormat::Text);
                Ok(Outcome::Print("output format: text".into()))
            }
            ":classify" => {
                let query = required(command, arg)?;
                self.session.describe(query).map(Outcome::Print)
            }
            ":load" => {
                let path = required(command, arg)?;
                self.session.load(path)?;
                self.refresh_keywords();
                let catalog = self.session.catalog();
                Ok(Outcome::Print(format!(
                    "loaded {path}: {} teams, {} players, {} games",
                    catalog.team_count(),
                    catalog.player_count(),
                    catalog.game_count()
                )))
            }
            ":save" => {
                let path = required(command, arg)?;
                self.session.save(path)?;
                Ok(Outcome::Print(format!("saved {path}")))
            }
            ":teams" => Ok(Outcome::Print(self.list_teams())),
            ":seasons" => Ok(Outcome::Print(self.list_seasons())),
            other => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command {other}; try :help"
            )))),
        }
    }

    fn list_teams(&self) -> String {
        let mut out = String::new();
        for team in self.session.catalog().teams() {
            let _ = writeln!(
                out,
                "{:<4} {:<24} {} / {}",
                team.abbreviation,
                team.name,
                team.conference.as_deref().unwrap_or("-"),
                team.division.as_deref().unwrap_or("-")
            );
        }
        if out.is_empty() {
            out.push_str("no teams loaded");
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn list_seasons(&self) -> String {
        let mut out = String::new();
        for info in self.session.catalog().seasons() {
            let marker = if info.is_current { " (current)" } else { "" };
            let _ = writeln!(out, "{}{marker}", info.season);
        }
        if out.is_empty() {
            out.push_str("no seasons loaded");
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Offers vocabulary words and catalog names for completion.
    fn refresh_keywords(&mut self) {
        let catalog = self.session.catalog();
        let vocabulary = self.session.router().interpreter().vocabulary();

        let mut keywords: Vec<String> = stdlib::COMPARISON_TRIGGERS
            .iter()
            .chain(stdlib::STATS_TRIGGERS)
            .map(|w| (*w).to_string())
            .chain(vocabulary.team_spellings().into_iter().map(str::to_string))
            .chain(catalog.teams().flat_map(|t| [t.abbreviation.clone(), t.name.clone()]))
            .chain(catalog.players().map(|p| p.name.clone()))
            .collect();
        keywords.sort();
        keywords.dedup();
        self.editor.set_keywords(keywords);
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mStatPad v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        let catalog = self.session.catalog();
        println!(
            "{} teams, {} seasons, {} players loaded.",
            catalog.team_count(),
            catalog.seasons().count(),
            catalog.player_count()
        );
        println!("Ask a question, or type :help. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

fn required<'a>(command: &str, arg: &'a str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(Error::new(ErrorKind::Internal(format!(
            "{command} requires an argument"
        ))))
    } else {
        Ok(arg)
    }
}

const HELP: &str = "
Ask about players and teams in plain English:
  What are Stephen Curry stats in 2023-24
  Compare Stephen Curry and LeBron James in 2023-24
  Stephen Curry and LeBron James last 5 games
  Lakers vs Warriors last 10 games

Commands:
  :help              Show this help
  :quit              Exit
  :json / :text      Switch output format
  :classify <query>  Show how a query is understood, without answering it
  :load <file>       Replace the catalog with a snapshot
  :save <file>       Write the catalog to a snapshot
  :teams             List teams
  :seasons           List seasons
";
