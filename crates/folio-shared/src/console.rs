//! Dev console - a fake command line with five canned commands.
//!
//! `resolve` is the dispatcher: it appends exactly one line to the log for
//! every command except `close`, which appends nothing and calls the host's
//! close callback instead.

use tracing::debug;

pub const WELCOME_LINE: &str = "Welcome to dev-cli. Type `help`.";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleCommand {
    Help,
    Projects,
    Resume,
    Contact,
    Close,
    Unknown,
}

impl std::fmt::Display for ConsoleCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Help => "help",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::Close => "close",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl ConsoleCommand {
    /// Commands reachable by a literal token.
    pub const KNOWN: [ConsoleCommand; 5] = [
        Self::Help,
        Self::Projects,
        Self::Resume,
        Self::Contact,
        Self::Close,
    ];

    /// Parse a raw command line (trimmed, lowercased).
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "help" => Self::Help,
            "projects" => Self::Projects,
            "resume" => Self::Resume,
            "contact" => Self::Contact,
            "close" => Self::Close,
            _ => Self::Unknown,
        }
    }

    /// Fixed response line. `None` for `close`, which produces no line.
    pub fn response(self) -> Option<&'static str> {
        match self {
            Self::Help => Some("Commands: projects, resume, contact, close"),
            Self::Projects => Some("Open the Projects section to see case studies."),
            Self::Resume => Some("Resume: /resume.pdf (download)"),
            Self::Contact => Some("Contact form is on the site footer."),
            Self::Close => None,
            Self::Unknown => Some(UNKNOWN_COMMAND),
        }
    }
}

/// What a resolved command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// One line was appended to the log.
    Line(&'static str),
    /// The close callback was invoked; nothing was logged.
    Closed,
}

/// Append-only console output.
#[derive(Debug, Default, Clone)]
pub struct ConsoleLog {
    lines: Vec<String>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Resolve a raw command line against the fixed command table.
pub fn resolve(raw: &str, log: &mut ConsoleLog, on_close: impl FnOnce()) -> Resolution {
    let command = ConsoleCommand::parse(raw);
    debug!(command = %command, "console command dispatched");

    match command.response() {
        Some(line) => {
            log.push(line);
            Resolution::Line(line)
        }
        None => {
            on_close();
            Resolution::Closed
        }
    }
}

/// One open console overlay. Dropping it discards the log.
#[derive(Debug)]
pub struct ConsoleSession {
    log: ConsoleLog,
    open: bool,
}

impl ConsoleSession {
    pub fn new() -> Self {
        let mut log = ConsoleLog::new();
        log.push(WELCOME_LINE);
        Self { log, open: true }
    }

    /// Echo the command, then resolve it. Ignored once the session closed.
    pub fn exec(&mut self, raw: &str) -> Option<Resolution> {
        if !self.open {
            return None;
        }
        self.log.push(format!("> {}", raw));
        let open = &mut self.open;
        Some(resolve(raw, &mut self.log, || *open = false))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn log(&self) -> &ConsoleLog {
        &self.log
    }
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new()
    }
}
