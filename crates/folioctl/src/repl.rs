//! Interactive loops for the chatbot and the dev console
//!
//! Both loops read lines from any `BufRead` and write to any `Write`, so
//! tests drive them with in-memory buffers. Each loop owns its session;
//! leaving the loop drops the transcript or log with it.

use folio_shared::catalog::Catalog;
use folio_shared::chat::{ChatSession, QUICK_QUESTIONS};
use folio_shared::console::ConsoleSession;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use crate::output::Style;
use crate::render;

const CHAT_PROMPT: &str = "ask> ";
const CONSOLE_PROMPT: &str = "$ ";

/// Input that leaves the chatbot.
fn is_exit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit")
}

/// Map `1`..`5` to a quick question index.
fn quick_index(line: &str) -> Option<usize> {
    let n: usize = line.trim().parse().ok()?;
    (1..=QUICK_QUESTIONS.len()).contains(&n).then(|| n - 1)
}

/// Read one line, without its line ending.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the
/// session. Returns `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    let line = match String::from_utf8(buf) {
        Ok(line) => line,
        Err(e) => {
            warn!("input line is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(Some(line))
}

/// Run the chatbot until `exit` or end of input.
///
/// Returns how many exchanges the session recorded.
pub fn run_chat<R: BufRead, W: Write>(
    catalog: &Catalog,
    style: &Style,
    mut input: R,
    out: &mut W,
) -> io::Result<usize> {
    let mut session = ChatSession::new(catalog);
    write!(out, "{}", render::chatbot_intro(style))?;

    loop {
        write!(out, "{}", CHAT_PROMPT)?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        if is_exit(&line) {
            break;
        }

        let question = match quick_index(&line) {
            Some(i) => QUICK_QUESTIONS[i],
            None => line.as_str(),
        };

        let before = session.transcript().len();
        if session.send(question).is_none() {
            continue;
        }
        for entry in &session.transcript().entries()[before..] {
            writeln!(out, "{}", render::transcript_line(entry.speaker, &entry.text, style))?;
        }
    }

    let exchanges = session.transcript().len() / 2;
    debug!(exchanges, "chat session closed");
    Ok(exchanges)
}

/// Run the dev console until `close` or end of input.
///
/// Returns whether the session ended via `close`.
pub fn run_console<R: BufRead, W: Write>(
    style: &Style,
    mut input: R,
    out: &mut W,
) -> io::Result<bool> {
    let mut session = ConsoleSession::new();
    let mut shown = 0;

    loop {
        for line in &session.log().lines()[shown..] {
            writeln!(out, "{}", style.success(line))?;
        }
        shown = session.log().len();

        if !session.is_open() {
            break;
        }

        write!(out, "{}", CONSOLE_PROMPT)?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        session.exec(&line);
    }

    let closed = !session.is_open();
    debug!(closed, lines = session.log().len(), "console session ended");
    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_index() {
        assert_eq!(quick_index("1"), Some(0));
        assert_eq!(quick_index(" 5 "), Some(4));
        assert_eq!(quick_index("0"), None);
        assert_eq!(quick_index("6"), None);
        assert_eq!(quick_index("Skills?"), None);
    }

    #[test]
    fn test_read_line_strips_endings_and_replaces_bad_bytes() {
        let mut input: &[u8] = b"one\r\ntwo\n\xff\xfe\nlast";
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("one"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("two"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_is_exit() {
        assert!(is_exit("exit"));
        assert!(is_exit(" QUIT "));
        assert!(!is_exit("close"));
    }
}
