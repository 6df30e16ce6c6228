//! Output styling - ASCII section markers with optional color
//!
//! Color is off when `--no-color` is given, the config disables it,
//! `NO_COLOR` is set, stdout is not a terminal, or `TERM=dumb`.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Detect if color output should be used
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Plain ASCII, no escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Resolve from config, flag and terminal.
    pub fn detect(config_color: bool, no_color_flag: bool) -> Self {
        Self::new(config_color && !no_color_flag && should_use_color())
    }

    pub fn is_color(&self) -> bool {
        self.color
    }

    /// `[NAME]` section marker
    pub fn section(&self, name: &str) -> String {
        let marker = format!("[{}]", name.to_uppercase());
        if self.color {
            marker.bright_cyan().bold().to_string()
        } else {
            marker
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.color {
            text.magenta().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_escapes() {
        let style = Style::plain();
        assert_eq!(style.section("projects"), "[PROJECTS]");
        assert_eq!(style.bold("x"), "x");
        assert_eq!(style.error("bad"), "bad");
    }

    #[test]
    fn test_color_wraps_text() {
        let style = Style::new(true);
        let s = style.section("about");
        assert!(s.contains("[ABOUT]"));
        assert!(s.contains('\u{1b}'));
    }

    #[test]
    fn test_flag_disables_color() {
        assert!(!Style::detect(true, true).is_color());
        assert!(!Style::detect(false, false).is_color());
    }
}
