//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Folio terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folioctl")]
#[command(about = "Folio - a portfolio for the terminal", long_about = None)]
#[command(version = env!("FOLIO_VERSION"))]
pub struct Cli {
    /// Config file (overrides $FOLIO_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand (if not provided, renders the whole page)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List project cards
    Projects {
        /// Print the project list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Deep dive into one project
    Project {
        /// Project id, e.g. "observify"
        id: String,
    },

    /// Ask the chatbot one question
    Ask {
        /// Print the exchange as JSON transcript entries
        #[arg(long)]
        json: bool,

        /// Question text, e.g. "Skills?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Interactive chatbot
    Chat,

    /// Skills map, optionally with one skill selected
    Skills {
        /// Skill label, e.g. "React"
        skill: Option<String>,
    },

    /// Interactive dev console
    Console,

    /// Send the contact form (simulated)
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    /// About section with resume and profile links
    About,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_renders_page() {
        let cli = Cli::try_parse_from(["folioctl"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_ask_collects_words() {
        let cli = Cli::try_parse_from(["folioctl", "ask", "GitHub", "Username?"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Ask {
                json: false,
                question: vec!["GitHub".to_string(), "Username?".to_string()],
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folioctl", "projects", "--no-color", "-vv"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_contact_requires_fields() {
        assert!(Cli::try_parse_from(["folioctl", "contact", "--name", "Ada"]).is_err());
    }
}
