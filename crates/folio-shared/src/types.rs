//! Core data model: profile, projects, transcript entries.

use serde::{Deserialize, Serialize};

/// Contact handles shown by the chatbot and the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub github_handle: String,
    pub linkedin_handle: String,
}

/// Presentational identity for the header, hero and about sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    pub tagline: String,
    pub headline: String,
    pub focus: String,
    pub about: String,
    /// Relative path the resume is served from.
    pub resume_path: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl Identity {
    /// Single-letter avatar shown in the header.
    pub fn initial(&self) -> char {
        self.display_name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Technology tags in display order.
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub repo_url: String,
    pub duration: String,
    pub metrics: Vec<String>,
}

impl Project {
    /// Headline metric shown on the project card, if any.
    pub fn lead_metric(&self) -> Option<&str> {
        self.metrics.first().map(String::as_str)
    }

    pub fn has_demo(&self) -> bool {
        self.demo_url.is_some()
    }
}

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::User => "you",
            Self::Bot => "bot",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}
