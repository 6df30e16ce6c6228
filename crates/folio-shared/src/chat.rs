//! Chatbot resolver - canned answers to a fixed set of questions.
//!
//! Questions are normalized (trimmed, lowercased) and matched exactly against
//! the phrasings each `QuestionClass` owns. Anything else gets the greeting.

use tracing::debug;

use crate::catalog::Catalog;
use crate::transcript::Transcript;
use crate::types::TranscriptEntry;

/// Reply for anything the bot does not recognize.
pub const FALLBACK_ANSWER: &str = "Hello! Tap one of the buttons above to know more";

/// Prompts offered as one-tap shortcuts, in display order.
pub const QUICK_QUESTIONS: [&str; 5] = [
    "E-mail id?",
    "GitHub Username?",
    "LinkedIn Username?",
    "Projects?",
    "Skills?",
];

/// Known question classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionClass {
    /// "e-mail id?" and punctuation variants
    Email,
    GithubUsername,
    LinkedinUsername,
    Projects,
    Skills,
    /// No phrasing matched
    Unknown,
}

impl std::fmt::Display for QuestionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Email => "email",
            Self::GithubUsername => "github_username",
            Self::LinkedinUsername => "linkedin_username",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl QuestionClass {
    /// Every class that has phrasings.
    pub const KNOWN: [QuestionClass; 5] = [
        Self::Email,
        Self::GithubUsername,
        Self::LinkedinUsername,
        Self::Projects,
        Self::Skills,
    ];

    /// Normalized phrasings recognized for this class.
    pub fn phrasings(self) -> &'static [&'static str] {
        match self {
            Self::Email => &["e-mail id?", "email id?", "e-mail?", "email?"],
            Self::GithubUsername => &["github username?"],
            Self::LinkedinUsername => &["linkedin username?"],
            Self::Projects => &["projects?"],
            Self::Skills => &["skills?"],
            Self::Unknown => &[],
        }
    }

    /// Render the canned answer for this class.
    pub fn answer(self, catalog: &Catalog) -> String {
        let profile = &catalog.profile;
        match self {
            Self::Email => format!("My email is {}.", profile.email),
            Self::GithubUsername => format!(
                "GitHub username: {0} (github.com/{0}).",
                profile.github_handle
            ),
            Self::LinkedinUsername => format!(
                "LinkedIn username: {0} (linkedin.com/in/{0}).",
                profile.linkedin_handle
            ),
            Self::Projects => format!(
                "Projects: {}.",
                catalog.project_titles().collect::<Vec<_>>().join(", ")
            ),
            Self::Skills => format!("Skills: {}.", catalog.skills.join(", ")),
            Self::Unknown => FALLBACK_ANSWER.to_string(),
        }
    }
}

/// Normalize a question for matching
pub fn normalize(question: &str) -> String {
    question.trim().to_lowercase()
}

/// Classify a question to a known class
pub fn classify_question(question: &str) -> QuestionClass {
    let norm = normalize(question);
    QuestionClass::KNOWN
        .into_iter()
        .find(|class| class.phrasings().contains(&norm.as_str()))
        .unwrap_or(QuestionClass::Unknown)
}

/// Answer a question. Total: unknown input gets the fallback greeting.
pub fn answer(question: &str, catalog: &Catalog) -> String {
    let class = classify_question(question);
    debug!(class = %class, "chat question classified");
    class.answer(catalog)
}

/// One open chatbot widget. Dropping it discards the transcript.
#[derive(Debug)]
pub struct ChatSession<'a> {
    catalog: &'a Catalog,
    transcript: Transcript,
}

impl<'a> ChatSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            transcript: Transcript::new(),
        }
    }

    /// Ask a question, recording the exchange.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the trimmed
    /// question and the answer are appended, in that order, and the answer
    /// is returned.
    pub fn send(&mut self, question: &str) -> Option<&str> {
        let text = question.trim();
        if text.is_empty() {
            return None;
        }

        let reply = answer(text, self.catalog);
        self.transcript.push(TranscriptEntry::user(text));
        self.transcript.push(TranscriptEntry::bot(reply));
        self.transcript.last().map(|e| e.text.as_str())
    }

    /// Send the quick question at `index` (zero-based).
    pub fn send_quick(&mut self, index: usize) -> Option<&str> {
        let question = QUICK_QUESTIONS.get(index)?;
        self.send(question)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
