//! Built-in portfolio data.
//!
//! The catalog is created once at startup and only ever read afterwards.
//! Resolvers take `&Catalog`, so nothing downstream can mutate it.

use serde::Serialize;
use tracing::debug;

use crate::config::ProfileOverrides;
use crate::error::{FolioError, Result};
use crate::types::{Identity, Profile, Project};

/// Read-only bundle of everything the resolvers and renderers need.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub profile: Profile,
    pub identity: Identity,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
}

const SKILLS: [&str; 10] = [
    "TypeScript",
    "React",
    "Node.js",
    "WebSockets",
    "Postgres",
    "Docker",
    "Testing",
    "CSS",
    "Three.js",
    "MediaPipe",
];

impl Catalog {
    /// The portfolio as shipped.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                email: "rethashdevreddy@gmail.con".to_string(),
                github_handle: "reth0608".to_string(),
                linkedin_handle: "RethashReddy".to_string(),
            },
            identity: builtin_identity(),
            projects: builtin_projects(),
            skills: SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace profile handles with any configured values.
    pub fn with_profile_overrides(mut self, overrides: &ProfileOverrides) -> Self {
        if let Some(email) = &overrides.email {
            debug!("profile override: email");
            self.profile.email = email.clone();
        }
        if let Some(github) = &overrides.github {
            debug!("profile override: github");
            self.profile.github_handle = github.clone();
        }
        if let Some(linkedin) = &overrides.linkedin {
            debug!("profile override: linkedin");
            self.profile.linkedin_handle = linkedin.clone();
        }
        self
    }

    /// Look up a project by id (case-insensitive).
    pub fn project(&self, id: &str) -> Result<&Project> {
        let wanted = id.trim();
        self.projects
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FolioError::UnknownProject(wanted.to_string()))
    }

    /// Find the canonical skill label for user input, ignoring case.
    pub fn skill(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.skills
            .iter()
            .find(|s| s.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    pub fn project_titles(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.title.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_identity() -> Identity {
    Identity {
        display_name: "Rethash".to_string(),
        tagline: "CS Student • Full-Stack Developer".to_string(),
        headline: "I build stuff.".to_string(),
        focus: "Current focus: proximity-based WebSocket app and developer tooling. \
                I ship production-ready code with tests, CI, and monitoring."
            .to_string(),
        about: "I’m Rethash — a full-stack developer who loves building fast, reliable, \
                and user-focused digital products — from real-time observability systems \
                to AI-driven tools. I blend TypeScript, Node.js, Python, and modern React \
                frameworks to turn rough ideas into clean architecture and smooth UX. \
                I’m always experimenting, always learning, and always shipping something \
                new that pushes the limits of what tech can do."
            .to_string(),
        resume_path: "/Resume-Rethash-Reddy.pdf".to_string(),
        github_url: "https://github.com/reth0608".to_string(),
        linkedin_url: "https://www.linkedin.com/in/rethash-reddy-7202b9291/".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    summary: &str,
    tech: &[&str],
    demo: &str,
    repo: &str,
    duration: &str,
    metrics: &[&str],
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        // An empty demo link means "no demo"
        demo_url: (!demo.is_empty()).then(|| demo.to_string()),
        repo_url: repo.to_string(),
        duration: duration.to_string(),
        metrics: metrics.iter().map(|m| m.to_string()).collect(),
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        project(
            "observify",
            "Observify",
            "Full-stack observability platform capturing client errors, network failures, \
             and performance metrics in real time. Built a TypeScript SDK, Node.js/Express \
             ingestion pipeline, and React dashboard with AI-driven anomaly detection and alerting.",
            &["TypeScript", "Node.js", "Python"],
            "",
            "https://github.com/yourname/observify",
            "4 weeks",
            &["Captured 2M+ events in testing"],
        ),
        project(
            "ai-task-manager",
            "AI-Powered Task Manager",
            "Full-stack task management app with Clerk auth, protected routes, progress \
             tracking, and historical insights. Built responsive dashboards using Next.js, \
             Tailwind, and ShadCN; integrated Drizzle ORM + PostgreSQL for scalable data persistence.",
            &["React", "Next.js", "Drizzle ORM"],
            "",
            "https://github.com/yourname/ai-task-manager",
            "3 weeks",
            &["99+ Lighthouse Accessibility"],
        ),
        project(
            "ai-shell",
            "AI-Enhanced Custom Shell",
            "Custom Unix-style shell with AI-assisted typo correction. Implemented command \
             parsing, job control, and fuzzy-matched auto-fixing of malformed commands for a \
             faster, developer-friendly terminal workflow.",
            &["C", "Unix"],
            "",
            "https://github.com/yourname/ai-shell",
            "2 weeks",
            &["Fixed 90% of common typos in tests"],
        ),
    ]
}
