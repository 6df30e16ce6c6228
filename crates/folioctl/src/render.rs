//! Section rendering - turns catalog data into terminal text
//!
//! Every function returns a `String` so callers decide where it goes.

use folio_shared::catalog::Catalog;
use folio_shared::chat::QUICK_QUESTIONS;
use folio_shared::skills::SkillsMap;
use folio_shared::transcript::Transcript;
use folio_shared::types::{Identity, Project, Speaker};

use crate::output::Style;

/// Separator between page sections
pub const THIN_SEPARATOR: &str = "------------------------------------------------------------";

const ARCHITECTURE_NOTE: &str = "High-level architecture diagram (placeholder). Explain components: \
                                 client, server, DB, realtime layer, authentication.";

const KEY_SNIPPET: &str = "// Example: Simple WS message handler (Node)
ws.on('message', (msg) => {
  const data = JSON.parse(msg);
  // handle join, ping, message
});";

const LIVE_PREVIEW_NOTE: &str = "Embedded demo or GIF goes here";

const HERO_MEDIA_NOTE: &str = "Hero GIF / Mini Three.js Scene Placeholder";

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn wrapped(text: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width.max(20))
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, options)
}

/// Avatar initial, name, tagline and the available commands.
pub fn header(identity: &Identity, style: &Style) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        &format!(
            "({})  {}",
            style.accent(&identity.initial().to_string()),
            style.bold(&identity.display_name)
        ),
    );
    push_line(&mut out, &format!("     {}", style.dim(&identity.tagline)));
    push_line(
        &mut out,
        &style.dim("     home: folioctl | projects: folioctl projects | cli: folioctl console"),
    );
    out
}

pub fn hero(identity: &Identity, style: &Style, width: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.bold(&identity.headline));
    push_line(&mut out, &wrapped(&identity.focus, width, ""));
    push_line(&mut out, "");
    push_line(
        &mut out,
        &format!(
            "View projects: folioctl projects   Download resume: {}",
            identity.resume_path
        ),
    );
    push_line(&mut out, &style.dim(&format!("[{}]", HERO_MEDIA_NOTE)));
    out
}

/// Comma-free tag strip: `[TypeScript] [Node.js]`
pub fn tech_tags(project: &Project) -> String {
    project
        .tech
        .iter()
        .map(|t| format!("[{}]", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `{duration} • {first metric}`, or just the duration without metrics.
pub fn card_meta(project: &Project) -> String {
    match project.lead_metric() {
        Some(metric) => format!("{} • {}", project.duration, metric),
        None => project.duration.clone(),
    }
}

pub fn project_card(project: &Project, style: &Style, width: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.bold(&project.title));
    push_line(&mut out, &wrapped(&project.summary, width, "  "));
    push_line(&mut out, &format!("  {}", tech_tags(project)));
    push_line(&mut out, &format!("  {}", style.dim(&card_meta(project))));

    let demo = match &project.demo_url {
        Some(url) => format!("Run demo: {}", url),
        None => style.dim("Demo (unavailable)"),
    };
    push_line(
        &mut out,
        &format!("  Deep dive: folioctl project {}   {}", project.id, demo),
    );
    out
}

pub fn projects(catalog: &Catalog, style: &Style, width: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.section("Selected Projects"));
    for (i, project) in catalog.projects.iter().enumerate() {
        if i > 0 {
            push_line(&mut out, "");
        }
        out.push_str(&project_card(project, style, width));
    }
    out
}

/// Deep-dive view of one project.
pub fn project_detail(project: &Project, style: &Style, width: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.bold(&project.title));
    push_line(&mut out, &wrapped(&project.summary, width, ""));
    push_line(&mut out, "");

    push_line(&mut out, &style.section("Architecture"));
    push_line(&mut out, &wrapped(ARCHITECTURE_NOTE, width, "  "));
    push_line(&mut out, "");

    push_line(&mut out, &style.section("Key snippets"));
    for line in KEY_SNIPPET.lines() {
        push_line(&mut out, &format!("  {}", line));
    }
    push_line(&mut out, "");

    push_line(&mut out, &style.section("Metrics"));
    for metric in &project.metrics {
        push_line(&mut out, &format!("  * {}", metric));
    }
    push_line(&mut out, "");

    push_line(&mut out, &style.section("Live preview"));
    push_line(&mut out, &format!("  {}", style.dim(LIVE_PREVIEW_NOTE)));
    push_line(&mut out, &format!("  View code: {}", project.repo_url));
    if let Some(demo) = &project.demo_url {
        push_line(&mut out, &format!("  Run demo: {}", demo));
    }
    out
}

/// Chatbot intro with the numbered quick questions.
pub fn chatbot_intro(style: &Style) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.section("Portfolio Chatbot"));
    push_line(
        &mut out,
        "Pick a number for an instant answer, or type a question. `exit` leaves.",
    );
    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        push_line(&mut out, &format!("  {}. {}", i + 1, question));
    }
    out
}

pub fn transcript_line(speaker: Speaker, text: &str, style: &Style) -> String {
    let label = format!("{}:", speaker);
    let label = match speaker {
        Speaker::User => style.bold(&label),
        Speaker::Bot => style.accent(&label),
    };
    format!("{} {}", label, text)
}

pub fn transcript(transcript: &Transcript, style: &Style) -> String {
    let mut out = String::new();
    for entry in transcript {
        push_line(&mut out, &transcript_line(entry.speaker, &entry.text, style));
    }
    out
}

pub fn skills_map(catalog: &Catalog, map: &SkillsMap, style: &Style) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.section("Skills Map"));

    let chips = catalog
        .skills
        .iter()
        .map(|s| {
            if map.selected() == Some(s.as_str()) {
                style.accent(&format!(">{}<", s))
            } else {
                s.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    push_line(&mut out, &format!("  {}", chips));
    push_line(&mut out, "");

    for (i, line) in map.detail(&catalog.projects).iter().enumerate() {
        let line = if i == 0 && map.selected().is_some() {
            style.bold(line)
        } else {
            line.clone()
        };
        push_line(&mut out, &format!("  {}", line));
    }
    out
}

pub fn about(identity: &Identity, style: &Style, width: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.section("About"));
    push_line(&mut out, &wrapped(&identity.about, width, "  "));
    push_line(&mut out, "");
    push_line(&mut out, &format!("  Resume:   {}", identity.resume_path));
    push_line(&mut out, &format!("  GitHub:   {}", identity.github_url));
    push_line(&mut out, &format!("  LinkedIn: {}", identity.linkedin_url));
    out
}

pub fn contact_hint(style: &Style) -> String {
    let mut out = String::new();
    push_line(&mut out, &style.section("Contact"));
    push_line(
        &mut out,
        "  folioctl contact --name <NAME> --email <EMAIL> --message <MESSAGE>",
    );
    out
}

pub fn footer(identity: &Identity, year: i32, style: &Style) -> String {
    style.dim(&format!(
        "© {} {} — Built with Next.js + Tailwind. Lighthouse perf: placeholder",
        year, identity.display_name
    ))
}

/// The whole page, top to bottom.
pub fn page(catalog: &Catalog, style: &Style, width: usize, year: i32) -> String {
    let sections = [
        header(&catalog.identity, style),
        hero(&catalog.identity, style, width),
        projects(catalog, style, width),
        chatbot_intro(style),
        skills_map(catalog, &SkillsMap::new(), style),
        about(&catalog.identity, style, width),
        contact_hint(style),
    ];

    let mut out = String::new();
    for section in sections {
        out.push_str(&section);
        push_line(&mut out, &style.dim(THIN_SEPARATOR));
    }
    push_line(&mut out, &footer(&catalog.identity, year, style));
    out
}
