//! Command handlers
//!
//! Each handler renders into a writer; `main` passes stdout.

use anyhow::{Context as _, Result};
use chrono::Datelike;
use folio_shared::catalog::Catalog;
use folio_shared::chat::ChatSession;
use folio_shared::config::FolioConfig;
use folio_shared::contact::{
    ContactFields, ContactForm, SimulatedTransport, SubmissionStatus, Transport,
};
use folio_shared::skills::SkillsMap;
use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::cli::Commands;
use crate::output::Style;
use crate::render;
use crate::repl;

/// Everything a command needs, built once at startup.
pub struct AppContext {
    pub catalog: Catalog,
    pub config: FolioConfig,
    pub style: Style,
}

impl AppContext {
    pub fn new(config: FolioConfig, style: Style) -> Self {
        let catalog = Catalog::builtin().with_profile_overrides(&config.profile);
        Self {
            catalog,
            config,
            style,
        }
    }

    fn width(&self) -> usize {
        self.config.display.width
    }
}

/// Dispatch a parsed command.
pub async fn run<R: BufRead, W: Write>(
    ctx: &AppContext,
    command: Option<Commands>,
    input: R,
    out: &mut W,
) -> Result<()> {
    match command {
        None => page(ctx, out),
        Some(Commands::Projects { json }) => projects(ctx, json, out),
        Some(Commands::Project { id }) => project(ctx, &id, out),
        Some(Commands::Ask { json, question }) => ask(ctx, &question.join(" "), json, out),
        Some(Commands::Chat) => {
            repl::run_chat(&ctx.catalog, &ctx.style, input, out).context("chat session")?;
            Ok(())
        }
        Some(Commands::Skills { skill }) => skills(ctx, skill.as_deref(), out),
        Some(Commands::Console) => {
            repl::run_console(&ctx.style, input, out).context("console session")?;
            Ok(())
        }
        Some(Commands::Contact {
            name,
            email,
            message,
        }) => {
            let transport = SimulatedTransport::new(ctx.config.contact.delay());
            let fields = ContactFields::new(name, email, message);
            let status = contact(ctx, fields, &transport, out).await?;
            info!(status = ?status, "contact command finished");
            Ok(())
        }
        Some(Commands::About) => about(ctx, out),
    }
}

pub fn page<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let year = chrono::Local::now().year();
    write!(out, "{}", render::page(&ctx.catalog, &ctx.style, ctx.width(), year))?;
    Ok(())
}

pub fn projects<W: Write>(ctx: &AppContext, json: bool, out: &mut W) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(&ctx.catalog.projects)?;
        writeln!(out, "{}", text)?;
    } else {
        write!(out, "{}", render::projects(&ctx.catalog, &ctx.style, ctx.width()))?;
    }
    Ok(())
}

pub fn project<W: Write>(ctx: &AppContext, id: &str, out: &mut W) -> Result<()> {
    let project = ctx.catalog.project(id)?;
    info!(project = %project.id, "opening project detail");
    write!(out, "{}", render::project_detail(project, &ctx.style, ctx.width()))?;
    Ok(())
}

/// One-shot chatbot exchange. The session ends with the command.
pub fn ask<W: Write>(ctx: &AppContext, question: &str, json: bool, out: &mut W) -> Result<()> {
    let mut session = ChatSession::new(&ctx.catalog);
    session.send(question);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(session.transcript())?)?;
    } else {
        write!(out, "{}", render::transcript(session.transcript(), &ctx.style))?;
    }
    Ok(())
}

pub fn skills<W: Write>(ctx: &AppContext, skill: Option<&str>, out: &mut W) -> Result<()> {
    let mut map = SkillsMap::new();
    match skill {
        None => {}
        Some(label) if label.trim().is_empty() => {
            warn!("blank skill name, showing the map without a selection");
            writeln!(
                out,
                "{}",
                ctx.style.warning("Skill name is blank; nothing selected.")
            )?;
        }
        Some(label) => match ctx.catalog.skill(label) {
            Some(canonical) => map.select(canonical),
            None => {
                warn!(skill = label, "skill not in the skills list");
                writeln!(
                    out,
                    "{}",
                    ctx.style
                        .warning(&format!("'{}' is not in the skills list; matching anyway.", label))
                )?;
                map.select(label.trim());
            }
        },
    }
    write!(out, "{}", render::skills_map(&ctx.catalog, &map, &ctx.style))?;
    Ok(())
}

/// Submit the contact form, printing each status transition as it happens.
pub async fn contact<T: Transport + ?Sized, W: Write>(
    ctx: &AppContext,
    fields: ContactFields,
    transport: &T,
    out: &mut W,
) -> Result<SubmissionStatus> {
    let style = ctx.style;
    let out = RefCell::new(out);
    // First failed status write, reported once the submission settles
    let write_error: Cell<Option<io::Error>> = Cell::new(None);

    let form = ContactForm::new().with_observer(|status| {
        let line = match status {
            SubmissionStatus::Sending => style.dim(status.message()),
            SubmissionStatus::Sent => style.success(status.message()),
            SubmissionStatus::Failed => style.error(status.message()),
        };
        let mut out = out.borrow_mut();
        if let Err(e) = writeln!(out, "{}", line).and_then(|()| out.flush()) {
            let first = write_error.take().unwrap_or(e);
            write_error.set(Some(first));
        }
    });
    form.fill(fields);
    let result = form.submit(transport).await;
    drop(form);

    let status = result.context("contact form")?;
    if let Some(e) = write_error.take() {
        return Err(e).context("writing contact status");
    }
    Ok(status)
}

pub fn about<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    write!(out, "{}", render::about(&ctx.catalog.identity, &ctx.style, ctx.width()))?;
    Ok(())
}
