//! # CLI Layer
//!
//! One possible UI client for folio. This is the only place that:
//! - Knows about stdout/stderr
//! - Parses arguments
//! - Installs the log subscriber
//! - Formats output for humans
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns the shell arguments into [`Commands`]
//! 2. **Context Setup**: [`initialize`] resolves the site root, config,
//!    session and draft
//! 3. **API Dispatch**: one `FolioApi` call per command
//! 4. **Persistence of the session**: the context is written back after every
//!    command that reached the API
//! 5. **Output**: messages are printed by level; `show` and `status` render
//!    their payloads
//!
//! A command whose messages include an error makes the process exit non-zero,
//! even when the library call itself succeeded (a refused save, a rejected
//! password, an invalid contact form).

use super::render::{print_messages, render_document, render_status};
use super::setup::{
    list_kind, Cli, Commands, ContactArgs, ExperienceAction, ListAction, ProjectAction,
    ServiceAction, SocialAction,
};
use anyhow::{Context, Result};
use clap::Parser;
use folioapp::collection::{CollectionKind, EntryEdit};
use folioapp::commands::CmdResult;
use folioapp::contact::ContactSubmission;
use folioapp::init::{initialize, FolioContext};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIO_LOG";

/// Runs the CLI. Returns whether the command succeeded.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let mut ctx = initialize(&cwd, cli.root.clone())?;

    let json = matches!(
        cli.command,
        Commands::Show { json: true } | Commands::Status { json: true }
    );
    tracing::debug!(command = ?cli.command, "dispatching");
    let result = dispatch(&mut ctx, cli.command)?;
    ctx.persist()?;

    print_result(&result, json)?;
    Ok(!result.has_errors())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch(ctx: &mut FolioContext, command: Commands) -> Result<CmdResult> {
    let kind = list_kind(&command);
    let api = &mut ctx.api;

    let result = match command {
        Commands::Init => api.init()?,
        Commands::Login { password } => api.login(&password)?,
        Commands::Logout => api.logout()?,
        Commands::Show { .. } => api.show()?,
        Commands::Status { .. } => api.status()?,
        Commands::Set { field, value } => api.set_text(field, &value)?,
        Commands::Flag { flag, value } => api.set_flag(flag, value.is_on())?,

        Commands::Project { action } => match action {
            ProjectAction::Add(fields) => api.add_entry(&fields.into())?,
            ProjectAction::Edit { selector, fields } => {
                api.edit_entry(&selector, &EntryEdit::from(fields))?
            }
            ProjectAction::Remove { selector } => {
                api.remove_entry(CollectionKind::Projects, &selector)?
            }
        },
        Commands::Service { action } => match action {
            ServiceAction::Add(fields) => api.add_entry(&fields.into())?,
            ServiceAction::Edit { selector, fields } => {
                api.edit_entry(&selector, &EntryEdit::from(fields))?
            }
            ServiceAction::Remove { selector } => {
                api.remove_entry(CollectionKind::Services, &selector)?
            }
        },
        Commands::Social { action } => match action {
            SocialAction::Add(fields) => api.add_entry(&fields.into())?,
            SocialAction::Edit { selector, fields } => {
                api.edit_entry(&selector, &EntryEdit::from(fields))?
            }
            SocialAction::Remove { selector } => {
                api.remove_entry(CollectionKind::Socials, &selector)?
            }
        },
        Commands::Experience { action } => match action {
            ExperienceAction::Add(fields) => api.add_entry(&fields.into())?,
            ExperienceAction::Edit { selector, fields } => {
                api.edit_entry(&selector, &EntryEdit::from(fields))?
            }
            ExperienceAction::Remove { selector } => {
                api.remove_entry(CollectionKind::Experiences, &selector)?
            }
        },

        Commands::Language { action }
        | Commands::Framework { action }
        | Commands::Other { action } => {
            let kind = kind.context("list command without a list")?;
            match action {
                ListAction::Add { value } => api.add_list_item(kind, value.as_deref())?,
                ListAction::Edit { position, value } => {
                    api.edit_list_item(kind, position, &value)?
                }
                ListAction::Remove { position } => api.remove_list_item(kind, position)?,
            }
        }

        Commands::Save => api.save()?,
        Commands::Discard { yes } => api.discard(yes)?,
        Commands::Contact(args) => handle_contact(ctx, args)?,
    };
    Ok(result)
}

fn handle_contact(ctx: &FolioContext, args: ContactArgs) -> Result<CmdResult> {
    let submission = ContactSubmission {
        name: args.name,
        email: args.email,
        phone: args.phone,
        subject: args.subject,
    };
    let sender = ctx.sender();
    let settings = ctx.config.mail_settings();
    Ok(ctx.api.contact(&sender, submission, &settings)?)
}

fn print_result(result: &CmdResult, json: bool) -> Result<()> {
    if let Some(doc) = &result.document {
        if json {
            println!("{}", serde_json::to_string_pretty(doc)?);
        } else {
            print!("{}", render_document(doc));
        }
    }
    if let Some(status) = &result.status {
        if json {
            println!("{}", serde_json::to_string_pretty(status)?);
        } else {
            print!("{}", render_status(status));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
