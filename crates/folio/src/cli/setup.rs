use clap::{Args, Parser, Subcommand, ValueEnum};
use folioapp::collection::{
    EntryEdit, ExperiencePatch, ListKind, ProjectPatch, ServicePatch, SocialPatch,
};
use folioapp::model::{Flag, TextField};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version, disable_help_subcommand = true)]
#[command(about = "Edit the content of a JSON-backed portfolio site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write starter content if the site has none
    #[command(display_order = 1)]
    Init,

    /// Open an editing session
    #[command(display_order = 2)]
    Login { password: String },

    /// Close the session, dropping unsaved changes
    #[command(display_order = 3)]
    Logout,

    /// Show the working document
    #[command(alias = "view", display_order = 10)]
    Show {
        /// Print the raw JSON document
        #[arg(long)]
        json: bool,
    },

    /// Show the session and unsaved changes
    #[command(alias = "st", display_order = 11)]
    Status {
        #[arg(long)]
        json: bool,
    },

    /// Set a text field (name, logo, tagline-one, about, ...)
    #[command(display_order = 20)]
    Set { field: TextField, value: String },

    /// Turn a feature flag on or off
    #[command(display_order = 21)]
    Flag { flag: Flag, value: Switch },

    /// Manage projects
    #[command(display_order = 22)]
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage services
    #[command(display_order = 23)]
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Manage social links
    #[command(display_order = 24)]
    Social {
        #[command(subcommand)]
        action: SocialAction,
    },

    /// Manage resume experiences
    #[command(display_order = 25)]
    Experience {
        #[command(subcommand)]
        action: ExperienceAction,
    },

    /// Manage the languages list
    #[command(display_order = 26)]
    Language {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Manage the frameworks list
    #[command(display_order = 27)]
    Framework {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Manage the "others" list
    #[command(display_order = 28)]
    Other {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Write the working document to the content file
    #[command(display_order = 30)]
    Save,

    /// Drop all unsaved changes
    #[command(display_order = 31)]
    Discard {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Send a message through the contact form
    #[command(display_order = 40)]
    Contact(ContactArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        self == Switch::On
    }
}

#[derive(Args, Debug, Default)]
pub struct ProjectFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Image URL or data URI
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ServiceFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct SocialFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ExperienceFields {
    #[arg(long)]
    pub dates: Option<String>,
    /// Employment type, e.g. "Full Time"
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    /// Bullet point (repeat for several; replaces all bullets)
    #[arg(long = "bullet", conflicts_with = "clear_bullets")]
    pub bullets: Vec<String>,
    /// Remove all bullet points
    #[arg(long)]
    pub clear_bullets: bool,
}

impl From<ProjectFields> for EntryEdit {
    fn from(f: ProjectFields) -> Self {
        EntryEdit::Project(ProjectPatch {
            title: f.title,
            description: f.description,
            image_src: f.image,
            url: f.url,
        })
    }
}

impl From<ServiceFields> for EntryEdit {
    fn from(f: ServiceFields) -> Self {
        EntryEdit::Service(ServicePatch {
            title: f.title,
            description: f.description,
        })
    }
}

impl From<SocialFields> for EntryEdit {
    fn from(f: SocialFields) -> Self {
        EntryEdit::Social(SocialPatch {
            title: f.title,
            link: f.link,
        })
    }
}

impl From<ExperienceFields> for EntryEdit {
    fn from(f: ExperienceFields) -> Self {
        EntryEdit::Experience(ExperiencePatch {
            dates: f.dates,
            kind: f.kind,
            position: f.position,
            bullets: if f.clear_bullets {
                Some(Vec::new())
            } else if f.bullets.is_empty() {
                None
            } else {
                Some(f.bullets)
            },
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Add a project (unset fields use the template)
    Add(ProjectFields),
    /// Edit a project by id or #position
    Edit {
        selector: String,
        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Remove a project by id or #position
    #[command(alias = "rm")]
    Remove { selector: String },
}

#[derive(Subcommand, Debug)]
pub enum ServiceAction {
    Add(ServiceFields),
    Edit {
        selector: String,
        #[command(flatten)]
        fields: ServiceFields,
    },
    #[command(alias = "rm")]
    Remove { selector: String },
}

#[derive(Subcommand, Debug)]
pub enum SocialAction {
    Add(SocialFields),
    Edit {
        selector: String,
        #[command(flatten)]
        fields: SocialFields,
    },
    #[command(alias = "rm")]
    Remove { selector: String },
}

#[derive(Subcommand, Debug)]
pub enum ExperienceAction {
    Add(ExperienceFields),
    Edit {
        selector: String,
        #[command(flatten)]
        fields: ExperienceFields,
    },
    #[command(alias = "rm")]
    Remove { selector: String },
}

/// Actions on a flat list. Positions start at 1.
#[derive(Subcommand, Debug)]
pub enum ListAction {
    /// Append an item ("Added" when no value is given)
    Add { value: Option<String> },
    Edit { position: usize, value: String },
    #[command(alias = "rm")]
    Remove { position: usize },
}

pub fn list_kind(command: &Commands) -> Option<ListKind> {
    match command {
        Commands::Language { .. } => Some(ListKind::Languages),
        Commands::Framework { .. } => Some(ListKind::Frameworks),
        Commands::Other { .. } => Some(ListKind::Others),
        _ => None,
    }
}

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long)]
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_field() {
        let cli = Cli::parse_from(["folio", "set", "tagline-two", "a maker"]);
        match cli.command {
            Commands::Set { field, value } => {
                assert_eq!(field, TextField::TaglineTwo);
                assert_eq!(value, "a maker");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_field_fails() {
        assert!(Cli::try_parse_from(["folio", "set", "nickname", "x"]).is_err());
    }

    #[test]
    fn test_parse_flag() {
        let cli = Cli::parse_from(["folio", "flag", "dark-mode", "on"]);
        assert!(matches!(
            cli.command,
            Commands::Flag {
                flag: Flag::DarkMode,
                value: Switch::On
            }
        ));
    }

    #[test]
    fn test_parse_experience_bullets() {
        let cli = Cli::parse_from([
            "folio",
            "experience",
            "edit",
            "#1",
            "--bullet",
            "one",
            "--bullet",
            "two",
            "--type",
            "Contract",
        ]);
        let Commands::Experience {
            action: ExperienceAction::Edit { selector, fields },
        } = cli.command
        else {
            panic!("expected experience edit");
        };
        assert_eq!(selector, "#1");
        match EntryEdit::from(fields) {
            EntryEdit::Experience(patch) => {
                assert_eq!(patch.bullets, Some(vec!["one".into(), "two".into()]));
                assert_eq!(patch.kind.as_deref(), Some("Contract"));
                assert!(patch.position.is_none());
            }
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn test_parse_clear_bullets() {
        let cli = Cli::parse_from(["folio", "experience", "edit", "e1", "--clear-bullets"]);
        let Commands::Experience {
            action: ExperienceAction::Edit { fields, .. },
        } = cli.command
        else {
            panic!("expected experience edit");
        };
        match EntryEdit::from(fields) {
            EntryEdit::Experience(patch) => assert_eq!(patch.bullets, Some(Vec::new())),
            other => panic!("unexpected edit: {:?}", other),
        }

        let cli = Cli::parse_from(["folio", "experience", "edit", "e1", "--dates", "2024"]);
        let Commands::Experience {
            action: ExperienceAction::Edit { fields, .. },
        } = cli.command
        else {
            panic!("expected experience edit");
        };
        match EntryEdit::from(fields) {
            EntryEdit::Experience(patch) => assert!(patch.bullets.is_none()),
            other => panic!("unexpected edit: {:?}", other),
        }

        assert!(Cli::try_parse_from([
            "folio",
            "experience",
            "edit",
            "e1",
            "--bullet",
            "x",
            "--clear-bullets",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_list_commands() {
        let cli = Cli::parse_from(["folio", "framework", "add"]);
        assert_eq!(list_kind(&cli.command), Some(ListKind::Frameworks));
        assert!(matches!(
            cli.command,
            Commands::Framework {
                action: ListAction::Add { value: None }
            }
        ));

        let cli = Cli::parse_from(["folio", "--root", "/site", "language", "rm", "2"]);
        assert_eq!(cli.root, Some(PathBuf::from("/site")));
        assert!(matches!(
            cli.command,
            Commands::Language {
                action: ListAction::Remove { position: 2 }
            }
        ));
    }
}
