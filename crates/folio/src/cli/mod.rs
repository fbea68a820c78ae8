//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## A Session Across Invocations
//!
//! ```text
//! folio login <password>        # opens the session
//! folio set name "Ada"          # edits land in .folio/draft.json
//! folio project add --title X
//! folio status                  # dirty, changed: header, projects
//! folio save                    # development mode only
//! folio logout                  # drops the draft
//! ```
//!
//! Reading (`show`, `status`) and the contact form need no session.
//!
//! ## Selectors
//!
//! Collection entries are picked by id or by position: `folio project edit
//! '#2' --title ...`. Flat lists (languages, frameworks, others) take plain
//! 1-based positions.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch, logging setup, context persistence
//! - `render`: colored messages, document and status rendering
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
