//! # Folio CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this
//! file only invokes `cli::run()` and turns its outcome into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/folioapp/`: the UI-agnostic library (content model, workflow,
//!   persistence, session gate, contact form)
//! - `crates/folio/`: this CLI, depending on `folioapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/folio/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - dispatch + session persistence (commands.rs)             │
//! │  - terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/folioapp/src/api.rs)                     │
//! │  - Session gate, selector parsing, dispatch                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands + Workflow (crates/folioapp/src/)                 │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to the code, command layer first.
//! - **CLI parsing and rendering**: unit tests in `setup.rs` and `render.rs`.
//! - **End to end**: `tests/` runs the real binary against a temporary site.

mod cli;

fn main() {
    match cli::run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
