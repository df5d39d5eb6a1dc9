//! CLI command definitions.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

pub mod render;
pub mod vars;

/// utpl - a microscopic string templating engine
#[derive(Parser)]
#[command(name = "utpl")]
#[command(version, about = "utpl - a microscopic string templating engine")]
#[command(long_about = r#"
utpl substitutes ${name} placeholders in a template with caller-supplied
values. Variables come from --var flags and/or a vars file (YAML, JSON or
TOML); unresolved placeholders render as empty text, or as [missing:name]
with --show-missing.

COMMANDS:
  render  → Render a template from a file or stdin
  vars    → List the placeholders a template references

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with variable substitution
    Render(render::RenderArgs),

    /// List the placeholders a template references
    Vars(vars::VarsArgs),
}

/// Read a template from a file, or from stdin when no path is given.
pub(crate) fn read_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
