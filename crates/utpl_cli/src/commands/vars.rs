//! Vars command - list the placeholders a template references.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use utpl_core::Renderer;

use super::read_template;

#[derive(Args)]
pub struct VarsArgs {
    /// Template file to inspect (reads stdin when omitted)
    template: Option<PathBuf>,
}

pub fn execute(args: VarsArgs) -> Result<()> {
    let template = read_template(args.template.as_deref())?;

    let renderer = Renderer::new();
    for name in renderer.placeholders(&template) {
        println!("{}", name);
    }

    Ok(())
}
