//! Render command - substitute variables into a template.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use tracing::info;

use utpl_core::{load_vars_file, Renderer};

use super::read_template;

#[derive(Args)]
pub struct RenderArgs {
    /// Template file to render (reads stdin when omitted)
    template: Option<PathBuf>,

    /// Variables file (.yaml, .json or .toml)
    #[arg(short = 'f', long)]
    vars_file: Option<PathBuf>,

    /// Set a variable (repeatable; overrides the vars file)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// Render unresolved placeholders as [missing:name]
    #[arg(long)]
    show_missing: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a JSON report with the output and the unresolved names
    #[arg(long)]
    report: bool,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let mut renderer = match &args.vars_file {
        Some(path) => Renderer::from_map(load_vars_file(path)?)?,
        None => Renderer::new(),
    };
    renderer.set_show_missing(args.show_missing);

    for spec in &args.vars {
        let (name, value) = parse_var_spec(spec)?;
        renderer.set(name, value)?;
    }

    let template = read_template(args.template.as_deref())?;

    let content = if args.report {
        let report = renderer.render_report(&template);
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        json
    } else {
        renderer.render(&template)
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &content)?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Split a `--var` spec at the first `=`.
fn parse_var_spec(spec: &str) -> Result<(&str, &str)> {
    spec.split_once('=')
        .ok_or_else(|| anyhow!("Invalid --var '{}': expected NAME=VALUE", spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_var_spec() {
        assert_eq!(parse_var_spec("name=value").unwrap(), ("name", "value"));
        assert_eq!(parse_var_spec("a=b=c").unwrap(), ("a", "b=c"));
        assert_eq!(parse_var_spec("empty=").unwrap(), ("empty", ""));
        assert!(parse_var_spec("no-equals").is_err());
    }

    #[test]
    fn test_execute_renders_to_file() {
        let temp = tempdir().unwrap();
        let template_path = temp.path().join("greeting.tpl");
        let output_path = temp.path().join("greeting.txt");
        fs::write(&template_path, "hello ${who}").unwrap();

        let args = RenderArgs {
            template: Some(template_path),
            vars_file: None,
            vars: vec!["who=world".to_string()],
            show_missing: false,
            output: Some(output_path.clone()),
            report: false,
        };
        execute(args).unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "hello world");
    }

    #[test]
    fn test_execute_var_overrides_vars_file() {
        let temp = tempdir().unwrap();
        let template_path = temp.path().join("t.tpl");
        let vars_path = temp.path().join("vars.yaml");
        let output_path = temp.path().join("out.txt");
        fs::write(&template_path, "${who}").unwrap();
        fs::write(&vars_path, "who: file\n").unwrap();

        let args = RenderArgs {
            template: Some(template_path),
            vars_file: Some(vars_path),
            vars: vec!["who=flag".to_string()],
            show_missing: false,
            output: Some(output_path.clone()),
            report: false,
        };
        execute(args).unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "flag");
    }

    #[test]
    fn test_execute_report() {
        let temp = tempdir().unwrap();
        let template_path = temp.path().join("t.tpl");
        let output_path = temp.path().join("report.json");
        fs::write(&template_path, "${present} ${absent}").unwrap();

        let args = RenderArgs {
            template: Some(template_path),
            vars_file: None,
            vars: vec!["present=yes".to_string()],
            show_missing: true,
            output: Some(output_path.clone()),
            report: true,
        };
        execute(args).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(report["output"], "yes [missing:absent]");
        assert_eq!(report["missing"][0], "absent");
    }

    #[test]
    fn test_execute_rejects_invalid_var_name() {
        let temp = tempdir().unwrap();
        let template_path = temp.path().join("t.tpl");
        fs::write(&template_path, "plain").unwrap();

        let args = RenderArgs {
            template: Some(template_path),
            vars_file: None,
            vars: vec!["bad name=value".to_string()],
            show_missing: false,
            output: None,
            report: false,
        };
        assert!(execute(args).is_err());
    }
}
