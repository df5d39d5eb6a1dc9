//! Template rendering.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::TemplateResult;
use crate::vars::VarStore;

/// Outcome of a substitution pass.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    /// The fully substituted text.
    pub output: String,
    /// Distinct names of unresolved placeholders, in first-appearance order.
    pub missing: Vec<String>,
}

/// Renderer for `${name}` placeholder templates.
///
/// Owns the variable store and the missing-variable policy. Rendering is a
/// read-only pass; registration borrows the renderer mutably, so concurrent
/// readers are safe whenever the borrow checker admits them.
#[derive(Debug, Clone)]
pub struct Renderer {
    store: VarStore,
    show_missing: bool,
    placeholder_pattern: Regex,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with no variables.
    pub fn new() -> Self {
        Self {
            store: VarStore::new(),
            show_missing: false,
            // Match ${name} where name follows the store's name grammar
            placeholder_pattern: Regex::new(r"\$\{([\w.-]+)\}").unwrap(),
        }
    }

    /// Create a renderer pre-populated from a mapping.
    ///
    /// Fails on the first name that does not match the name grammar;
    /// construction does not partially succeed.
    pub fn from_map(vars: HashMap<String, String>) -> TemplateResult<Self> {
        Ok(Self {
            store: VarStore::from_map(vars)?,
            ..Self::new()
        })
    }

    /// Register a variable, overwriting any prior value for that name.
    pub fn set(&mut self, name: &str, value: impl ToString) -> TemplateResult<&mut Self> {
        self.store.insert(name, value)?;
        Ok(self)
    }

    /// Control how unresolved placeholders render: `[missing:name]` when
    /// set, the empty string otherwise (the default).
    pub fn set_show_missing(&mut self, show_missing: bool) -> &mut Self {
        self.show_missing = show_missing;
        self
    }

    pub fn show_missing(&self) -> bool {
        self.show_missing
    }

    /// The underlying variable store.
    pub fn vars(&self) -> &VarStore {
        &self.store
    }

    /// Render a template, substituting every `${name}` placeholder.
    ///
    /// Stored values are substituted verbatim; unresolved placeholders
    /// follow the missing-variable policy. Text outside placeholders,
    /// including malformed syntax such as an unmatched `${`, passes through
    /// unchanged. Never fails.
    pub fn render(&self, template: &str) -> String {
        let mut missing = Vec::new();
        self.substitute(template, &mut missing)
    }

    /// Render a template and report which placeholders went unresolved.
    pub fn render_report(&self, template: &str) -> RenderReport {
        let mut missing = Vec::new();
        let output = self.substitute(template, &mut missing);
        RenderReport { output, missing }
    }

    /// List the distinct placeholder names a template references,
    /// in first-appearance order, without rendering.
    pub fn placeholders(&self, template: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in self.placeholder_pattern.captures_iter(template) {
            let name = &caps[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    fn substitute(&self, template: &str, missing: &mut Vec<String>) -> String {
        self.placeholder_pattern
            .replace_all(template, |caps: &regex::Captures| {
                let name = &caps[1];
                match self.store.get(name) {
                    Some(value) => value.to_string(),
                    None => {
                        debug!("No value for placeholder '{}'", name);
                        if !missing.iter().any(|n| n == name) {
                            missing.push(name.to_string());
                        }
                        if self.show_missing {
                            format!("[missing:{}]", name)
                        } else {
                            String::new()
                        }
                    }
                }
            })
            .to_string()
    }
}
