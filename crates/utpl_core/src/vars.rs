//! Variable store with name validation and value escaping.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

/// Store of template variables.
///
/// Names must match `^[\w.-]+$`. Values are stored with every literal `$`
/// escaped, so a substituted value can never form new placeholder syntax.
#[derive(Debug, Clone)]
pub struct VarStore {
    vars: HashMap<String, String>,
    name_pattern: Regex,
}

impl Default for VarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VarStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            // Word characters, dot and hyphen, anchored
            name_pattern: Regex::new(r"^[\w.-]+$").unwrap(),
        }
    }

    /// Create a store from an initial mapping.
    ///
    /// Every name is validated; the first invalid one aborts construction.
    pub fn from_map(vars: HashMap<String, String>) -> TemplateResult<Self> {
        let mut store = Self::new();
        for (name, value) in vars {
            store.insert(&name, value)?;
        }
        Ok(store)
    }

    /// Register a variable, overwriting any prior value for that name.
    pub fn insert(&mut self, name: &str, value: impl ToString) -> TemplateResult<()> {
        if !self.name_pattern.is_match(name) {
            return Err(TemplateError::InvalidName(name.to_string()));
        }
        debug!("Registered variable '{}'", name);
        self.vars.insert(name.to_string(), escape(&value.to_string()));
        Ok(())
    }

    /// Get the stored (escaped) value for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|v| v.as_str())
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// List registered names.
    pub fn names(&self) -> Vec<&str> {
        self.vars.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Prefix every literal `$` with a backslash.
///
/// Backslashes themselves are not escaped; a value that already contains
/// `\$` comes out as `\\$`.
fn escape(value: &str) -> String {
    value.replace('$', "\\$")
}
