//! Variables-file loading.
//!
//! A vars file holds the initial mapping for a renderer. The format is
//! chosen by extension: `.yaml`/`.yml`, `.json` or `.toml`. Nested mappings
//! flatten into dotted names (`app: {name: x}` becomes `app.name`), which is
//! what the `.` in the name grammar is for.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};

/// Load a vars file into a name-to-value mapping.
///
/// Scalars stringify; null values and sequences are rejected. Name
/// validation happens later, when the mapping is handed to the store.
pub fn load_vars_file(path: &Path) -> TemplateResult<HashMap<String, String>> {
    debug!("Loading vars from {:?}", path);
    let content = fs::read_to_string(path)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let document: serde_json::Value = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "json" => serde_json::from_str(&content)?,
        "toml" => toml::from_str(&content)?,
        _ => return Err(TemplateError::UnsupportedFormat(path.to_path_buf())),
    };

    let entries = match document {
        serde_json::Value::Object(entries) => entries,
        _ => return Err(TemplateError::NotAMapping(path.to_path_buf())),
    };

    let mut vars = HashMap::new();
    for (name, value) in &entries {
        flatten_value(name, value, &mut vars)?;
    }

    info!("Loaded {} variables from {:?}", vars.len(), path);
    Ok(vars)
}

/// Flatten one entry into the output map, recursing through nested
/// mappings with dot-joined names.
fn flatten_value(
    name: &str,
    value: &serde_json::Value,
    out: &mut HashMap<String, String>,
) -> TemplateResult<()> {
    match value {
        serde_json::Value::Object(nested) => {
            for (key, inner) in nested {
                let dotted = format!("{}.{}", name, key);
                flatten_value(&dotted, inner, out)?;
            }
        }
        serde_json::Value::String(s) => {
            out.insert(name.to_string(), s.clone());
        }
        serde_json::Value::Number(n) => {
            out.insert(name.to_string(), n.to_string());
        }
        serde_json::Value::Bool(b) => {
            out.insert(name.to_string(), b.to_string());
        }
        // An entry with no value cannot be registered
        serde_json::Value::Null => {
            return Err(TemplateError::InvalidName(name.to_string()));
        }
        serde_json::Value::Array(_) => {
            return Err(TemplateError::UnsupportedValue {
                name: name.to_string(),
                kind: "sequence",
            });
        }
    }
    Ok(())
}
