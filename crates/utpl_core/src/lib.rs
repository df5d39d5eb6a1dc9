//! # utpl_core
//!
//! A microscopic string-interpolation engine.
//!
//! Templates are plain strings containing `${name}` placeholders. Variables
//! are registered up front (names validated, values escaped) and rendering
//! substitutes every recognized placeholder in a single pass:
//!
//! - a registered name substitutes its stored value, verbatim;
//! - an unregistered name substitutes `[missing:name]` when the renderer's
//!   `show_missing` flag is set, the empty string otherwise;
//! - anything that is not a well-formed placeholder passes through.
//!
//! ## Example
//!
//! ```rust
//! use utpl_core::Renderer;
//!
//! let mut renderer = Renderer::new();
//! renderer.set("name", "world").unwrap();
//!
//! assert_eq!(renderer.render("hello ${name}"), "hello world");
//! assert_eq!(renderer.render("hello ${missing}"), "hello ");
//! ```

pub mod error;
pub mod loader;
pub mod renderer;
pub mod vars;

pub use error::{TemplateError, TemplateResult};
pub use loader::load_vars_file;
pub use renderer::{RenderReport, Renderer};
pub use vars::VarStore;
