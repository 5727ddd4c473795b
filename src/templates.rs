//! Tera engine, built-in element templates and request context.
//!
//! # Examples
//!
//! ```rust
//! use bigfoot::core::TemplateRenderer;
//! use bigfoot::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::with_defaults().unwrap();
//! assert!(engine.has_template("bigfoot/formfield.html"));
//! ```

#[cfg(feature = "templates")]
pub use bigfoot_templates::*;
