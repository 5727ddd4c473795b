//! # bigfoot-templates
//!
//! Template engine for bigfoot elements using Tera.
//!
//! ## Features
//!
//! - Built-in templates for every template-backed element
//!   (`bigfoot/form.html`, `bigfoot/formfield.html`, `bigfoot/tables/table.html`, ...)
//! - Project template directories that shadow the built-ins
//! - Request context with context processors (`DEBUG`, `STATIC_URL`, ...)
//! - A `flatatt` filter for attribute objects
//!
//! ## Example
//!
//! ```rust
//! use bigfoot_core::{Context, TemplateRenderer};
//! use bigfoot_templates::TemplateEngine;
//!
//! let mut engine = TemplateEngine::with_defaults().unwrap();
//! engine.add_template("hello.html", "Hello {{ name }}!").unwrap();
//!
//! let mut context = Context::new();
//! context.insert("name".to_string(), "World".into());
//!
//! let result = engine.render_to_string("hello.html", &context).unwrap();
//! assert_eq!(result, "Hello World!");
//! ```

pub mod context;
pub mod engine;
pub mod filters;

pub use context::{
	ContextProcessor, ContextProcessorRegistry, RequestContext, debug_context_processor,
	static_context_processor,
};
pub use engine::TemplateEngine;
