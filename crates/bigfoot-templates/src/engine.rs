//! Tera-backed template engine
//!
//! Templates are looked up in three layers:
//!
//! 1. `*.html` files under each configured template directory, earlier
//!    directories shadowing later ones
//! 2. templates registered at runtime with [`TemplateEngine::add_template`]
//! 3. the built-in element templates, registered under the configured prefix
//!    for any name the first two layers did not provide

use crate::filters;
use bigfoot_core::{Context, Error, RenderContext, Result, Settings, TemplateRenderer};
use std::error::Error as _;
use tera::Tera;

/// Built-in templates keyed by stem
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
	(
		"templateelement",
		include_str!("../templates/bigfoot/templateelement.html"),
	),
	("elementset", include_str!("../templates/bigfoot/elementset.html")),
	(
		"formfieldset",
		include_str!("../templates/bigfoot/formfieldset.html"),
	),
	("form", include_str!("../templates/bigfoot/form.html")),
	("formfield", include_str!("../templates/bigfoot/formfield.html")),
	("table", include_str!("../templates/bigfoot/table.html")),
	("tables/table", include_str!("../templates/bigfoot/tables/table.html")),
];

/// Template engine used to render elements
pub struct TemplateEngine {
	tera: Tera,
	settings: Settings,
}

impl TemplateEngine {
	/// Builds an engine from settings, loading the configured directories
	///
	/// Directories that do not exist are skipped with a warning.
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_core::{Settings, TemplateRenderer};
	/// use bigfoot_templates::TemplateEngine;
	///
	/// let engine = TemplateEngine::new(Settings::default()).unwrap();
	/// assert!(engine.has_template("bigfoot/form.html"));
	/// ```
	pub fn new(settings: Settings) -> Result<Self> {
		let mut tera = Tera::default();

		for dir in &settings.template_dirs {
			if !dir.is_dir() {
				tracing::warn!(dir = %dir.display(), "template directory does not exist");
				continue;
			}
			let pattern = format!("{}/**/*.html", dir.display());
			let loaded = Tera::new(&pattern).map_err(|e| engine_error(&pattern, &e))?;
			tera.extend(&loaded)
				.map_err(|e| engine_error(&pattern, &e))?;
			tracing::debug!(dir = %dir.display(), "loaded template directory");
		}

		tera.register_filter("flatatt", filters::flatatt);

		let mut engine = Self { tera, settings };
		engine.register_builtins()?;
		Ok(engine)
	}

	/// Engine with default settings
	pub fn with_defaults() -> Result<Self> {
		Self::new(Settings::default())
	}

	fn register_builtins(&mut self) -> Result<()> {
		for (stem, source) in BUILTIN_TEMPLATES {
			let name = self.settings.default_template(stem);
			if !self.has_template(&name) {
				self.tera
					.add_raw_template(&name, source.trim_end())
					.map_err(|e| engine_error(&name, &e))?;
			}
		}
		Ok(())
	}

	/// Registers or replaces a template from source
	pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
		self.tera
			.add_raw_template(name, source)
			.map_err(|e| engine_error(name, &e))
	}

	/// A render context bound to this engine
	pub fn context(&self) -> RenderContext<'_> {
		RenderContext::new(self)
	}

	/// Names of every registered template
	pub fn template_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self
			.tera
			.get_template_names()
			.map(str::to_string)
			.collect();
		names.sort();
		names
	}
}

impl TemplateRenderer for TemplateEngine {
	fn render_to_string(&self, template_name: &str, context: &Context) -> Result<String> {
		if !self.has_template(template_name) {
			return Err(Error::TemplateNotFound(template_name.to_string()));
		}
		let tera_context =
			tera::Context::from_serialize(context).map_err(|e| engine_error(template_name, &e))?;
		tracing::debug!(template = template_name, "rendering template");
		self.tera
			.render(template_name, &tera_context)
			.map_err(|e| engine_error(template_name, &e))
	}

	fn has_template(&self, template_name: &str) -> bool {
		self.tera
			.get_template_names()
			.any(|name| name == template_name)
	}

	fn settings(&self) -> &Settings {
		&self.settings
	}
}

/// Flattens a Tera error and its causes into one message
fn engine_error(template: &str, error: &tera::Error) -> Error {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	Error::Template {
		template: template.to_string(),
		message,
	}
}
