//! Library settings
//!
//! Settings come from a TOML document (or defaults) and can be overridden by
//! `BIGFOOT_*` environment variables.
//!
//! ```toml
//! debug = false
//! fail_silently = false
//! template_dirs = ["templates"]
//! template_prefix = "bigfoot"
//! static_url = "/static/"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of every environment override
pub const ENV_PREFIX: &str = "BIGFOOT_";

/// Rendering settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Exposes `DEBUG` to templates through the debug context processor
	pub debug: bool,

	/// Log instead of failing on missing or doubly rendered form fields
	pub fail_silently: bool,

	/// Directories searched for `*.html` templates, first match wins
	pub template_dirs: Vec<PathBuf>,

	/// Directory prefix of the default element templates
	pub template_prefix: String,

	/// Base URL for static files
	pub static_url: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			debug: false,
			fail_silently: false,
			template_dirs: Vec::new(),
			template_prefix: "bigfoot".to_string(),
			static_url: "/static/".to_string(),
		}
	}
}

impl Settings {
	/// Parses settings from TOML, missing keys taking their defaults
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_core::Settings;
	///
	/// let settings = Settings::from_toml_str("fail_silently = true").unwrap();
	/// assert!(settings.fail_silently);
	/// assert_eq!(settings.template_prefix, "bigfoot");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| Error::Settings(e.to_string()))
	}

	/// Reads settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading bigfoot settings");
		Self::from_toml_str(&source)
	}

	/// Applies overrides from the process environment
	pub fn with_env_overrides(self) -> Result<Self> {
		self.with_overrides(|key| std::env::var(key).ok())
	}

	/// Applies overrides looked up through `lookup`
	///
	/// `lookup` receives full variable names such as `BIGFOOT_FAIL_SILENTLY`.
	/// `BIGFOOT_TEMPLATE_DIRS` is split with the platform path separator.
	pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

		if let Some(value) = var("DEBUG") {
			self.debug = parse_bool("DEBUG", &value)?;
		}
		if let Some(value) = var("FAIL_SILENTLY") {
			self.fail_silently = parse_bool("FAIL_SILENTLY", &value)?;
		}
		if let Some(value) = var("TEMPLATE_DIRS") {
			self.template_dirs = std::env::split_paths(&value).collect();
		}
		if let Some(value) = var("TEMPLATE_PREFIX") {
			self.template_prefix = value;
		}
		if let Some(value) = var("STATIC_URL") {
			self.static_url = value;
		}
		Ok(self)
	}

	/// Default template name for an element kind stem, e.g. `bigfoot/form.html`
	pub fn default_template(&self, stem: &str) -> String {
		format!("{}/{}.html", self.template_prefix, stem)
	}
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" | "" => Ok(false),
		other => Err(Error::Settings(format!(
			"{}{} must be a boolean, got '{}'",
			ENV_PREFIX, name, other
		))),
	}
}
