//! Error types shared by every bigfoot crate

use thiserror::Error;

/// Errors raised while composing or rendering elements
///
/// Almost every variant describes a programmer error in how elements were put
/// together, so they carry the offending name and are never retried.
#[derive(Debug, Error)]
pub enum Error {
	/// A component was used in a way it does not support
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),

	/// The named template is not registered with the renderer
	#[error("Template not found: {0}")]
	TemplateNotFound(String),

	/// The template engine failed while rendering
	#[error("Template error in '{template}': {message}")]
	Template {
		/// Template being rendered
		template: String,
		/// Message reported by the engine
		message: String,
	},

	/// The form has no field with this name
	#[error("Could not resolve form field '{field}'.")]
	FieldNotFound {
		/// Requested field name
		field: String,
	},

	/// The field was already rendered for this form
	#[error("A field should only be rendered once: {field}")]
	FieldAlreadyRendered {
		/// Field rendered twice
		field: String,
	},

	/// The tag template is not a single HTML tag
	#[error("Tag must be a valid HTML element, got '{tag}'")]
	InvalidTag {
		/// Offending tag template
		tag: String,
	},

	/// A search was started without any criterion
	#[error("Invalid search criteria: {0}")]
	InvalidSearch(String),

	/// A data-dependent attribute was resolved without a data item
	#[error("Attribute '{attribute}' needs a data item to resolve")]
	Unbound {
		/// Attribute being resolved
		attribute: String,
	},

	/// An accessor path did not match the data item
	#[error(transparent)]
	Accessor(#[from] AccessorError),

	/// A translator entry could not produce a value for its column
	#[error("Could not translate column '{column}': {source}")]
	UnresolvableColumn {
		/// Output column
		column: String,
		/// Underlying failure
		#[source]
		source: Box<Error>,
	},

	/// A row or context value could not be serialized
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Settings could not be parsed
	#[error("Settings error: {0}")]
	Settings(String),

	/// Settings or templates could not be read from disk
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Failures while walking an accessor path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessorError {
	/// A segment named a key or index the item does not have
	#[error("Failed lookup for '{segment}' in accessor '{path}'")]
	Missing {
		/// Full accessor path
		path: String,
		/// Segment that failed
		segment: String,
	},

	/// The path itself is malformed, e.g. an unclosed bracket
	#[error("Invalid accessor path '{0}'")]
	InvalidPath(String),
}

/// Result type used across bigfoot
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// Wraps this error as the cause of a failed table column
	pub fn in_column(self, column: impl Into<String>) -> Self {
		Error::UnresolvableColumn {
			column: column.into(),
			source: Box::new(self),
		}
	}
}
