//! # bigfoot
//!
//! Composable HTML elements for Tera-rendered pages.
//!
//! Application code builds pages from elements (links, buttons, plain tags,
//! form fields, field sets, forms and tables) that render themselves to HTML.
//! Element attributes may be fixed or resolved per data item, so the same
//! element tree can draw every row of a table.
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `templates` - Tera engine, built-in templates, request context
//! - `forms` - form definitions, widgets and field rendering
//! - `tables` - row translation and table rendering
//! - `elements` - the element kinds (implies the three above)
//!
//! ## Quick Example
//!
//! ```rust
//! use bigfoot::prelude::*;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::with_defaults().unwrap();
//! let people = vec![json!({"name": "Ann", "url": "/people/ann/"})];
//! let translator = Translator::new()
//!     .accessor("name", "name")
//!     .render("profile", Link::new("view", Accessor::new("url")));
//!
//! let page = ElementSet::new()
//!     .element(Element::with_tag("<h1/>").inner("People"))
//!     .element(Table::new(people, translator));
//!
//! let html = page.to_html(&engine).unwrap();
//! assert!(html.starts_with("<h1>People</h1><div>"));
//! ```

pub mod core;
pub mod elements;
pub mod forms;
pub mod tables;
pub mod templates;

pub use bigfoot_core::{Error, Result, Settings};

/// Everything needed to build and render pages
pub mod prelude {
	pub use bigfoot_core::{
		Accessor, Attr, Attrs, Context, ElementKind, Error, RenderContext, Renderable, Result,
		SearchCriteria, Settings, TemplateRenderer,
	};

	#[cfg(feature = "templates")]
	pub use bigfoot_templates::{ContextProcessorRegistry, RequestContext, TemplateEngine};

	#[cfg(feature = "forms")]
	pub use bigfoot_forms::{Field, Widget};

	#[cfg(feature = "tables")]
	pub use bigfoot_tables::{TableMeta, Translator};

	#[cfg(feature = "elements")]
	pub use bigfoot_elements::{
		Button, Element, ElementSet, Form, FormField, FormFieldSet, FormFields, Link, Table,
		TemplateElement, TemplateOptions, form_field_set, form_fields,
	};
}
