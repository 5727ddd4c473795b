//! # bigfoot-core
//!
//! Building blocks shared by all bigfoot crates:
//!
//! - [`Attr`]: element attributes that are fixed or resolved per data item
//! - [`Accessor`]: dotted/bracketed paths into `serde_json::Value` rows
//! - [`Renderable`]: the render contract, element kinds and `find`
//! - [`TemplateRenderer`]: the seam to the template engine
//! - [`Settings`]: TOML and environment configuration
//! - [`html`]: escaping and attribute lists
//!
//! ## Example
//!
//! ```
//! use bigfoot_core::{Accessor, Attr};
//! use serde_json::json;
//!
//! let row = json!({"user": {"name": "Ann"}});
//! let label: Attr<String> = Attr::from(Accessor::new("user.name"));
//! assert_eq!(label.resolve("label", Some(&row)).unwrap(), "Ann");
//! ```

#![warn(missing_docs)]

pub mod accessor;
pub mod error;
pub mod html;
pub mod render;
pub mod resolve;
pub mod settings;

pub use accessor::Accessor;
pub use error::{AccessorError, Error, Result};
pub use html::Attrs;
pub use render::{
	Context, ElementKind, RenderContext, Renderable, SearchCriteria, TemplateRenderer,
};
pub use resolve::{Attr, AttrValue};
pub use settings::Settings;
