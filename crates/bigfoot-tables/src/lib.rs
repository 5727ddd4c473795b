//! # bigfoot-tables
//!
//! Table rendering over arbitrary row sources.
//!
//! A [`Translator`] maps every source row to an ordered set of output
//! columns. Each entry either follows an accessor path into the row, computes
//! a value from it, or renders an element with the row as its data item.
//! [`TranslatedRows`] applies a translator lazily while iterating a
//! [`RowSource`], and [`render_table`] draws the result with a static
//! [`TableSpec`].
//!
//! ## Example
//!
//! ```
//! use bigfoot_core::RenderContext;
//! use bigfoot_tables::{TranslatedRows, Translator};
//! use bigfoot_templates::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::with_defaults().unwrap();
//! let ctx = RenderContext::new(&engine);
//! let people = vec![json!({"name": "Ann"})];
//! let translator = Translator::new().accessor("name", "name");
//!
//! let rows = TranslatedRows::new(&people, &translator, &ctx);
//! assert_eq!(rows.len(), 1);
//! let first = rows.iter().next().unwrap().unwrap();
//! assert_eq!(first.get("name").unwrap().to_html(), "Ann");
//! ```

pub mod column;
pub mod rows;
pub mod table;
pub mod translator;

pub use column::{ColumnSpec, TableMeta, TableSpec, verbose_name};
pub use rows::{RowSource, TranslatedRows};
pub use table::render_table;
pub use translator::{Cell, TranslatedRow, Translation, Translator};
