//! Static column descriptors

use crate::translator::Translator;
use bigfoot_core::{Attrs, Settings};
use serde::{Deserialize, Serialize};

/// One table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
	/// Key into translated rows
	pub name: String,
	/// Header text
	pub header: String,
	/// Whether the header is drawn as orderable
	pub orderable: bool,
}

impl ColumnSpec {
	/// A non-orderable column with a header derived from `name`
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_tables::ColumnSpec;
	///
	/// let column = ColumnSpec::new("created_at");
	/// assert_eq!(column.header, "Created at");
	/// assert!(!column.orderable);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			header: verbose_name(&name),
			name,
			orderable: false,
		}
	}
}

/// Table-wide options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableMeta {
	/// Attributes of the `<table>` tag
	pub attrs: Attrs,
	/// Template drawing the table, `{prefix}/tables/table.html` when unset
	pub template_name: Option<String>,
	/// Text shown when there are no rows
	pub empty_text: Option<String>,
}

/// Columns and options of a table, built once per translator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSpec {
	columns: Vec<ColumnSpec>,
	meta: TableMeta,
}

impl TableSpec {
	/// One column per translator key, in translator order
	///
	/// `attrs` are merged over `meta.attrs`.
	pub fn from_translator(translator: &Translator, mut meta: TableMeta, attrs: &Attrs) -> Self {
		meta.attrs.extend(attrs);
		Self {
			columns: translator.keys().map(ColumnSpec::new).collect(),
			meta,
		}
	}

	/// Columns in order
	pub fn columns(&self) -> &[ColumnSpec] {
		&self.columns
	}

	/// Table-wide options
	pub fn meta(&self) -> &TableMeta {
		&self.meta
	}

	/// Attributes of the `<table>` tag
	pub fn attrs(&self) -> &Attrs {
		&self.meta.attrs
	}

	/// Template used by [`crate::render_table`]
	pub fn template_name(&self, settings: &Settings) -> String {
		self.meta
			.template_name
			.clone()
			.unwrap_or_else(|| settings.default_template("tables/table"))
	}
}

/// Turns `created_at` into `Created at`
pub fn verbose_name(key: &str) -> String {
	let spaced = key.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
