//! Translating source rows into output columns

use bigfoot_core::html::{escape, value_to_text};
use bigfoot_core::{Accessor, RenderContext, Renderable, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Computes a column value from a row
pub type ComputeFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// How one output column is obtained from a row
pub enum Translation {
	/// Follow a path into the row
	Accessor(Accessor),
	/// Call a closure with the row
	Compute(ComputeFn),
	/// Render an element with the row as its data item
	Render(Box<dyn Renderable>),
}

impl fmt::Debug for Translation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Accessor(accessor) => f.debug_tuple("Accessor").field(accessor).finish(),
			Self::Compute(_) => f.write_str("Compute(<fn>)"),
			Self::Render(element) => f.debug_tuple("Render").field(&element.kind()).finish(),
		}
	}
}

/// One translated value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
	/// Plain data, escaped when drawn
	Value(Value),
	/// Markup produced by an element, drawn as is
	Markup(String),
}

impl Cell {
	/// Markup for a table cell
	pub fn to_html(&self) -> String {
		match self {
			Self::Value(value) => escape(&value_to_text(value)),
			Self::Markup(markup) => markup.clone(),
		}
	}

	/// The cell as a JSON value, markup becoming a string
	pub fn to_value(&self) -> Value {
		match self {
			Self::Value(value) => value.clone(),
			Self::Markup(markup) => Value::String(markup.clone()),
		}
	}
}

impl Serialize for Cell {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Value(value) => value.serialize(serializer),
			Self::Markup(markup) => serializer.serialize_str(markup),
		}
	}
}

/// Output columns of one row, in translator order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatedRow {
	cells: Vec<(String, Cell)>,
}

impl TranslatedRow {
	/// The cell for `key`
	pub fn get(&self, key: &str) -> Option<&Cell> {
		self.cells.iter().find(|(k, _)| k == key).map(|(_, cell)| cell)
	}

	/// Output keys in order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.cells.iter().map(|(key, _)| key.as_str())
	}

	/// `(key, cell)` pairs in order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
		self.cells.iter().map(|(key, cell)| (key.as_str(), cell))
	}

	/// Number of columns
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Whether the row has no columns
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// The row as a JSON object
	pub fn to_value(&self) -> Value {
		Value::Object(
			self.cells
				.iter()
				.map(|(key, cell)| (key.clone(), cell.to_value()))
				.collect(),
		)
	}
}

impl Serialize for TranslatedRow {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.cells.len()))?;
		for (key, cell) in &self.cells {
			map.serialize_entry(key, cell)?;
		}
		map.end()
	}
}

/// Ordered mapping from output key to [`Translation`]
///
/// # Examples
///
/// ```
/// use bigfoot_tables::Translator;
/// use serde_json::json;
///
/// let translator = Translator::new()
///     .accessor("name", "name")
///     .accessor("city", "address.city")
///     .compute("initial", |row| json!(row["name"].as_str().unwrap_or("").chars().next()));
/// assert_eq!(translator.keys().collect::<Vec<_>>(), vec!["name", "city", "initial"]);
/// ```
#[derive(Debug, Default)]
pub struct Translator {
	entries: Vec<(String, Translation)>,
}

impl Translator {
	/// Creates an empty translator
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an entry, replacing an existing entry with the same key in place
	pub fn entry(mut self, key: impl Into<String>, translation: Translation) -> Self {
		let key = key.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some(slot) => slot.1 = translation,
			None => self.entries.push((key, translation)),
		}
		self
	}

	/// Adds an accessor entry
	pub fn accessor(self, key: impl Into<String>, path: impl Into<Accessor>) -> Self {
		self.entry(key, Translation::Accessor(path.into()))
	}

	/// Adds a computed entry
	pub fn compute<F>(self, key: impl Into<String>, f: F) -> Self
	where
		F: Fn(&Value) -> Value + Send + Sync + 'static,
	{
		self.entry(key, Translation::Compute(Arc::new(f)))
	}

	/// Adds an element rendered once per row
	pub fn render(self, key: impl Into<String>, element: impl Renderable) -> Self {
		self.entry(key, Translation::Render(Box::new(element)))
	}

	/// Output keys in order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(key, _)| key.as_str())
	}

	/// `(key, translation)` pairs in order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Translation)> {
		self.entries.iter().map(|(key, t)| (key.as_str(), t))
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether there are no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Translates one row
	///
	/// Element entries are rendered with `row` as the data item and the extra
	/// variables of `ctx`. A failing entry fails the whole row with
	/// [`bigfoot_core::Error::UnresolvableColumn`].
	pub fn translate(&self, row: &Value, ctx: &RenderContext<'_>) -> Result<TranslatedRow> {
		let mut cells = Vec::with_capacity(self.entries.len());
		for (key, translation) in &self.entries {
			let cell = match translation {
				Translation::Accessor(accessor) => accessor
					.resolve(row)
					.map(Cell::Value)
					.map_err(|e| bigfoot_core::Error::from(e).in_column(key.as_str()))?,
				Translation::Compute(f) => Cell::Value(f(row)),
				Translation::Render(element) => {
					let scoped = ctx.scoped(Some(row), ctx.extra().clone());
					element
						.render(&scoped)
						.map(Cell::Markup)
						.map_err(|e| e.in_column(key.as_str()))?
				}
			};
			cells.push((key.clone(), cell));
		}
		Ok(TranslatedRow { cells })
	}
}
