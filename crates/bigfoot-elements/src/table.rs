//! The table element

use crate::template::{TemplateBase, TemplateOptions};
use bigfoot_core::{Attrs, ElementKind, RenderContext, Renderable, Result};
use bigfoot_tables::{RowSource, TableMeta, TableSpec, TranslatedRows, Translator, render_table};
use serde_json::Value;
use std::any::Any;

/// Rows drawn as a table, wrapped in `{prefix}/table.html`
///
/// The column spec is built once from the translator. At render time the rows
/// are translated with the element's template context as extra variables, the
/// table markup is drawn with [`render_table`] and handed to the wrapper
/// template as `table`.
///
/// # Examples
///
/// ```
/// use bigfoot_core::{Accessor, Renderable};
/// use bigfoot_elements::{Link, Table};
/// use bigfoot_tables::Translator;
/// use bigfoot_templates::TemplateEngine;
/// use serde_json::json;
///
/// let engine = TemplateEngine::with_defaults().unwrap();
/// let people = vec![json!({"name": "Ann", "url": "/ann/"})];
/// let translator = Translator::new()
///     .accessor("name", "name")
///     .render("profile", Link::new("view", Accessor::new("url")));
///
/// let html = Table::new(people, translator).to_html(&engine).unwrap();
/// assert!(html.contains(r#"<td><a href="/ann/">view</a></td>"#));
/// ```
pub struct Table<S: RowSource + 'static = Vec<Value>> {
	base: TemplateBase,
	rows: S,
	translator: Translator,
	spec: TableSpec,
	meta: TableMeta,
	table_attrs: Attrs,
}

impl<S: RowSource + 'static> Table<S> {
	/// A table over `rows` with one column per translator entry
	pub fn new(rows: S, translator: Translator) -> Self {
		let spec = TableSpec::from_translator(&translator, TableMeta::default(), &Attrs::new());
		Self {
			base: TemplateBase::default(),
			rows,
			translator,
			spec,
			meta: TableMeta::default(),
			table_attrs: Attrs::new(),
		}
	}

	/// Sets the table-wide options
	pub fn meta(mut self, meta: TableMeta) -> Self {
		self.meta = meta;
		self.rebuild_spec();
		self
	}

	/// Attributes merged over the meta attributes of the `<table>` tag
	pub fn table_attrs(mut self, attrs: Attrs) -> Self {
		self.table_attrs = attrs;
		self.rebuild_spec();
		self
	}

	/// The column spec
	pub fn spec(&self) -> &TableSpec {
		&self.spec
	}

	/// The row source
	pub fn rows(&self) -> &S {
		&self.rows
	}

	fn rebuild_spec(&mut self) {
		self.spec = TableSpec::from_translator(&self.translator, self.meta.clone(), &self.table_attrs);
	}
}

impl<S: RowSource + 'static> TemplateOptions for Table<S> {
	fn base_mut(&mut self) -> &mut TemplateBase {
		&mut self.base
	}
}

impl<S: RowSource + 'static> std::fmt::Debug for Table<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Table")
			.field("base", &self.base)
			.field("rows", &self.rows.row_count())
			.field("translator", &self.translator)
			.field("spec", &self.spec)
			.finish_non_exhaustive()
	}
}

impl<S: RowSource + 'static> Renderable for Table<S> {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let data = self.base.effective_data(ctx);
		let template = self.base.template_name(self.kind(), ctx, data)?;
		let mut context = self.base.context_data(ctx, data, Vec::new())?;

		let row_ctx = ctx.scoped(None, context.clone());
		let rows = TranslatedRows::new(&self.rows, &self.translator, &row_ctx);
		let table = render_table(&row_ctx, &self.spec, &rows)?;

		context.insert("table".to_string(), Value::String(table));
		self.base.render_template(ctx, &template, &context)
	}

	fn kind(&self) -> ElementKind {
		ElementKind::Table
	}

	fn data(&self) -> Option<&Value> {
		self.base.data.as_ref()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
