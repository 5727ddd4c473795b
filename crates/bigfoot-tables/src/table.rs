//! Drawing translated rows as an HTML table

use crate::column::TableSpec;
use crate::rows::{RowSource, TranslatedRows};
use crate::translator::Cell;
use bigfoot_core::html::flatatt;
use bigfoot_core::{RenderContext, Result};
use serde_json::json;

/// Renders `rows` as a table described by `spec`
///
/// Cells are drawn in column order; a column missing from a translated row
/// draws as an empty cell. The template receives the caller's extra variables
/// plus `table` with `attrs`, `columns`, `rows` (cell markup) and
/// `empty_text`.
pub fn render_table<S: RowSource + ?Sized>(
	ctx: &RenderContext<'_>,
	spec: &TableSpec,
	rows: &TranslatedRows<'_, S>,
) -> Result<String> {
	let mut cells = Vec::with_capacity(rows.len());
	for row in rows.iter() {
		let row = row?;
		let drawn: Vec<String> = spec
			.columns()
			.iter()
			.map(|column| row.get(&column.name).map(Cell::to_html).unwrap_or_default())
			.collect();
		cells.push(drawn);
	}

	let template = spec.template_name(ctx.settings());
	tracing::debug!(template = %template, rows = cells.len(), "Rendering table");

	let mut context = ctx.extra().clone();
	context.insert(
		"table".to_string(),
		json!({
			"attrs": flatatt(spec.attrs()),
			"columns": spec.columns(),
			"rows": cells,
			"empty_text": spec.meta().empty_text,
		}),
	);
	ctx.renderer().render_to_string(&template, &context)
}
