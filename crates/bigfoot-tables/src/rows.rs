//! The row-translating iteration adapter

use crate::translator::{TranslatedRow, Translator};
use bigfoot_core::{RenderContext, Result};
use serde::Serialize;

/// Something holding table rows
pub trait RowSource {
	/// Row type, serialised to a data item before translation
	type Row: Serialize;

	/// Iterates the rows from the start
	fn rows(&self) -> impl Iterator<Item = &Self::Row>;

	/// Number of rows
	fn row_count(&self) -> usize;
}

impl<T: Serialize> RowSource for [T] {
	type Row = T;

	fn rows(&self) -> impl Iterator<Item = &T> {
		self.iter()
	}

	fn row_count(&self) -> usize {
		self.len()
	}
}

impl<T: Serialize> RowSource for Vec<T> {
	type Row = T;

	fn rows(&self) -> impl Iterator<Item = &T> {
		self.iter()
	}

	fn row_count(&self) -> usize {
		self.len()
	}
}

/// Wraps a row source and translates each row while iterating
///
/// Only the length and iteration are offered; anything else goes through
/// [`TranslatedRows::source`]. Every call to [`TranslatedRows::iter`] reads the
/// source again, so translation happens once per row per pass.
pub struct TranslatedRows<'a, S: RowSource + ?Sized> {
	source: &'a S,
	translator: &'a Translator,
	context: &'a RenderContext<'a>,
}

impl<'a, S: RowSource + ?Sized> TranslatedRows<'a, S> {
	/// Adapts `source` with `translator`, rendering elements in `context`
	pub fn new(source: &'a S, translator: &'a Translator, context: &'a RenderContext<'a>) -> Self {
		Self {
			source,
			translator,
			context,
		}
	}

	/// Lazily translated rows
	pub fn iter(&self) -> impl Iterator<Item = Result<TranslatedRow>> + '_ {
		self.source.rows().map(move |row| {
			let item = serde_json::to_value(row)?;
			self.translator.translate(&item, self.context)
		})
	}

	/// Number of source rows
	pub fn len(&self) -> usize {
		self.source.row_count()
	}

	/// Whether the source has no rows
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The wrapped source
	pub fn source(&self) -> &'a S {
		self.source
	}

	/// The translator applied to each row
	pub fn translator(&self) -> &'a Translator {
		self.translator
	}

	/// Translates every row, failing on the first bad one
	pub fn collect_rows(&self) -> Result<Vec<TranslatedRow>> {
		self.iter().collect()
	}
}
