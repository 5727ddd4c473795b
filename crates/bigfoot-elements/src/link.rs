//! Links and submit buttons

use crate::element::Element;
use bigfoot_core::{Attr, Attrs, ElementKind, RenderContext, Renderable, Result};
use serde_json::Value;
use std::any::Any;

/// An `<a>` element
///
/// # Examples
///
/// ```
/// use bigfoot_core::{Accessor, Renderable};
/// use bigfoot_elements::Link;
/// use bigfoot_templates::TemplateEngine;
/// use serde_json::json;
///
/// let engine = TemplateEngine::with_defaults().unwrap();
/// let row = json!({"name": "Ann", "url": "/people/1/"});
/// let link = Link::new(Accessor::new("name"), Accessor::new("url"));
///
/// let html = link.render(&engine.context().with_data(&row)).unwrap();
/// assert_eq!(html, r#"<a href="/people/1/">Ann</a>"#);
/// ```
#[derive(Debug)]
pub struct Link {
	element: Element,
	href: Attr<String>,
}

impl Link {
	/// A link showing `text` and pointing at `href`
	pub fn new(text: impl Into<Attr<String>>, href: impl Into<Attr<String>>) -> Self {
		Self {
			element: Element::with_tag("<a/>").inner(text),
			href: href.into(),
		}
	}

	/// Sets the attributes; `href` is always added on top
	pub fn with_attrs(mut self, attrs: impl Into<Attr<Attrs>>) -> Self {
		self.element = self.element.with_attrs(attrs);
		self
	}

	/// Binds a data item used when the render context carries none
	pub fn with_data(mut self, data: Value) -> Self {
		self.element = self.element.with_data(data);
		self
	}
}

impl Renderable for Link {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let data = ctx.data().or(self.element.data());
		let href = self.href.resolve("href", data)?;
		self.element.render_with(ctx, &Attrs::from([("href", href)]))
	}

	fn kind(&self) -> ElementKind {
		ElementKind::Link
	}

	fn data(&self) -> Option<&Value> {
		self.element.data()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// A submit button, drawn as `<input type="submit">`
#[derive(Debug)]
pub struct Button {
	element: Element,
	value: Option<Attr<String>>,
}

impl Button {
	/// A submit button without a label
	pub fn new() -> Self {
		Self {
			element: Element::with_tag("<input>"),
			value: None,
		}
	}

	/// Sets the button label
	pub fn value(mut self, value: impl Into<Attr<String>>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Sets the attributes; `type="submit"` always wins
	pub fn with_attrs(mut self, attrs: impl Into<Attr<Attrs>>) -> Self {
		self.element = self.element.with_attrs(attrs);
		self
	}

	/// Binds a data item used when the render context carries none
	pub fn with_data(mut self, data: Value) -> Self {
		self.element = self.element.with_data(data);
		self
	}
}

impl Default for Button {
	fn default() -> Self {
		Self::new()
	}
}

impl Renderable for Button {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let data = ctx.data().or(self.element.data());
		let mut extra = Attrs::from([("type", "submit")]);
		if let Some(value) = &self.value {
			extra.insert("value", value.resolve("value", data)?);
		}
		self.element.render_with(ctx, &extra)
	}

	fn kind(&self) -> ElementKind {
		ElementKind::Button
	}

	fn data(&self) -> Option<&Value> {
		self.element.data()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
