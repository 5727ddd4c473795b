//! Plain HTML tag elements

use bigfoot_core::html::escape;
use bigfoot_core::{Attr, Attrs, ElementKind, Error, RenderContext, Renderable, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::any::Any;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^\s*<\s*(?P<tag>[\w:]*)\s*(?P<end_tag>/?)\s*>\s*$")
		.expect("Invalid tag regex pattern")
});

/// A parsed tag template such as `<span>` or `<span/>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTemplate {
	/// Tag name
	pub name: String,
	/// Whether inner content and an end tag are rendered
	pub has_end_tag: bool,
}

impl TagTemplate {
	/// Parses a tag template
	///
	/// `<span>` renders only the opening tag; `<span/>` wraps inner content
	/// and closes the tag.
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_elements::TagTemplate;
	///
	/// let tag = TagTemplate::parse(" <span/> ").unwrap();
	/// assert_eq!(tag.name, "span");
	/// assert!(tag.has_end_tag);
	/// assert!(TagTemplate::parse("span").is_err());
	/// ```
	pub fn parse(template: &str) -> Result<Self> {
		let invalid = || Error::InvalidTag {
			tag: template.to_string(),
		};
		let captures = TAG_PATTERN.captures(template).ok_or_else(invalid)?;
		let name = captures.name("tag").map(|m| m.as_str()).unwrap_or_default();
		if name.is_empty() {
			return Err(invalid());
		}
		Ok(Self {
			name: name.to_string(),
			has_end_tag: captures.name("end_tag").is_some_and(|m| m.as_str() == "/"),
		})
	}
}

/// Raw markup placed inside an element instead of its escaped text
pub enum Html {
	/// Markup used as is
	Markup(Attr<String>),
	/// A nested element rendered with the same data item
	Element(Box<dyn Renderable>),
}

impl std::fmt::Debug for Html {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
			Self::Element(element) => f.debug_tuple("Element").field(&element.kind()).finish(),
		}
	}
}

/// A single HTML tag with attributes and inner content
///
/// Every part can be fixed or resolved against the current data item.
///
/// # Examples
///
/// ```
/// use bigfoot_core::Attrs;
/// use bigfoot_elements::Element;
/// use bigfoot_templates::TemplateEngine;
/// use bigfoot_core::Renderable;
///
/// let engine = TemplateEngine::with_defaults().unwrap();
/// let element = Element::with_tag("<span/>")
///     .with_attrs(Attrs::from([("class", "note")]))
///     .inner("hi");
/// assert_eq!(element.to_html(&engine).unwrap(), r#"<span class="note">hi</span>"#);
/// ```
#[derive(Debug, Default)]
pub struct Element {
	tag: Option<Attr<String>>,
	attrs: Attr<Attrs>,
	inner: Attr<String>,
	html: Option<Html>,
	data: Option<Value>,
}

impl Element {
	/// An element without a tag, rendering only its inner content
	pub fn new() -> Self {
		Self::default()
	}

	/// An element for a tag template such as `<span/>`
	pub fn with_tag(tag: impl Into<Attr<String>>) -> Self {
		Self {
			tag: Some(tag.into()),
			..Self::default()
		}
	}

	/// Sets the attributes
	pub fn with_attrs(mut self, attrs: impl Into<Attr<Attrs>>) -> Self {
		self.attrs = attrs.into();
		self
	}

	/// Sets the inner text, escaped when rendered
	pub fn inner(mut self, inner: impl Into<Attr<String>>) -> Self {
		self.inner = inner.into();
		self
	}

	/// Sets raw inner markup, taking precedence over the inner text when not empty
	pub fn html(mut self, html: impl Into<Attr<String>>) -> Self {
		self.html = Some(Html::Markup(html.into()));
		self
	}

	/// Nests an element as inner markup
	pub fn html_element(mut self, element: impl Renderable) -> Self {
		self.html = Some(Html::Element(Box::new(element)));
		self
	}

	/// Binds a data item used when the render context carries none
	pub fn with_data(mut self, data: Value) -> Self {
		self.data = Some(data);
		self
	}

	/// Renders with `extra_attrs` applied over the resolved attributes
	pub(crate) fn render_with(&self, ctx: &RenderContext<'_>, extra_attrs: &Attrs) -> Result<String> {
		let data = ctx.data().or(self.data.as_ref());

		let Some(tag) = &self.tag else {
			return self.render_inner(ctx, data);
		};
		let tag = TagTemplate::parse(&tag.resolve("tag", data)?)?;

		let mut attrs = self.attrs.resolve("attrs", data)?;
		attrs.extend(extra_attrs);

		let mut html = format!("<{}", tag.name);
		if !attrs.is_empty() {
			html.push(' ');
			html.push_str(&attrs.render());
		}
		html.push('>');

		if tag.has_end_tag {
			html.push_str(&self.render_inner(ctx, data)?);
			html.push_str(&format!("</{}>", tag.name));
		}
		Ok(html)
	}

	fn render_inner(&self, ctx: &RenderContext<'_>, data: Option<&Value>) -> Result<String> {
		let markup = match &self.html {
			Some(Html::Markup(markup)) => markup.resolve("html", data)?,
			Some(Html::Element(element)) => element.render(&ctx.scoped(data, ctx.extra().clone()))?,
			None => String::new(),
		};
		if !markup.is_empty() {
			return Ok(markup);
		}
		Ok(escape(&self.inner.resolve("inner", data)?))
	}
}

impl Renderable for Element {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		self.render_with(ctx, &Attrs::new())
	}

	fn kind(&self) -> ElementKind {
		ElementKind::Element
	}

	fn data(&self) -> Option<&Value> {
		self.data.as_ref()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bigfoot_core::Accessor;
	use bigfoot_templates::TemplateEngine;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("<span>", "span", false)]
	#[case("<span/>", "span", true)]
	#[case("  < fb:like / >  ", "fb:like", true)]
	#[case("<h1>", "h1", false)]
	fn test_parse_tag(#[case] template: &str, #[case] name: &str, #[case] has_end_tag: bool) {
		let tag = TagTemplate::parse(template).unwrap();
		assert_eq!(tag.name, name);
		assert_eq!(tag.has_end_tag, has_end_tag);
	}

	#[rstest]
	#[case("span")]
	#[case("<>")]
	#[case("<span")]
	#[case("<span class='x'>")]
	#[case("</span>")]
	fn test_invalid_tag(#[case] template: &str) {
		assert!(matches!(
			TagTemplate::parse(template),
			Err(Error::InvalidTag { tag }) if tag == template
		));
	}

	#[test]
	fn test_open_tag_only() {
		let engine = TemplateEngine::with_defaults().unwrap();
		let element = Element::with_tag("<span>")
			.with_attrs(Attrs::from([("class", "x")]))
			.inner("hi");
		assert_eq!(element.to_html(&engine).unwrap(), r#"<span class="x">"#);
	}

	#[test]
	fn test_no_tag_renders_inner() {
		let engine = TemplateEngine::with_defaults().unwrap();
		let element = Element::new().inner("a < b");
		assert_eq!(element.to_html(&engine).unwrap(), "a &lt; b");
	}

	#[test]
	fn test_html_beats_inner() {
		let engine = TemplateEngine::with_defaults().unwrap();
		let element = Element::with_tag("<p/>").inner("text").html("<b>bold</b>");
		assert_eq!(element.to_html(&engine).unwrap(), "<p><b>bold</b></p>");

		let empty_html = Element::with_tag("<p/>").inner("text").html("");
		assert_eq!(empty_html.to_html(&engine).unwrap(), "<p>text</p>");
	}

	#[test]
	fn test_nested_element_shares_data() {
		let engine = TemplateEngine::with_defaults().unwrap();
		let row = json!({"name": "Ann"});
		let element = Element::with_tag("<li/>")
			.html_element(Element::with_tag("<em/>").inner(Accessor::new("name")));
		let ctx = engine.context().with_data(&row);
		assert_eq!(element.render(&ctx).unwrap(), "<li><em>Ann</em></li>");
	}

	#[test]
	fn test_deferred_parts() {
		let engine = TemplateEngine::with_defaults().unwrap();
		let element = Element::with_tag(Attr::with_data(|row| {
			if row["urgent"] == json!(true) { "<strong/>" } else { "<span/>" }.to_string()
		}))
		.inner(Accessor::new("title"))
		.with_data(json!({"title": "Fix it", "urgent": true}));
		assert_eq!(element.to_html(&engine).unwrap(), "<strong>Fix it</strong>");
	}

	#[test]
	fn test_context_data_beats_bound_data() {
		let engine = TemplateEngine::with_defaults().unwrap();
		let row = json!({"title": "from row"});
		let element = Element::new()
			.inner(Accessor::new("title"))
			.with_data(json!({"title": "bound"}));
		assert_eq!(element.render(&engine.context().with_data(&row)).unwrap(), "from row");
	}

	#[test]
	fn test_attribute_values_escaped() {
		let engine = TemplateEngine::with_defaults().unwrap();
		let element = Element::with_tag("<img>").with_attrs(Attrs::from([("alt", "\"quoted\"")]));
		assert_eq!(element.to_html(&engine).unwrap(), r#"<img alt="&quot;quoted&quot;">"#);
	}
}
