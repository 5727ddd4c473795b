//! Field definitions and widgets

use bigfoot_core::html::{escape, flatatt, value_to_text};
use bigfoot_core::{AttrValue, Attrs};
use serde_json::Value;

/// How a field is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
	/// `<input type="text">`
	TextInput,
	/// `<input type="email">`
	EmailInput,
	/// `<input type="password">`, never echoes its value
	PasswordInput,
	/// `<input type="number">`
	NumberInput,
	/// `<input type="hidden">`
	HiddenInput,
	/// `<input type="file">`, never echoes its value
	FileInput,
	/// `<textarea>`
	Textarea,
	/// `<input type="checkbox">`, checked when the value is truthy
	CheckboxInput,
	/// `<select>` with `(value, label)` choices
	Select(Vec<(String, String)>),
}

impl Widget {
	fn input_type(&self) -> Option<&'static str> {
		match self {
			Self::TextInput => Some("text"),
			Self::EmailInput => Some("email"),
			Self::PasswordInput => Some("password"),
			Self::NumberInput => Some("number"),
			Self::HiddenInput => Some("hidden"),
			Self::FileInput => Some("file"),
			Self::CheckboxInput => Some("checkbox"),
			Self::Textarea | Self::Select(_) => None,
		}
	}

	/// Whether the widget is rendered without a visible label
	pub fn is_hidden(&self) -> bool {
		matches!(self, Self::HiddenInput)
	}

	/// Renders the widget markup
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_core::Attrs;
	/// use bigfoot_forms::Widget;
	/// use serde_json::json;
	///
	/// let html = Widget::TextInput.render("name", "id_name", Some(&json!("Ann")), &Attrs::new());
	/// assert_eq!(html, r#"<input type="text" name="name" id="id_name" value="Ann">"#);
	/// ```
	pub fn render(&self, name: &str, id: &str, value: Option<&Value>, attrs: &Attrs) -> String {
		let value = value.filter(|v| !v.is_null());
		let head = format!("name=\"{}\" id=\"{}\"", escape(name), escape(id));
		let extra = flatatt(attrs);

		match self {
			Self::Textarea => {
				let text = value.map(value_to_text).unwrap_or_default();
				format!("<textarea {}{}>{}</textarea>", head, extra, escape(&text))
			}
			Self::Select(choices) => {
				let selected = value.map(value_to_text);
				let options: String = choices
					.iter()
					.map(|(key, label)| {
						let marker = if selected.as_deref() == Some(key.as_str()) {
							" selected"
						} else {
							""
						};
						format!(
							"<option value=\"{}\"{}>{}</option>",
							escape(key),
							marker,
							escape(label)
						)
					})
					.collect();
				format!("<select {}{}>{}</select>", head, extra, options)
			}
			Self::CheckboxInput => {
				let checked = value
					.cloned()
					.map(bool::from_value)
					.and_then(Result::ok)
					.unwrap_or(false);
				format!(
					"<input type=\"checkbox\" {}{}{}>",
					head,
					if checked { " checked" } else { "" },
					extra
				)
			}
			Self::PasswordInput | Self::FileInput => {
				format!("<input type=\"{}\" {}{}>", self.input_type().unwrap_or("text"), head, extra)
			}
			_ => {
				let value_attr = value
					.map(|v| format!(" value=\"{}\"", escape(&value_to_text(v))))
					.unwrap_or_default();
				format!(
					"<input type=\"{}\" {}{}{}>",
					self.input_type().unwrap_or("text"),
					head,
					value_attr,
					extra
				)
			}
		}
	}
}

/// A form field definition
#[derive(Debug, Clone)]
pub struct Field {
	/// Name used as the key in form data
	pub name: String,
	/// Label text; derived from the name when unset
	pub label: Option<String>,
	/// Widget drawing the field
	pub widget: Widget,
	/// Whether a value is required
	pub required: bool,
	/// Value shown when the form carries no data for the field
	pub initial: Option<Value>,
	/// Help text under the field
	pub help_text: Option<String>,
	/// Extra widget attributes
	pub attrs: Attrs,
}

impl Field {
	/// Creates a required field drawn by `widget`
	pub fn new(name: impl Into<String>, widget: Widget) -> Self {
		Self {
			name: name.into(),
			label: None,
			widget,
			required: true,
			initial: None,
			help_text: None,
			attrs: Attrs::new(),
		}
	}

	/// A text input field
	pub fn text(name: impl Into<String>) -> Self {
		Self::new(name, Widget::TextInput)
	}

	/// Sets the label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets whether the field is required
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Sets the initial value
	pub fn initial(mut self, initial: impl Into<Value>) -> Self {
		self.initial = Some(initial.into());
		self
	}

	/// Sets the help text
	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Adds a widget attribute
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(key, value);
		self
	}

	/// Label text, falling back to a prettified name
	pub fn label_text(&self) -> String {
		self.label.clone().unwrap_or_else(|| pretty_name(&self.name))
	}
}

/// Turns `first_name` into `First name`
pub fn pretty_name(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
