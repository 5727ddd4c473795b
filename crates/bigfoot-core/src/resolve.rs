//! Deferred attribute values
//!
//! Element attributes may be fixed values or may depend on the data item being
//! rendered. [`Attr`] captures the four shapes an attribute can take and
//! resolves them with a plain `match`.

use crate::accessor::Accessor;
use crate::error::{Error, Result};
use crate::html::{Attrs, value_to_text};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Types an accessor result can be converted into
pub trait AttrValue: Clone {
	/// Converts a resolved JSON value into `Self`
	fn from_value(value: Value) -> Result<Self>;
}

impl AttrValue for Value {
	fn from_value(value: Value) -> Result<Self> {
		Ok(value)
	}
}

impl AttrValue for String {
	fn from_value(value: Value) -> Result<Self> {
		Ok(value_to_text(&value))
	}
}

impl AttrValue for bool {
	/// Truthiness: empty strings, zero, empty collections and null are false
	fn from_value(value: Value) -> Result<Self> {
		Ok(match value {
			Value::Null => false,
			Value::Bool(b) => b,
			Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
			Value::String(s) => !s.is_empty(),
			Value::Array(items) => !items.is_empty(),
			Value::Object(map) => !map.is_empty(),
		})
	}
}

impl AttrValue for Attrs {
	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Object(map) => Ok(Attrs::from(map)),
			Value::Null => Ok(Attrs::new()),
			other => Err(Error::ImproperlyConfigured(format!(
				"attributes must resolve to an object, got {}",
				other
			))),
		}
	}
}

/// An attribute that is either fixed or resolved against a data item
pub enum Attr<T> {
	/// A plain value
	Static(T),
	/// A path looked up in the data item
	Accessor(Accessor),
	/// A function that ignores the data item
	Callable0(Arc<dyn Fn() -> T + Send + Sync>),
	/// A function of the data item
	Callable1(Arc<dyn Fn(&Value) -> T + Send + Sync>),
}

impl<T: AttrValue> Attr<T> {
	/// Wraps a zero-argument function
	pub fn call<F>(f: F) -> Self
	where
		F: Fn() -> T + Send + Sync + 'static,
	{
		Attr::Callable0(Arc::new(f))
	}

	/// Wraps a function of the data item
	pub fn with_data<F>(f: F) -> Self
	where
		F: Fn(&Value) -> T + Send + Sync + 'static,
	{
		Attr::Callable1(Arc::new(f))
	}

	/// Resolves the attribute named `attribute` against `data`
	///
	/// Static values and zero-argument functions never need a data item.
	/// A zero-argument function is called even when `data` is `None`, so the
	/// result is always a `T` rather than the unresolved attribute.
	/// Accessors and one-argument functions fail with [`Error::Unbound`] when
	/// `data` is `None`.
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_core::{Accessor, Attr};
	/// use serde_json::json;
	///
	/// let row = json!({"name": "Ann"});
	/// let fixed: Attr<String> = Attr::from("Bob");
	/// let looked_up: Attr<String> = Attr::from(Accessor::new("name"));
	///
	/// assert_eq!(fixed.resolve("inner", Some(&row)).unwrap(), "Bob");
	/// assert_eq!(looked_up.resolve("inner", Some(&row)).unwrap(), "Ann");
	/// assert!(looked_up.resolve("inner", None).is_err());
	/// ```
	pub fn resolve(&self, attribute: &str, data: Option<&Value>) -> Result<T> {
		let unbound = || Error::Unbound {
			attribute: attribute.to_string(),
		};
		match self {
			Attr::Static(value) => Ok(value.clone()),
			Attr::Accessor(accessor) => {
				let item = data.ok_or_else(unbound)?;
				T::from_value(accessor.resolve(item)?)
			}
			Attr::Callable0(f) => Ok(f()),
			Attr::Callable1(f) => data.map(|item| f(item)).ok_or_else(unbound),
		}
	}

	/// Whether resolving this attribute depends on the data item
	pub fn is_deferred(&self) -> bool {
		matches!(self, Attr::Accessor(_) | Attr::Callable1(_))
	}
}

impl<T: Clone> Clone for Attr<T> {
	fn clone(&self) -> Self {
		match self {
			Attr::Static(value) => Attr::Static(value.clone()),
			Attr::Accessor(accessor) => Attr::Accessor(accessor.clone()),
			Attr::Callable0(f) => Attr::Callable0(Arc::clone(f)),
			Attr::Callable1(f) => Attr::Callable1(Arc::clone(f)),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Attr<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Attr::Static(value) => f.debug_tuple("Static").field(value).finish(),
			Attr::Accessor(accessor) => f.debug_tuple("Accessor").field(accessor).finish(),
			Attr::Callable0(_) => f.write_str("Callable0(..)"),
			Attr::Callable1(_) => f.write_str("Callable1(..)"),
		}
	}
}

impl<T: Default> Default for Attr<T> {
	fn default() -> Self {
		Attr::Static(T::default())
	}
}

impl<T> From<Accessor> for Attr<T> {
	fn from(accessor: Accessor) -> Self {
		Attr::Accessor(accessor)
	}
}

impl From<&str> for Attr<String> {
	fn from(value: &str) -> Self {
		Attr::Static(value.to_string())
	}
}

impl From<String> for Attr<String> {
	fn from(value: String) -> Self {
		Attr::Static(value)
	}
}

impl From<bool> for Attr<bool> {
	fn from(value: bool) -> Self {
		Attr::Static(value)
	}
}

impl From<Attrs> for Attr<Attrs> {
	fn from(value: Attrs) -> Self {
		Attr::Static(value)
	}
}

impl From<Value> for Attr<Value> {
	fn from(value: Value) -> Self {
		Attr::Static(value)
	}
}
