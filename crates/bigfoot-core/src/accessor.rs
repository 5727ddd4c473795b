//! Attribute paths resolved against data items
//!
//! An [`Accessor`] walks a path such as `person.name`, `items.0` or
//! `items[0]["first name"]` through a [`serde_json::Value`]. Keys index into
//! objects and numeric segments index into arrays. The empty path resolves to
//! the item itself.

use crate::error::AccessorError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A lazily parsed lookup path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accessor {
	path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Key(String),
	Index(usize, String),
}

impl Segment {
	fn from_bare(raw: &str) -> Self {
		match raw.parse::<usize>() {
			Ok(index) => Segment::Index(index, raw.to_string()),
			Err(_) => Segment::Key(raw.to_string()),
		}
	}

	fn label(&self) -> String {
		match self {
			Segment::Key(key) => key.clone(),
			Segment::Index(_, raw) => raw.clone(),
		}
	}
}

impl Accessor {
	/// Creates an accessor for `path`
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_core::Accessor;
	/// use serde_json::json;
	///
	/// let row = json!({"person": {"name": "Ann"}});
	/// let name = Accessor::new("person.name").resolve(&row).unwrap();
	/// assert_eq!(name, json!("Ann"));
	/// ```
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}

	/// The path this accessor walks
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Resolves the path against `item`
	pub fn resolve(&self, item: &Value) -> Result<Value, AccessorError> {
		let mut current = item;
		for segment in self.segments()? {
			let next = match (&segment, current) {
				(Segment::Key(key), Value::Object(map)) => map.get(key),
				(Segment::Index(index, _), Value::Array(items)) => items.get(*index),
				// numeric keys are legal object keys too, matched as written
				(Segment::Index(_, raw), Value::Object(map)) => map.get(raw),
				_ => None,
			};
			current = next.ok_or_else(|| AccessorError::Missing {
				path: self.path.clone(),
				segment: segment.label(),
			})?;
		}
		Ok(current.clone())
	}

	fn segments(&self) -> Result<Vec<Segment>, AccessorError> {
		let invalid = || AccessorError::InvalidPath(self.path.clone());
		let mut segments = Vec::new();
		let mut bare = String::new();
		let mut chars = self.path.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'.' => {
					if !bare.is_empty() {
						segments.push(Segment::from_bare(&bare));
						bare.clear();
					}
				}
				'[' => {
					if !bare.is_empty() {
						segments.push(Segment::from_bare(&bare));
						bare.clear();
					}
					let quote = match chars.peek() {
						Some('"') | Some('\'') => chars.next(),
						_ => None,
					};
					let mut inner = String::new();
					let mut closed = false;
					while let Some(c) = chars.next() {
						if Some(c) == quote {
							if chars.next() != Some(']') {
								return Err(invalid());
							}
							closed = true;
							break;
						}
						if c == ']' && quote.is_none() {
							closed = true;
							break;
						}
						inner.push(c);
					}
					if !closed || inner.is_empty() {
						return Err(invalid());
					}
					segments.push(if quote.is_some() {
						Segment::Key(inner)
					} else {
						Segment::from_bare(inner.trim())
					});
				}
				']' => return Err(invalid()),
				_ => bare.push(c),
			}
		}
		if !bare.is_empty() {
			segments.push(Segment::from_bare(&bare));
		}
		Ok(segments)
	}
}

impl From<&str> for Accessor {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<String> for Accessor {
	fn from(path: String) -> Self {
		Self::new(path)
	}
}

impl FromStr for Accessor {
	type Err = AccessorError;

	fn from_str(path: &str) -> Result<Self, Self::Err> {
		let accessor = Self::new(path);
		accessor.segments()?;
		Ok(accessor)
	}
}

impl fmt::Display for Accessor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path)
	}
}
