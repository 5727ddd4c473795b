//! Form binding for bigfoot elements
//!
//! This crate provides the pieces form elements render through:
//! - Field definitions with widgets
//! - Forms holding bound data, errors and the set of already rendered fields
//! - Bound fields exposing names, ids, labels and widget markup to templates
//! - [`render_field`], which renders one field and refuses to render it twice

pub mod bound_field;
pub mod field;
pub mod form;
pub mod render;

pub use bound_field::{BoundField, BoundFieldView};
pub use field::{Field, Widget, pretty_name};
pub use form::Form;
pub use render::{FieldRenderOptions, render_field};
