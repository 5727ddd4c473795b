//! # bigfoot-elements
//!
//! HTML elements that render themselves.
//!
//! | element             | draws                                            |
//! |---------------------|--------------------------------------------------|
//! | [`Element`]         | one tag from a template such as `<span/>`        |
//! | [`Link`]            | `<a href>`                                       |
//! | [`Button`]          | `<input type="submit">`                          |
//! | [`TemplateElement`] | any named template                               |
//! | [`FormField`]       | one field of a form                              |
//! | [`FormFields`]      | several fields of one form                       |
//! | [`ElementSet`]      | a list of elements                               |
//! | [`FormFieldSet`]    | a `<fieldset>` of form elements                  |
//! | [`Form`]            | a `<form>` of form elements                      |
//! | [`Table`]           | rows translated into columns                     |
//!
//! Attributes of every element can be fixed or resolved against the data
//! item of the current render (see [`bigfoot_core::Attr`]). Collections
//! pass their data item down to children that have none of their own, and
//! [`Renderable::find`](bigfoot_core::Renderable::find) searches them by kind.
//!
//! ## Example
//!
//! ```
//! use bigfoot_core::{ElementKind, Renderable, SearchCriteria};
//! use bigfoot_elements::{Button, ElementSet, Form, Link};
//!
//! let form = Form::new()
//!     .element(ElementSet::new().element(Link::new("Cancel", "/")))
//!     .element(Button::new().value("Save"));
//!
//! let found = form.find(&SearchCriteria::kind(ElementKind::Element)).unwrap();
//! let kinds: Vec<_> = found.iter().map(|e| e.kind()).collect();
//! assert_eq!(kinds, vec![ElementKind::Link, ElementKind::Button]);
//! ```

pub mod element;
pub mod form_field;
pub mod link;
pub mod set;
pub mod shortcuts;
pub mod table;
pub mod template;

pub use element::{Element, Html, TagTemplate};
pub use form_field::{FormField, FormFields};
pub use link::{Button, Link};
pub use set::{ElementSet, Form, FormFieldSet};
pub use shortcuts::{form_field_set, form_fields};
pub use table::Table;
pub use template::{TemplateBase, TemplateElement, TemplateOptions, context_key};
