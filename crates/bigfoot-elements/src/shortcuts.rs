//! Shortcuts for building field elements

use crate::form_field::FormField;
use crate::set::ElementSet;
use bigfoot_forms::Form;
use std::sync::Arc;

/// One [`FormField`] per name, or per form field when `names` is empty
///
/// # Examples
///
/// ```
/// use bigfoot_elements::form_fields;
/// use bigfoot_forms::{Field, Form};
/// use std::sync::Arc;
///
/// let form = Arc::new(Form::new().field(Field::text("name")).field(Field::text("email")));
/// assert_eq!(form_fields(&form, &[]).len(), 2);
/// assert_eq!(form_fields(&form, &["email"]).len(), 1);
/// ```
pub fn form_fields(form: &Arc<Form>, names: &[&str]) -> Vec<FormField> {
	let names: Vec<&str> = if names.is_empty() {
		form.field_names()
	} else {
		names.to_vec()
	};
	names.into_iter().map(|name| FormField::new(form, name)).collect()
}

/// The fields from [`form_fields`] wrapped in an [`ElementSet`]
pub fn form_field_set(form: &Arc<Form>, names: &[&str]) -> ElementSet {
	form_fields(form, names)
		.into_iter()
		.fold(ElementSet::new(), |set, field| set.element(field))
}
