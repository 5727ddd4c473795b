//! Rendering fields through the built-in field template

use bigfoot_core::{Attrs, Context, Error, Settings, TemplateRenderer};
use bigfoot_forms::{Field, FieldRenderOptions, Form, Widget, render_field};
use bigfoot_templates::TemplateEngine;
use rstest::*;
use serde_json::{Map, json};

const FIELD_TEMPLATE: &str = "bigfoot/formfield.html";

#[fixture]
fn engine() -> TemplateEngine {
	TemplateEngine::with_defaults().unwrap()
}

#[fixture]
fn signup_form() -> Form {
	let mut data = Map::new();
	data.insert("username".to_string(), json!("ann"));
	Form::new()
		.field(Field::text("username").help_text("Letters only"))
		.field(Field::new("email", Widget::EmailInput).required(false))
		.with_data(data)
		.with_error("username", "Already taken")
}

fn show_label() -> Context {
	let mut context = Context::new();
	context.insert("formfield_show_label".to_string(), json!(true));
	context
}

#[rstest]
fn test_render_field_markup(engine: TemplateEngine, signup_form: Form) {
	let html = render_field(
		"username",
		&signup_form,
		show_label(),
		FIELD_TEMPLATE,
		&engine,
		&FieldRenderOptions::default(),
	)
	.unwrap();

	assert!(html.starts_with(r#"<div class="field required error">"#));
	assert!(html.contains(r#"<label for="id_username">Username</label>"#));
	assert!(html.contains(r#"value="ann""#));
	assert!(html.contains(r#"<span class="error">Already taken</span>"#));
	assert!(html.contains(r#"<p class="help">Letters only</p>"#));
}

#[rstest]
fn test_label_class_and_attrs(engine: TemplateEngine, signup_form: Form) {
	let options = FieldRenderOptions {
		label_class: Some("control-label".to_string()),
		attrs: Attrs::from([("placeholder", "you@example.com")]),
		..FieldRenderOptions::default()
	};
	let html = render_field("email", &signup_form, show_label(), FIELD_TEMPLATE, &engine, &options)
		.unwrap();

	assert!(html.contains(r#"<label for="id_email" class="control-label">Email</label>"#));
	assert!(html.contains(r#"placeholder="you@example.com""#));
	assert!(!html.contains("required"));
}

#[rstest]
fn test_hidden_label(engine: TemplateEngine, signup_form: Form) {
	let mut context = Context::new();
	context.insert("formfield_show_label".to_string(), json!(false));
	let html = render_field(
		"email",
		&signup_form,
		context,
		FIELD_TEMPLATE,
		&engine,
		&FieldRenderOptions::default(),
	)
	.unwrap();
	assert!(!html.contains("<label"));
}

#[rstest]
fn test_double_render_fails(engine: TemplateEngine, signup_form: Form) {
	let options = FieldRenderOptions::default();
	render_field("email", &signup_form, Context::new(), FIELD_TEMPLATE, &engine, &options)
		.unwrap();

	let second =
		render_field("email", &signup_form, Context::new(), FIELD_TEMPLATE, &engine, &options);
	match second {
		Err(Error::FieldAlreadyRendered { field }) => assert_eq!(field, "email"),
		other => panic!("expected double render error, got {:?}", other),
	}
}

#[rstest]
fn test_double_render_silent(engine: TemplateEngine, signup_form: Form) {
	let settings = Settings {
		fail_silently: true,
		..Settings::default()
	};
	let options = FieldRenderOptions::from_settings(&settings);
	let first =
		render_field("email", &signup_form, Context::new(), FIELD_TEMPLATE, &engine, &options)
			.unwrap();
	let second =
		render_field("email", &signup_form, Context::new(), FIELD_TEMPLATE, &engine, &options)
			.unwrap();
	assert_eq!(first, second);
}

#[rstest]
fn test_reset_allows_new_pass(engine: TemplateEngine, signup_form: Form) {
	let options = FieldRenderOptions::default();
	render_field("email", &signup_form, Context::new(), FIELD_TEMPLATE, &engine, &options)
		.unwrap();
	signup_form.reset_rendered_fields();
	assert!(
		render_field("email", &signup_form, Context::new(), FIELD_TEMPLATE, &engine, &options)
			.is_ok()
	);
}

#[rstest]
fn test_unknown_field(engine: TemplateEngine, signup_form: Form) {
	let result = render_field(
		"phone",
		&signup_form,
		Context::new(),
		FIELD_TEMPLATE,
		&engine,
		&FieldRenderOptions::default(),
	);
	assert!(matches!(result, Err(Error::FieldNotFound { field }) if field == "phone"));
}

#[rstest]
fn test_unknown_field_silent(engine: TemplateEngine, signup_form: Form) {
	let options = FieldRenderOptions {
		fail_silently: true,
		..FieldRenderOptions::default()
	};
	let html = render_field("phone", &signup_form, Context::new(), FIELD_TEMPLATE, &engine, &options)
		.unwrap();
	assert_eq!(html, "");
}

#[rstest]
fn test_missing_template(engine: TemplateEngine, signup_form: Form) {
	let result = render_field(
		"email",
		&signup_form,
		Context::new(),
		"custom/field.html",
		&engine,
		&FieldRenderOptions::default(),
	);
	assert!(matches!(result, Err(Error::TemplateNotFound(_))));
	assert!(!engine.has_template("custom/field.html"));
}
