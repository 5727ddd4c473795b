//! Loading templates from project directories

use bigfoot_core::{Context, Settings, TemplateRenderer};
use bigfoot_templates::TemplateEngine;
use rstest::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_template(root: &Path, name: &str, source: &str) {
	let path = root.join(name);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, source).unwrap();
}

#[fixture]
fn project_dirs() -> (TempDir, TempDir) {
	let first = TempDir::new().unwrap();
	let second = TempDir::new().unwrap();
	write_template(first.path(), "bigfoot/elementset.html", "<ul>{% for element in elements %}<li>{{ element | safe }}</li>{% endfor %}</ul>");
	write_template(first.path(), "pages/card.html", "first card");
	write_template(second.path(), "pages/card.html", "second card");
	write_template(second.path(), "pages/footer.html", "footer");
	(first, second)
}

#[rstest]
fn test_project_templates_shadow_builtins(project_dirs: (TempDir, TempDir)) {
	let (first, second) = project_dirs;
	let settings = Settings {
		template_dirs: vec![first.path().to_path_buf(), second.path().to_path_buf()],
		..Settings::default()
	};
	let engine = TemplateEngine::new(settings).unwrap();

	let mut context = Context::new();
	context.insert("elements".to_string(), json!(["a", "b"]));
	let html = engine
		.render_to_string("bigfoot/elementset.html", &context)
		.unwrap();
	assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");

	// builtins the project did not override are still there
	assert!(engine.has_template("bigfoot/form.html"));
}

#[rstest]
fn test_first_directory_wins(project_dirs: (TempDir, TempDir)) {
	let (first, second) = project_dirs;
	let settings = Settings {
		template_dirs: vec![first.path().to_path_buf(), second.path().to_path_buf()],
		..Settings::default()
	};
	let engine = TemplateEngine::new(settings).unwrap();

	let card = engine.render_to_string("pages/card.html", &Context::new()).unwrap();
	assert_eq!(card, "first card");
	let footer = engine.render_to_string("pages/footer.html", &Context::new()).unwrap();
	assert_eq!(footer, "footer");
}

#[rstest]
fn test_missing_directory_is_skipped() {
	let settings = Settings {
		template_dirs: vec!["/definitely/not/here".into()],
		..Settings::default()
	};
	let engine = TemplateEngine::new(settings).unwrap();
	assert!(engine.has_template("bigfoot/formfield.html"));
}

#[rstest]
fn test_flatatt_filter_available() {
	let mut engine = TemplateEngine::with_defaults().unwrap();
	engine
		.add_template("input.html", "<input{{ attrs | flatatt | safe }}>")
		.unwrap();
	let mut context = Context::new();
	context.insert("attrs".to_string(), json!({"max_length": 10}));
	let html = engine.render_to_string("input.html", &context).unwrap();
	assert_eq!(html, r#"<input max-length="10">"#);
}
