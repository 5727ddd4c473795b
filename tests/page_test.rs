//! Whole pages built through the facade, configured from TOML

use bigfoot::prelude::*;
use bigfoot::forms::Form as FormData;
use rstest::*;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[fixture]
fn project() -> TempDir {
	let root = TempDir::new().unwrap();
	let templates = root.path().join("templates");
	fs::create_dir_all(templates.join("site")).unwrap();
	fs::write(
		templates.join("site/page.html"),
		"<main{{ attrs | safe }}>{% for element in elements %}{{ element | safe }}{% endfor %}</main>",
	)
	.unwrap();
	fs::write(
		root.path().join("bigfoot.toml"),
		format!(
			"fail_silently = false\ntemplate_dirs = [{:?}]\nstatic_url = \"/assets/\"\n",
			templates.display().to_string()
		),
	)
	.unwrap();
	root
}

#[rstest]
fn test_settings_file_and_overrides(project: TempDir) {
	let settings = Settings::from_file(project.path().join("bigfoot.toml"))
		.unwrap()
		.with_overrides(|key| (key == "BIGFOOT_DEBUG").then(|| "true".to_string()))
		.unwrap();

	assert!(settings.debug);
	assert_eq!(settings.static_url, "/assets/");
	assert_eq!(settings.template_dirs.len(), 1);
}

#[rstest]
fn test_people_page(project: TempDir) {
	let settings = Settings::from_file(project.path().join("bigfoot.toml")).unwrap();
	let engine = TemplateEngine::new(settings).unwrap();

	let search = Arc::new(
		FormData::new()
			.field(Field::text("q").label("Search").required(false))
			.with_data(serde_json::Map::from_iter([("q".to_string(), json!("ann"))])),
	);
	let people = vec![
		json!({"name": "Ann", "team": {"name": "Core"}}),
		json!({"name": "Annika", "team": {"name": "Docs"}}),
	];
	let translator = Translator::new()
		.accessor("name", "name")
		.accessor("team", "team.name");

	let page = ElementSet::new()
		.element(
			Form::new()
				.method("GET")
				.element(FormField::new(&search, "q"))
				.element(Button::new().value("Go")),
		)
		.element(Table::new(people, translator))
		.with_template_name("site/page.html")
		.with_attrs(Attrs::from([("id", "people")]));

	let html = page.to_html(&engine).unwrap();
	assert!(html.starts_with(r#"<main id="people"><form method="GET" action="">"#));
	assert!(html.contains(r#"<input type="text" name="q" id="id_q" value="ann">"#));
	assert!(html.contains("<td>Annika</td><td>Docs</td>"));
	assert!(html.ends_with("</table></div></main>"));

	let forms = page.find(&SearchCriteria::kind(ElementKind::FormFieldSet)).unwrap();
	assert_eq!(forms.len(), 1);
	assert_eq!(forms[0].kind(), ElementKind::Form);
}
