//! Composed element trees rendered through the built-in templates

use bigfoot_core::{
	Accessor, Attr, Attrs, ElementKind, Error, Renderable, SearchCriteria, Settings,
};
use bigfoot_elements::{
	Button, Element, ElementSet, Form, FormField, FormFieldSet, FormFields, Link, Table,
	TemplateElement, TemplateOptions, form_field_set, form_fields,
};
use bigfoot_forms::{Field, Form as FormData, Widget};
use bigfoot_tables::{TableMeta, Translator};
use bigfoot_templates::{RequestContext, TemplateEngine};
use rstest::*;
use serde_json::json;
use std::sync::Arc;

#[fixture]
fn engine() -> TemplateEngine {
	TemplateEngine::with_defaults().unwrap()
}

#[fixture]
fn contact() -> Arc<FormData> {
	Arc::new(
		FormData::new()
			.field(Field::text("name"))
			.field(Field::new("email", Widget::EmailInput))
			.field(Field::new("message", Widget::Textarea).required(false)),
	)
}

#[rstest]
fn test_find_is_depth_first(contact: Arc<FormData>) {
	let tree = ElementSet::new()
		.element(FormField::new(&contact, "name"))
		.element(
			FormFieldSet::new()
				.element(FormField::new(&contact, "email"))
				.element(ElementSet::new().element(FormField::new(&contact, "message"))),
		)
		.element(Link::new("Help", "/help/"));

	let fields = tree.find(&SearchCriteria::kind(ElementKind::FormField)).unwrap();
	let names: Vec<String> = fields
		.iter()
		.filter_map(|e| e.as_any().downcast_ref::<FormField>())
		.map(|field| field.name().resolve("name", None).unwrap())
		.collect();
	assert_eq!(names, vec!["name", "email", "message"]);

	let typed: Vec<String> = tree
		.find_all::<FormField>()
		.iter()
		.map(|field| field.name().resolve("name", None).unwrap())
		.collect();
	assert_eq!(typed, names);
	assert_eq!(tree.find_all::<Link>().len(), 1);

	let sets = tree.find(&SearchCriteria::kind(ElementKind::ElementSet)).unwrap();
	let kinds: Vec<_> = sets.iter().map(|e| e.kind()).collect();
	assert_eq!(kinds, vec![ElementKind::FormFieldSet, ElementKind::ElementSet]);

	let templates = tree.find(&SearchCriteria::kind(ElementKind::Template)).unwrap();
	assert_eq!(templates.len(), 5);
}

#[rstest]
fn test_find_without_criteria() {
	let set = ElementSet::new().element(Element::new());
	assert!(matches!(
		set.find(&SearchCriteria::default()),
		Err(Error::InvalidSearch(_))
	));
}

#[rstest]
fn test_set_passes_data_to_children(engine: TemplateEngine) {
	let set = ElementSet::new()
		.element(Element::with_tag("<b/>").inner(Accessor::new("name")))
		.element(
			Element::with_tag("<i/>")
				.inner(Accessor::new("name"))
				.with_data(json!({"name": "own"})),
		)
		.with_data(json!({"name": "set"}));
	assert_eq!(set.to_html(&engine).unwrap(), "<b>set</b><i>own</i>");
}

#[rstest]
fn test_set_context_reaches_children(mut engine: TemplateEngine) {
	engine.add_template("greet.html", "Hello {{ who }}").unwrap();
	let set = ElementSet::new()
		.element(TemplateElement::with_template("greet.html"))
		.with_var("who", "team");
	assert_eq!(set.to_html(&engine).unwrap(), "Hello team");
}

#[rstest]
fn test_form_markup(engine: TemplateEngine, contact: Arc<FormData>) {
	let request = RequestContext::new("POST", "/contact/").with_csrf_token("abc123");
	let form = Form::from(form_field_set(&contact, &["name"]))
		.element(Button::new().value("Send"))
		.action("/contact/")
		.allow_files(true)
		.with_attrs(Attrs::from([("class", "contact")]))
		.with_request(request);

	let html = form.to_html(&engine).unwrap();
	assert!(html.starts_with(
		r#"<form method="POST" action="&#x2F;contact&#x2F;" enctype="multipart/form-data" class="contact">"#
	));
	assert!(html.contains(r#"<input type="hidden" name="csrfmiddlewaretoken" value="abc123">"#));
	assert!(html.contains(r#"<label for="id_name">Name</label>"#));
	assert!(html.ends_with(r#"<input type="submit" value="Send"></form>"#));
}

#[rstest]
fn test_form_defaults(engine: TemplateEngine) {
	let html = Form::new().to_html(&engine).unwrap();
	assert_eq!(html, r#"<form method="POST" action=""></form>"#);
}

#[rstest]
fn test_field_rendered_twice(engine: TemplateEngine, contact: Arc<FormData>) {
	let page = ElementSet::new()
		.element(FormField::new(&contact, "email"))
		.element(FormField::new(&contact, "email"));

	match page.to_html(&engine) {
		Err(Error::FieldAlreadyRendered { field }) => assert_eq!(field, "email"),
		other => panic!("expected double render error, got {:?}", other),
	}
}

#[rstest]
fn test_field_rendered_twice_silently(contact: Arc<FormData>) {
	let settings = Settings {
		fail_silently: true,
		..Settings::default()
	};
	let engine = TemplateEngine::new(settings).unwrap();
	let page = ElementSet::new()
		.element(FormField::new(&contact, "email"))
		.element(FormField::new(&contact, "email"));

	let html = page.to_html(&engine).unwrap();
	assert_eq!(html.matches(r#"id="id_email""#).count(), 2);
}

#[rstest]
fn test_unknown_field(engine: TemplateEngine, contact: Arc<FormData>) {
	let field = FormField::new(&contact, "phone");
	assert!(matches!(
		field.to_html(&engine),
		Err(Error::FieldNotFound { field }) if field == "phone"
	));
}

#[rstest]
fn test_hidden_label(engine: TemplateEngine, contact: Arc<FormData>) {
	let field = FormField::new(&contact, "name")
		.show_label(false)
		.label_class("ignored");
	let html = field.to_html(&engine).unwrap();
	assert!(!html.contains("<label"));
	assert!(html.contains(r#"<input type="text" name="name" id="id_name" required="required">"#));
}

#[rstest]
fn test_page_rendered_again_after_reset(engine: TemplateEngine, contact: Arc<FormData>) {
	let page = Form::new().element(FormField::new(&contact, "name"));
	let first = page.to_html(&engine).unwrap();

	assert!(matches!(
		page.to_html(&engine),
		Err(Error::FieldAlreadyRendered { field }) if field == "name"
	));

	contact.reset_rendered_fields();
	assert_eq!(page.to_html(&engine).unwrap(), first);
}

#[rstest]
fn test_form_fields_in_order(engine: TemplateEngine, contact: Arc<FormData>) {
	let fields = FormFields::new(&contact, ["message", "name"]).label_class("lbl");
	let html = fields.to_html(&engine).unwrap();

	let message = html.find("id_message").unwrap();
	let name = html.find("id_name").unwrap();
	assert!(message < name);
	assert!(html.contains(r#"<label for="id_name" class="lbl">Name</label>"#));
	assert!(contact.is_rendered("message"));
	assert!(!contact.is_rendered("email"));
}

#[rstest]
fn test_form_fields_shortcut(engine: TemplateEngine, contact: Arc<FormData>) {
	assert_eq!(form_fields(&contact, &["email"]).len(), 1);

	let html = form_field_set(&contact, &[]).to_html(&engine).unwrap();
	let positions: Vec<usize> = ["id_name", "id_email", "id_message"]
		.iter()
		.map(|id| html.find(id).unwrap())
		.collect();
	assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[rstest]
fn test_field_set_legend(engine: TemplateEngine, contact: Arc<FormData>) {
	let fieldset = FormFieldSet::new()
		.legend(Accessor::new("title"))
		.element(FormField::new(&contact, "message"))
		.with_data(json!({"title": "Say hi"}));
	let html = fieldset.to_html(&engine).unwrap();
	assert!(html.starts_with("<fieldset><legend>Say hi</legend><div class=\"field\">"));
	assert!(html.ends_with("</div></fieldset>"));
}

#[rstest]
fn test_table_element(engine: TemplateEngine) {
	let rows = vec![
		json!({"id": 1, "first_name": "Ann"}),
		json!({"id": 2, "first_name": "Bob"}),
	];
	let translator = Translator::new()
		.accessor("first_name", "first_name")
		.render(
			"edit",
			Link::new("edit", Attr::with_data(|row| format!("/people/{}/", row["id"]))),
		);
	let table = Table::new(rows, translator)
		.meta(TableMeta {
			attrs: Attrs::from([("class", "grid")]),
			..TableMeta::default()
		})
		.table_attrs(Attrs::from([("id", "people")]))
		.with_attrs(Attrs::from([("class", "wrapper")]));

	let html = table.to_html(&engine).unwrap();
	assert!(html.starts_with(r#"<div class="wrapper"><table class="grid" id="people">"#));
	assert!(html.contains("<th>First name</th><th>Edit</th>"));
	assert!(html.contains(r#"<tr><td>Bob</td><td><a href="/people/2/">edit</a></td></tr>"#));
	assert!(html.ends_with("</table></div>"));
}

#[rstest]
fn test_table_empty_text(engine: TemplateEngine) {
	let translator = Translator::new().accessor("name", "name");
	let table = Table::new(Vec::<serde_json::Value>::new(), translator).meta(TableMeta {
		empty_text: Some("No people yet".to_string()),
		..TableMeta::default()
	});
	let html = table.to_html(&engine).unwrap();
	assert!(html.contains("No people yet"));
}

#[rstest]
fn test_table_bad_column(engine: TemplateEngine) {
	let table = Table::new(vec![json!({"name": "Ann"})], Translator::new().accessor("age", "age"));
	assert!(matches!(
		table.to_html(&engine),
		Err(Error::UnresolvableColumn { column, .. }) if column == "age"
	));
}
