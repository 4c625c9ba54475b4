//! HTML rendering of the single generator page.

use handlebars::Handlebars;
use serde::Serialize;

use crate::types::{DiagramError, DiagramOutcome, DiagramRequest, DiagramType, EMPTY_INPUT_WARNING};

const PAGE_TEMPLATE_NAME: &str = "page";
const PAGE_TEMPLATE: &str = include_str!("templates/page.hbs");

/// Example description shown in the empty text area.
pub const PLACEHOLDER: &str = "Example: A user logs in, the system validates credentials, if valid show dashboard, else show error message";

/// Static guidance shown below the form.
pub const EXAMPLES: [&str; 3] = [
	"Flowchart: 'User registration process with email verification'",
	"Sequence: 'User authenticates, server validates, return token'",
	"Class: 'Blog system with User, Post, and Comment classes'",
];

#[derive(Serialize)]
struct DiagramTypeOption {
	label: &'static str,
	selected: bool,
}

#[derive(Serialize)]
struct PageView<'a> {
	diagram_types: Vec<DiagramTypeOption>,
	description: &'a str,
	placeholder: &'static str,
	warning: Option<&'a str>,
	error: Option<&'a str>,
	source: Option<&'a str>,
	/// Set for every successful outcome, even when the source is empty.
	has_diagram: bool,
	examples: &'static [&'static str],
}

/// Renders the generator form, optionally followed by the outcome of the last request.
///
/// All user-supplied and model-generated text is HTML-escaped by the template engine.
pub struct Page {
	registry: Handlebars<'static>,
}

impl Page {
	pub fn new() -> Result<Self, DiagramError> {
		let mut registry = Handlebars::new();
		registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

		Ok(Self { registry })
	}

	/// Render the page.
	///
	/// `request` keeps the previously entered values in the form. `outcome` selects between the
	/// warning banner, the error banner and the code block plus preview.
	pub fn render(
		&self,
		request: Option<&DiagramRequest>,
		outcome: Option<&DiagramOutcome>,
	) -> Result<String, DiagramError> {
		let selected = request.map(|r| r.diagram_type).unwrap_or_default();

		let (warning, error, source) = match outcome {
			Some(DiagramOutcome::EmptyInput) => (Some(EMPTY_INPUT_WARNING), None, None),
			Some(DiagramOutcome::Failure(msg)) => (None, Some(msg.as_str()), None),
			Some(DiagramOutcome::Diagram(source)) => (None, None, Some(source.as_str())),
			None => (None, None, None),
		};

		let view = PageView {
			diagram_types: DiagramType::ALL
				.iter()
				.map(|t| DiagramTypeOption { label: t.label(), selected: *t == selected })
				.collect(),
			description: request.map(|r| r.description.as_str()).unwrap_or_default(),
			placeholder: PLACEHOLDER,
			warning,
			error,
			source,
			has_diagram: source.is_some(),
			examples: &EXAMPLES,
		};

		Ok(self.registry.render(PAGE_TEMPLATE_NAME, &view)?)
	}
}
