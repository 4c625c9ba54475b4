use std::{fmt::Display, str::FromStr};

use async_openai::error::OpenAIError;
use clap::{builder::PossibleValue, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize;

/// Marker prefixed to every failure message surfaced to the presentation layer.
pub const ERROR_PREFIX: &str = "Error:";

const FLOWCHART_LABEL: &str = "flowchart";
const SEQUENCE_LABEL: &str = "sequence";
const CLASS_LABEL: &str = "class";

/// The Mermaid diagram syntaxes the model can be asked to produce.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
	#[default]
	Flowchart,
	Sequence,
	Class,
}

impl DiagramType {
	/// All supported diagram types, in the order they are offered to the user.
	pub const ALL: [DiagramType; 3] = [Self::Flowchart, Self::Sequence, Self::Class];

	/// The label used in prompts, forms and on the command line.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Flowchart => FLOWCHART_LABEL,
			Self::Sequence => SEQUENCE_LABEL,
			Self::Class => CLASS_LABEL,
		}
	}
}

impl Display for DiagramType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

impl FromStr for DiagramType {
	type Err = DiagramError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			FLOWCHART_LABEL => Ok(Self::Flowchart),
			SEQUENCE_LABEL => Ok(Self::Sequence),
			CLASS_LABEL => Ok(Self::Class),
			_ => Err(DiagramError::UnknownDiagramType(s.to_string())),
		}
	}
}

/// Clap value enum implementation for argument parsing.
impl ValueEnum for DiagramType {
	fn value_variants<'a>() -> &'a [Self] {
		&Self::ALL
	}

	fn to_possible_value(&self) -> Option<PossibleValue> {
		Some(PossibleValue::new(self.label()))
	}
}

/// A single user action: what to draw and how.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiagramRequest {
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub diagram_type: DiagramType,
}

impl DiagramRequest {
	pub fn new(description: impl Into<String>, diagram_type: DiagramType) -> Self {
		Self { description: description.into(), diagram_type }
	}

	/// Whether the description is empty or whitespace only.
	///
	/// Blank requests must never reach the completion client.
	pub fn is_blank(&self) -> bool {
		self.description.trim().is_empty()
	}
}

/// Mermaid source with every code-fence artifact removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiagramSource(String);

impl DiagramSource {
	/// Sanitizes raw completion text into diagram source.
	pub fn from_raw(raw: &str) -> Self {
		Self(sanitize(raw))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The source wrapped in a Mermaid fence, ready to be rendered as a preview.
	pub fn fenced(&self) -> String {
		format!("```mermaid\n{}\n```", self.0)
	}
}

impl Display for DiagramSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Result of running a [`DiagramRequest`] through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramOutcome {
	/// Sanitized diagram source.
	Diagram(DiagramSource),
	/// Displayable failure message, always starting with [`ERROR_PREFIX`].
	Failure(String),
	/// The description was blank; nothing was sent.
	EmptyInput,
}

impl DiagramOutcome {
	/// Builds a failure outcome, adding the [`ERROR_PREFIX`] marker.
	pub fn failure(reason: impl Display) -> Self {
		Self::Failure(format!("{} {}", ERROR_PREFIX, reason))
	}

	/// Classifies already-sanitized text, treating anything carrying the error marker as a
	/// failure.
	pub fn from_text(text: String) -> Self {
		if text.starts_with(ERROR_PREFIX) {
			Self::Failure(text)
		} else {
			Self::Diagram(DiagramSource(text))
		}
	}

	/// Inline displayable text of the outcome.
	pub fn render_text(&self) -> &str {
		match self {
			Self::Diagram(source) => source.as_str(),
			Self::Failure(msg) => msg.as_str(),
			Self::EmptyInput => EMPTY_INPUT_WARNING,
		}
	}

	pub fn is_diagram(&self) -> bool {
		matches!(self, Self::Diagram(_))
	}
}

/// Warning shown when the user triggers generation without a description.
pub const EMPTY_INPUT_WARNING: &str = "Please enter a description";

/// Any failure of the remote completion call.
#[derive(Debug, thiserror::Error)]
pub enum CompletionFailure {
	/// Transport, auth, quota or payload error reported by the client.
	Api(#[from] OpenAIError),
	/// The response carried no choices.
	NoChoices,
	/// The first choice had no message content.
	MissingContent,
}

impl Display for CompletionFailure {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Api(e) => write!(f, "{}", e),
			Self::NoChoices => write!(f, "completion response contained no choices"),
			Self::MissingContent => write!(f, "completion response contained no message content"),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
	/// A diagram type label outside of the supported set.
	UnknownDiagramType(String),
	/// Bad configuration
	Config(String),
	Io(#[from] std::io::Error),
	Template(#[from] handlebars::TemplateError),
	Render(#[from] handlebars::RenderError),
	/// Blank description given on the command line.
	EmptyInput,
	/// Generation failed with the given displayable message.
	Generation(String),
}

impl Display for DiagramError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnknownDiagramType(label) => write!(
				f,
				"Unknown diagram type: {} \n Valid types: {} | {} | {}",
				label, FLOWCHART_LABEL, SEQUENCE_LABEL, CLASS_LABEL
			),
			Self::Config(msg) => write!(f, "Bad configuration: {}", msg),
			Self::Io(e) => write!(f, "IO error: {}", e),
			Self::Template(e) => write!(f, "Template error: {}", e),
			Self::Render(e) => write!(f, "Render error: {}", e),
			Self::EmptyInput => write!(f, "{}", EMPTY_INPUT_WARNING),
			Self::Generation(msg) => write!(f, "{}", msg),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn diagram_type_labels_round_trip() {
		for diagram_type in DiagramType::ALL {
			assert_eq!(diagram_type.label().parse::<DiagramType>().unwrap(), diagram_type);
		}
	}

	#[test]
	fn unknown_diagram_type_is_rejected() {
		assert!(matches!(
			"gantt".parse::<DiagramType>(),
			Err(DiagramError::UnknownDiagramType(label)) if label == "gantt"
		));
		assert!("Flowchart".parse::<DiagramType>().is_err());
	}

	#[test]
	fn blank_requests() {
		assert!(DiagramRequest::new("", DiagramType::Flowchart).is_blank());
		assert!(DiagramRequest::new(" \n\t ", DiagramType::Class).is_blank());
		assert!(!DiagramRequest::new(" a ", DiagramType::Sequence).is_blank());
	}

	#[test]
	fn failure_carries_error_prefix() {
		let outcome = DiagramOutcome::failure("quota exceeded");
		assert_eq!(outcome.render_text(), "Error: quota exceeded");
		assert!(!outcome.is_diagram());
	}

	#[test]
	fn text_with_error_marker_is_a_failure() {
		assert!(matches!(
			DiagramOutcome::from_text("Error: nope".to_string()),
			DiagramOutcome::Failure(_)
		));
		assert!(DiagramOutcome::from_text("graph TD\nA-->B".to_string()).is_diagram());
	}

	#[test]
	fn fenced_preview() {
		let source = DiagramSource::from_raw("graph TD\nA-->B");
		assert_eq!(source.fenced(), "```mermaid\ngraph TD\nA-->B\n```");
	}
}
