use tracing::{debug, error, instrument, trace, warn};

use crate::{
	completion::{Completer, CompletionRequest},
	models::{Models, Token},
	prompt::build_prompt,
	sanitize::sanitize,
	types::{DiagramOutcome, DiagramRequest},
};

/// The pipeline that drives every diagram generation.
///
/// Binds a [`Completer`] to the model it should be prompted with. It holds no mutable state, so a
/// single instance can serve any number of independent requests.
#[derive(Debug)]
pub struct DiagramWeaver<C: Completer> {
	completer: C,
	model: Models,
}

impl<C: Completer> DiagramWeaver<C> {
	pub fn new(completer: C, model: Models) -> Self {
		Self { completer, model }
	}

	pub fn model(&self) -> Models {
		self.model
	}

	pub fn completer(&self) -> &C {
		&self.completer
	}

	/// Generate Mermaid source for `request`.
	///
	/// Blank descriptions short-circuit with [`DiagramOutcome::EmptyInput`] without calling the
	/// completer. Completion failures never escape: they come back as
	/// [`DiagramOutcome::Failure`] carrying the `Error:` marker.
	#[instrument(skip(self, request), fields(diagram_type = %request.diagram_type))]
	pub async fn weave(&self, request: &DiagramRequest) -> DiagramOutcome {
		if request.is_blank() {
			warn!("Refusing to generate a diagram from a blank description");
			return DiagramOutcome::EmptyInput
		}

		let prompt = build_prompt(&request.description, request.diagram_type);

		trace!(prompt_tokens = prompt.count_tokens(), "Built prompt: {}", prompt);

		let completion_request = CompletionRequest::new(prompt, self.model.name());

		match self.completer.complete(&completion_request).await {
			Ok(raw) => {
				debug!("Raw completion: {:?}", raw);
				DiagramOutcome::from_text(sanitize(&raw))
			},
			Err(e) => {
				error!("Failed to generate diagram: {}", e);
				DiagramOutcome::failure(e)
			},
		}
	}
}
