use std::io::Write;

use async_trait::async_trait;

use crate::{
	completion::Completer,
	service::Server,
	types::{DiagramError, DiagramOutcome, DiagramRequest},
	weaver::DiagramWeaver,
};

/// One-shot generation from the command line.
///
/// The diagram goes to stdout, once as plain source and once wrapped in a Mermaid fence. Warnings
/// and failures are returned as errors for the caller to report.
pub struct TerminalService<C: Completer> {
	weaver: DiagramWeaver<C>,
	request: DiagramRequest,
}

impl<C: Completer> TerminalService<C> {
	pub fn new(weaver: DiagramWeaver<C>, request: DiagramRequest) -> Self {
		Self { weaver, request }
	}
}

/// Writes a successful outcome to `out`, or converts the outcome into the matching error.
pub fn report(outcome: DiagramOutcome, out: &mut impl Write) -> Result<(), DiagramError> {
	match outcome {
		DiagramOutcome::Diagram(source) => {
			writeln!(out, "{}\n\n{}", source, source.fenced())?;
			Ok(())
		},
		DiagramOutcome::Failure(msg) => Err(DiagramError::Generation(msg)),
		DiagramOutcome::EmptyInput => Err(DiagramError::EmptyInput),
	}
}

#[async_trait]
impl<C: Completer + 'static> Server for TerminalService<C> {
	async fn serve(self) -> Result<(), DiagramError> {
		if !self.request.is_blank() {
			eprintln!("🤖 AI is creating your diagram...");
		}

		let outcome = self.weaver.weave(&self.request).await;

		report(outcome, &mut std::io::stdout().lock())
	}
}
