//! Turn natural-language descriptions of a process into Mermaid diagrams.
//!
//! Diagram Weaver asks a hosted LLM (Groq's OpenAI-compatible chat completions API by default) to
//! translate a free-text description into Mermaid flowchart, sequence or class diagram source,
//! then strips the Markdown fences models like to wrap their answers in.
//!
//! The pipeline is a single linear pass, driven by [`DiagramWeaver`]:
//!
//! 1. [`prompt::build_prompt`] builds a constrained prompt from the description and the
//!    [`DiagramType`].
//! 2. A [`Completer`] sends it to the completion endpoint. [`GroqCompleter`] is the default
//!    implementation.
//! 3. [`sanitize::sanitize`] removes the code fences from the returned text.
//!
//! Every failure of the remote call is converted into a [`DiagramOutcome::Failure`] whose text
//! starts with `Error:`. Nothing is cached, retried or remembered between calls.
//!
//! You must set the following environment variables (a `.env` file works too):
//!
//! - `GROQ_API_KEY`
//!
//! And optionally:
//!
//! - `GROQ_API_BASE`
//! - `DIAGRAM_WEAVER_MODEL`
//! - `DIAGRAM_WEAVER_ADDR`
//!
//! # Example
//!
//! ```no_run
//! use diagram_weaver::{DiagramOutcome, DiagramRequest, DiagramType, DiagramWeaver, GroqCompleter, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! 	let settings = Settings::from_env()?;
//! 	let weaver = DiagramWeaver::new(GroqCompleter::new(&settings), settings.model);
//!
//! 	let request = DiagramRequest::new(
//! 		"A user logs in, the system validates credentials, if valid show dashboard, else show error message",
//! 		DiagramType::Flowchart,
//! 	);
//!
//! 	match weaver.weave(&request).await {
//! 		DiagramOutcome::Diagram(source) => println!("{}", source.fenced()),
//! 		other => eprintln!("{}", other.render_text()),
//! 	}
//!
//! 	Ok(())
//! }
//! ```

pub mod architecture;
pub mod completion;
pub mod config;
pub mod page;
pub mod prompt;
pub mod sanitize;
pub mod service;
pub mod types;
pub mod weaver;

#[cfg(test)]
mod mock;

pub use completion::{Completer, CompletionRequest, GroqCompleter};
pub use config::Settings;
pub use types::{
	CompletionFailure, DiagramError, DiagramOutcome, DiagramRequest, DiagramSource, DiagramType,
};
pub use weaver::DiagramWeaver;

pub mod models {
	use clap::{builder::PossibleValue, ValueEnum};
	use tiktoken_rs::p50k_base;

	/// Tokens are an LLM concept which represent normally a third of a word (or 75%).
	pub type Tokens = usize;

	/// Tokens are an LLM concept which represent normally a third of a word (or 75%).
	///
	/// This trait auto implements an estimate of the number of tokens in a string. The estimate
	/// uses OpenAI's `p50k_base` encoding, which is close enough for logging purposes with other
	/// model families.
	pub trait Token: ToString {
		/// Estimate the number of tokens in the string.
		///
		/// Returns `0` if the encoding cannot be loaded.
		fn count_tokens(&self) -> Tokens {
			p50k_base()
				.map(|bpe| bpe.encode_with_special_tokens(&self.to_string()).len())
				.unwrap_or_default()
		}
	}

	/// Implement the trait for String.
	///
	/// This is done so that we can call `count_tokens` on a String.
	impl Token for String {}

	/// The language models available on the completion endpoint.
	#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
	pub enum Models {
		#[default]
		Llama33Versatile,
		Llama31Instant,
	}

	/// Clap value enum implementation for argument parsing.
	impl ValueEnum for Models {
		fn value_variants<'a>() -> &'a [Self] {
			&[Self::Llama33Versatile, Self::Llama31Instant]
		}

		fn to_possible_value(&self) -> Option<PossibleValue> {
			Some(PossibleValue::new(self.name()))
		}
	}

	impl Models {
		/// Get the model name.
		pub fn name(&self) -> &'static str {
			match self {
				Self::Llama33Versatile => "llama-3.3-70b-versatile",
				Self::Llama31Instant => "llama-3.1-8b-instant",
			}
		}
	}
}
