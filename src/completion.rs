//! The boundary with the remote chat-completion service.

use std::sync::Arc;

use async_openai::{
	config::OpenAIConfig,
	types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
	Client,
};
use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::{config::Settings, types::CompletionFailure};

/// Sampling temperature. Low randomness favors well-formed structured output.
pub const TEMPERATURE: f32 = 0.3;
/// Upper bound on generated tokens per diagram.
pub const MAX_TOKENS: u16 = 600;

/// A single completion call, built fresh for every user action.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
	prompt: String,
	model: &'static str,
	temperature: f32,
	max_tokens: u16,
}

impl CompletionRequest {
	pub fn new(prompt: String, model: &'static str) -> Self {
		Self { prompt, model, temperature: TEMPERATURE, max_tokens: MAX_TOKENS }
	}

	pub fn prompt(&self) -> &str {
		&self.prompt
	}

	pub fn model(&self) -> &'static str {
		self.model
	}

	pub fn temperature(&self) -> f32 {
		self.temperature
	}

	pub fn max_tokens(&self) -> u16 {
		self.max_tokens
	}
}

/// Anything able to turn a [`CompletionRequest`] into generated text.
///
/// Implementations return the raw text of the first choice and report every failure mode as a
/// [`CompletionFailure`] instead of panicking.
#[async_trait]
pub trait Completer: Send + Sync {
	async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionFailure>;
}

#[async_trait]
impl<T: Completer + ?Sized> Completer for Arc<T> {
	async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionFailure> {
		(**self).complete(request).await
	}
}

/// [`Completer`] backed by Groq's OpenAI-compatible chat completions API.
pub struct GroqCompleter {
	client: Client<OpenAIConfig>,
}

impl GroqCompleter {
	pub fn new(settings: &Settings) -> Self {
		Self { client: Client::with_config(settings.openai_config()) }
	}
}

#[async_trait]
impl Completer for GroqCompleter {
	#[instrument(skip(self, request), fields(model = request.model()))]
	async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionFailure> {
		let message = ChatCompletionRequestUserMessageArgs::default()
			.content(request.prompt().to_string())
			.build()?;

		let chat_request = CreateChatCompletionRequestArgs::default()
			.model(request.model())
			.messages(vec![message.into()])
			.temperature(request.temperature())
			.max_tokens(request.max_tokens())
			.build()?;

		let response = self.client.chat().create(chat_request).await.map_err(|e| {
			error!("Failed to prompt completion endpoint: {}", e);
			CompletionFailure::from(e)
		})?;

		debug!(choices = response.choices.len(), "received completion response");

		response
			.choices
			.into_iter()
			.next()
			.ok_or(CompletionFailure::NoChoices)?
			.message
			.content
			.ok_or(CompletionFailure::MissingContent)
	}
}
