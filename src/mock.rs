use std::sync::{
	atomic::{AtomicUsize, Ordering},
	Mutex,
};

use async_openai::error::OpenAIError;
use async_trait::async_trait;

use crate::{
	completion::{Completer, CompletionRequest},
	types::CompletionFailure,
};

/// Canned behaviour of a [`MockCompleter`].
#[derive(Debug, Clone)]
pub enum MockReply {
	Text(String),
	ApiError(String),
	NoChoices,
	MissingContent,
}

/// [`Completer`] returning a canned reply and recording every request it receives.
#[derive(Debug)]
pub struct MockCompleter {
	reply: MockReply,
	calls: AtomicUsize,
	requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompleter {
	pub fn new(reply: MockReply) -> Self {
		Self { reply, calls: AtomicUsize::new(0), requests: Mutex::new(vec![]) }
	}

	pub fn replying(text: &str) -> Self {
		Self::new(MockReply::Text(text.to_string()))
	}

	pub fn failing(msg: &str) -> Self {
		Self::new(MockReply::ApiError(msg.to_string()))
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn last_request(&self) -> Option<CompletionRequest> {
		self.requests.lock().unwrap().last().cloned()
	}
}

#[async_trait]
impl Completer for MockCompleter {
	async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionFailure> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().unwrap().push(request.clone());

		match &self.reply {
			MockReply::Text(text) => Ok(text.clone()),
			MockReply::ApiError(msg) =>
				Err(CompletionFailure::Api(OpenAIError::InvalidArgument(msg.clone()))),
			MockReply::NoChoices => Err(CompletionFailure::NoChoices),
			MockReply::MissingContent => Err(CompletionFailure::MissingContent),
		}
	}
}
