//! Process configuration, read once at startup.
//!
//! `.env` is loaded by the binary before [`Settings::from_env`] is called, so values there
//! behave exactly like exported variables.

use std::{fmt::Debug, net::SocketAddr};

use async_openai::config::OpenAIConfig;
use clap::ValueEnum;
use tracing::warn;

use crate::{models::Models, types::DiagramError};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const API_BASE_VAR: &str = "GROQ_API_BASE";
pub const MODEL_VAR: &str = "DIAGRAM_WEAVER_MODEL";
pub const ADDR_VAR: &str = "DIAGRAM_WEAVER_ADDR";

/// Groq serves an OpenAI-compatible API under this base.
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8501";

/// Read-only settings shared by the completion client and the servers.
#[derive(Clone)]
pub struct Settings {
	/// `None` when unset or empty. Calls then fail with an authentication error.
	pub api_key: Option<String>,
	pub api_base: String,
	pub model: Models,
	/// Listen address of the web page.
	pub addr: SocketAddr,
}

impl Settings {
	/// Reads settings from the process environment.
	pub fn from_env() -> Result<Self, DiagramError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads settings through `lookup`, falling back to defaults for unset values.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DiagramError> {
		let api_key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty());
		if api_key.is_none() {
			warn!(task = "config", "{} is not set, completion calls will fail", API_KEY_VAR);
		}

		let api_base = lookup(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string());

		let model = match lookup(MODEL_VAR) {
			Some(name) => <Models as ValueEnum>::from_str(&name, true).map_err(|_| {
				DiagramError::Config(format!("{} has unsupported model: {}", MODEL_VAR, name))
			})?,
			None => Models::default(),
		};

		let addr = lookup(ADDR_VAR)
			.unwrap_or_else(|| DEFAULT_ADDR.to_string())
			.parse::<SocketAddr>()
			.map_err(|e| DiagramError::Config(format!("{} is not a socket address: {}", ADDR_VAR, e)))?;

		Ok(Self { api_key, api_base, model, addr })
	}

	/// Client configuration for the completion endpoint.
	pub fn openai_config(&self) -> OpenAIConfig {
		OpenAIConfig::new()
			.with_api_base(&self.api_base)
			.with_api_key(self.api_key.clone().unwrap_or_default())
	}
}

impl Debug for Settings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Settings")
			.field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
			.field("api_base", &self.api_base)
			.field("model", &self.model)
			.field("addr", &self.addr)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn settings(vars: &[(&str, &str)]) -> Result<Settings, DiagramError> {
		let vars: HashMap<String, String> =
			vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		Settings::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults_apply_when_unset() {
		let settings = settings(&[]).unwrap();
		assert_eq!(settings.api_key, None);
		assert_eq!(settings.api_base, DEFAULT_API_BASE);
		assert_eq!(settings.model, Models::Llama33Versatile);
		assert_eq!(settings.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
	}

	#[test]
	fn reads_all_values() {
		let settings = settings(&[
			(API_KEY_VAR, "gsk_secret"),
			(API_BASE_VAR, "http://localhost:9999/v1"),
			(MODEL_VAR, "llama-3.1-8b-instant"),
			(ADDR_VAR, "0.0.0.0:8080"),
		])
		.unwrap();

		assert_eq!(settings.api_key.as_deref(), Some("gsk_secret"));
		assert_eq!(settings.api_base, "http://localhost:9999/v1");
		assert_eq!(settings.model, Models::Llama31Instant);
		assert_eq!(settings.addr.port(), 8080);
	}

	#[test]
	fn blank_api_key_counts_as_missing() {
		assert_eq!(settings(&[(API_KEY_VAR, "  ")]).unwrap().api_key, None);
	}

	#[test]
	fn rejects_bad_values() {
		assert!(matches!(settings(&[(MODEL_VAR, "gpt-2")]), Err(DiagramError::Config(_))));
		assert!(matches!(settings(&[(ADDR_VAR, "nowhere")]), Err(DiagramError::Config(_))));
	}

	#[test]
	fn debug_redacts_api_key() {
		let settings = settings(&[(API_KEY_VAR, "gsk_secret")]).unwrap();
		let debug = format!("{:?}", settings);
		assert!(!debug.contains("gsk_secret"));
		assert!(debug.contains("<redacted>"));
	}
}
