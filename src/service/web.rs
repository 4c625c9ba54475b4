use std::{net::SocketAddr, sync::Arc};

use async_trait::async_trait;
use axum::{
	extract::State,
	http::StatusCode,
	response::{Html, IntoResponse, Response},
	routing::{get, post},
	Form, Router,
};
use tracing::{error, info};

use crate::{
	completion::Completer,
	page::Page,
	service::Server,
	types::{DiagramError, DiagramRequest},
	weaver::DiagramWeaver,
};

/// Serves the generator page over HTTP.
///
/// - `GET /` renders the empty form.
/// - `POST /generate` takes a form-encoded [`DiagramRequest`] and renders the outcome.
/// - `GET /health` answers `ok`.
pub struct WebService<C: Completer> {
	addr: SocketAddr,
	weaver: DiagramWeaver<C>,
}

impl<C: Completer> WebService<C> {
	pub fn new(addr: SocketAddr, weaver: DiagramWeaver<C>) -> Self {
		Self { addr, weaver }
	}
}

struct AppState<C: Completer> {
	weaver: DiagramWeaver<C>,
	page: Page,
}

/// Builds the router with shared, read-only state.
pub fn router<C: Completer + 'static>(weaver: DiagramWeaver<C>) -> Result<Router, DiagramError> {
	let state = Arc::new(AppState { weaver, page: Page::new()? });

	Ok(Router::new()
		.route("/", get(index::<C>))
		.route("/generate", post(generate::<C>))
		.route("/health", get(health))
		.with_state(state))
}

async fn index<C: Completer>(
	State(state): State<Arc<AppState<C>>>,
) -> Result<Html<String>, DiagramError> {
	Ok(Html(state.page.render(None, None)?))
}

async fn generate<C: Completer>(
	State(state): State<Arc<AppState<C>>>,
	Form(request): Form<DiagramRequest>,
) -> Result<Html<String>, DiagramError> {
	let outcome = state.weaver.weave(&request).await;
	let result = if outcome.is_diagram() { "success" } else { "failure" };

	info!(diagram_type = %request.diagram_type, result, "handled generate request");

	Ok(Html(state.page.render(Some(&request), Some(&outcome))?))
}

async fn health() -> &'static str {
	"ok"
}

impl IntoResponse for DiagramError {
	fn into_response(self) -> Response {
		error!("Failed to render page: {}", self);
		(StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
	}
}

#[async_trait]
impl<C: Completer + 'static> Server for WebService<C> {
	async fn serve(self) -> Result<(), DiagramError> {
		let addr = self.addr;
		let app = router(self.weaver)?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		info!(task = "web_setup", result = "success", %addr, "diagram generator listening");

		axum::serve(listener, app).await?;

		Ok(())
	}
}
