//! Presentation layers driving the [`DiagramWeaver`](crate::DiagramWeaver).

use async_trait::async_trait;

use crate::types::DiagramError;

pub mod terminal;
pub mod web;

pub use terminal::TerminalService;
pub use web::WebService;

/// A trait that defines the methods that a server should implement.
///
/// Each implementation owns a [`DiagramWeaver`](crate::DiagramWeaver) and turns user actions into
/// [`DiagramRequest`](crate::DiagramRequest)s.
#[async_trait]
pub trait Server: Sized + Send {
	/// Starts the server.
	async fn serve(self) -> Result<(), DiagramError>;
}
