use std::{error::Error, net::SocketAddr};

use clap::{Parser, Subcommand};
use diagram_weaver::{
	models::Models,
	service::{Server, TerminalService, WebService},
	DiagramRequest, DiagramType, DiagramWeaver, GroqCompleter, Settings,
};
use tracing::{info, Level};
use tracing_subscriber::fmt;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// LLM model to use. Overrides `DIAGRAM_WEAVER_MODEL`.
	#[arg(long, value_enum)]
	model: Option<Models>,
	/// Log level
	#[arg(long, default_value = "info")]
	log_level: Level,
	#[command(subcommand)]
	run_as: RunAs,
}

/// Determines whether to run the application as the [`WebService`] or the [`TerminalService`].
#[derive(Subcommand, Debug)]
enum RunAs {
	/// Serve the generator page.
	Serve {
		/// Listen address. Overrides `DIAGRAM_WEAVER_ADDR`.
		#[arg(long)]
		addr: Option<SocketAddr>,
	},
	/// Generate a single diagram and print it.
	Generate {
		#[arg(short, long, value_enum, default_value_t = DiagramType::Flowchart)]
		diagram_type: DiagramType,
		/// Process description. Read from stdin when omitted.
		description: Option<String>,
	},
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	let subscriber = fmt::Subscriber::builder()
		.with_max_level(args.log_level)
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	info!(task = "tracing_setup", result = "success", "tracing successfully set up");

	dotenv::dotenv().ok();

	info!(task = "dotenv_setup", result = "success", "dotenv loaded successfully");

	let mut settings = Settings::from_env()?;
	if let Some(model) = args.model {
		settings.model = model;
	}

	let weaver = DiagramWeaver::new(GroqCompleter::new(&settings), settings.model);

	info!(task = "config_setup", result = "success", model = weaver.model().name(), "settings loaded");

	let result = match args.run_as {
		RunAs::Serve { addr } =>
			WebService::new(addr.unwrap_or(settings.addr), weaver).serve().await,
		RunAs::Generate { diagram_type, description } => {
			let description = match description {
				Some(description) => description,
				None => std::io::read_to_string(std::io::stdin())?,
			};

			TerminalService::new(weaver, DiagramRequest::new(description, diagram_type))
				.serve()
				.await
		},
	};

	if let Err(e) = result {
		eprintln!("{}", e);
		std::process::exit(1);
	}

	Ok(())
}
