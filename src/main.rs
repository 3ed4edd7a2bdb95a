use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_console::api::HttpApiClient;
use course_console::config::ConsoleConfig;
use course_console::console::{self, Cli};
use course_console::error::{AppError, error_message};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_console=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match start(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Validation(errors)) => {
            eprintln!("The form has errors:");
            eprint!("{}", console::field_errors(&errors));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", error_message(Some(&e), "An unexpected error occurred"));
            ExitCode::FAILURE
        }
    }
}

async fn start(cli: Cli) -> Result<(), AppError> {
    let config = ConsoleConfig::new_from_env()?.with_override(cli.api_url)?;
    debug!("using backend at {}", config.api_base_url);

    let client = HttpApiClient::new(config)?;
    console::run(Arc::new(client), cli.command).await
}
