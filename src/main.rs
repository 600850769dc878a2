use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing; RUST_LOG (or .env) overrides the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cdi_tracker=info,reqwest=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("🤖 Starting CDI tracker v{}...", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    let settings = config::Settings::default();

    let outcome = commands::handle_args(&args, &settings).await;
    info!("Run finished: {:?}", outcome);

    outcome.into()
}
