use clap::Parser;
use tracing::{error, info};

mod bootstrap;
mod cli;

use bootstrap::config::{resolve_config, API_KEY_ENV};
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config = resolve_config(&args.overrides(), std::env::var(API_KEY_ENV).ok())?;
    info!(
        base_url = %config.api_base_url,
        page_size = config.page_size,
        documents_dir = %config.documents_dir.display(),
        "configuration resolved"
    );

    let app = bootstrap::wiring::build_app(&config, args.grant_storage)?;

    if let Err(err) = cli::run(app).await {
        error!(error = %err, "interactive loop failed");
        return Err(err);
    }
    Ok(())
}
