mod manifest;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pricewatch-cli")]
#[command(about = "Scrapes retailer product pages and forwards price updates")]
struct Cli {
    /// Manifest of product URLs grouped by retailer (overrides URLS_FILE).
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let config = pricewatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let manifest_path = cli.manifest.unwrap_or_else(|| config.urls_path.clone());

    tracing::info!(path = %manifest_path.display(), "loading URL manifest");
    let urls = manifest::load_urls(&manifest_path)?;
    if urls.is_empty() {
        tracing::error!(path = %manifest_path.display(), "manifest contains no URLs; nothing to scrape");
        return Ok(ExitCode::FAILURE);
    }
    tracing::info!(count = urls.len(), "loaded URLs to scrape");

    let summary = run::run(&config, &urls).await?;
    run::log_summary(&summary);

    if summary.all_succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
