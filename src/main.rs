use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trending_scraper::cli::Cli;
use trending_scraper::config::{validate, Config, ConfigManager, FileConfigManager};
use trending_scraper::{pipeline, HttpFetcher};

// a single GET is the only await, so one thread is plenty
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout carries the table, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FileConfigManager::new(path.clone())
            .load_config()
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    cli.apply(&mut config);
    validate(&config).context("invalid configuration")?;

    let fetcher = HttpFetcher::new(&config.source).context("building HTTP client")?;
    let table = pipeline::run(&config, &fetcher)
        .await
        .context("scraping trending repositories failed")?;

    tracing::info!(
        "Done: {} repositories written to {}",
        table.len(),
        config.output.path.display()
    );
    Ok(())
}
