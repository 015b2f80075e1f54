use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roomservice_install::acquirer::HttpAcquirer;
use roomservice_install::cli::Args;
use roomservice_install::config::Config;
use roomservice_install::installer::Installer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::embedded().context("Failed to load release metadata")?;
    let acquirer = HttpAcquirer::new()?;

    Installer::new(config, acquirer).run().await?;

    Ok(())
}
