use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing_subscriber::EnvFilter;

use mailpane::{App, Config, HttpMailApi, MailClient};

/// Terminal front end for a REST mail backend.
#[derive(Debug, Parser)]
#[command(name = "mailpane", version, about)]
struct Cli {
    /// Path to a JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend root URL, overriding the config file.
    #[arg(long, env = "MAILPANE_BASE_URL")]
    base_url: Option<String>,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    init_tracing(&config.log_filter);
    tracing::info!(base_url = %config.base_url, "starting mailpane");

    let api = HttpMailApi::from_config(&config).context("failed to create HTTP client")?;
    let app = App::new(MailClient::new(api));

    app.run(BufReader::new(stdin()), stdout()).await
}
