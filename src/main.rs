use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manpharma::cli::{self, Cli};
use manpharma::config::Config;
use manpharma::ApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(url) = &cli.backend_url {
        config = config.with_base_url(url)?;
    }

    // Logs go to stderr so rendered cards stay clean on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("using backend {}", config.base_url);

    let api = ApiClient::from_config(&config)?;
    cli::run(cli.command, api).await
}
