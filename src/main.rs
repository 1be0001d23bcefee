//! rfctl - Main entry point

use clap::Parser;
use log::{debug, info};

use rfctl::{run_get_command, ApiUrlResolver, Cli, RfClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting rfctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: api_url={:?}, batch={}, command={:?}",
        cli.api_url, cli.batch, cli.command
    );

    let base_url = ApiUrlResolver::resolve(cli.api_url.as_deref())?;
    let client = RfClient::new(base_url);

    run_get_command(&client, &cli).await?;

    info!("Completed successfully");
    Ok(())
}
