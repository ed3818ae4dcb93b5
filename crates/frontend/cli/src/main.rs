//! Terminal raffle client entry point.
mod app;
mod config;
mod messages;
mod terminal;
mod ui;

use std::sync::Arc;

use anyhow::Result;

use app::App;
use config::CliConfig;
use raffle_chain_evm::{EvmConfig, EvmRaffleClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli_config = CliConfig::from_env();
    let evm_config = EvmConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let chain = Arc::new(EvmRaffleClient::new(evm_config)?);

    let (mut tui, _guard) = terminal::init()?;

    App::new(chain, cli_config).run(&mut tui).await
}
