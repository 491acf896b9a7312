use clap::Parser;
use inkboard::config::{Args, Config};
use log::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = Config::from(Args::parse());
    if cfg.api_token.is_none() {
        warn!("[main] AIRTABLE_TOKEN not set; requests will fail until it is provided");
    }

    inkboard::server::serve(&cfg).await
}
