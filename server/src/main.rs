use anyhow::Context;

use pixel_pets_server::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    rolling_logger::init_logger(&config.log_dir, "pixel-pets").context("Failed to initialize logger")?;
    config.log_summary();

    pixel_pets_server::run(config).await
}
