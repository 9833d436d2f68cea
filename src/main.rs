use marypy::app;
use marypy::config::AppConfig;
use std::env;

/// Main entry point for the dashboard server
///
/// Settings come from `MARYPY_*` environment variables; the first two
/// positional arguments override the data path and the bind address.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = AppConfig::from_env_and_args(&args)?;

    log::info!("starting {}", config.title);
    app::run(config).await
}
