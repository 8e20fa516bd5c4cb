use game_app::{api, config::Config, logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init_logging(config.log_format, logging::SERVER_FILTER);

    info!("Starting Game API...");
    api::server::start_server(&config).await
}
