use lambda_runtime::{service_fn, Error};
use tracing::info;

use showtime_picker_lambda_rust::config::Config;
use showtime_picker_lambda_rust::handler::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    // Config
    let config = Config::from_env()?;
    info!(api = %config.api_base_url, timezone = %config.timezone, window_days = config.window_days, "Loaded configuration");

    lambda_runtime::run(service_fn(move |event| handler(event, config.clone()))).await
}
