mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging()?;

    let config = Arc::new(Config::from_env()?);

    tracing::info!(
        "Starting snackbot with {} nickname values",
        config.nickname_pool.values().len()
    );

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(config.clone()).await?;

    // Start the scheduler before the gateway blocks the main task
    let state = AppState::new(config, discord_http);
    scheduler::start_scheduler(state).await?;

    bot::start::start_bot(bot_client).await
}
