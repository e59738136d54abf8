use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client and extracts its HTTP client.
///
/// # Arguments
/// - `config` - Bot configuration, shared with the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - The client to start and its HTTP client
/// - `Err(AppError)` - The client could not be built
pub async fn init_bot(config: Arc<Config>) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(config.clone()))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the gateway connection shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
