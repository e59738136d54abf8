//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. The handler logs
//! the connection, lists the guilds the bot is in, and sets the bot's activity.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

use crate::config::Config;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Bot configuration, used to flag blacklisted guilds in the log
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user and guild information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    for guild in &ready.guilds {
        if config.is_blacklisted(guild.id.get()) {
            tracing::info!("Guild {} is blacklisted and will be left alone", guild.id);
        } else {
            tracing::debug!("Serving guild {}", guild.id);
        }
    }

    ctx.set_activity(Some(ActivityData::custom("Frituurt wijsheden")));
}
