use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildMemberUpdateEvent, Member, Message, Ready};
use serenity::async_trait;

use crate::{config::Config, service::nickname::RevertLedger};

pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    /// Nicknames written by the monitor, kept across member update events.
    pub revert_ledger: RevertLedger,
}

impl Handler {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            revert_ledger: RevertLedger::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(
            &self.config,
            &self.revert_ledger,
            ctx,
            old,
            new,
            event,
        )
        .await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.config, ctx, message).await;
    }
}
