//! Interfaces between the bot's services and Discord.
//!
//! The nickname engine only ever talks to Discord through these traits, which keeps
//! role and permission semantics out of the engine and lets tests substitute
//! recording fakes. `SerenityGuildGateway` implements all of them for one guild.

pub mod guild;
pub mod rank;

#[cfg(test)]
mod test;

use serenity::async_trait;

use crate::{
    error::{AppError, MutationError},
    model::member::{GuildMember, GuildRoster},
};

pub use guild::SerenityGuildGateway;

/// Read access to a guild's members.
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Fetches every member of the guild along with the bot's own member.
    async fn fetch_roster(&self) -> Result<GuildRoster, AppError>;

    /// Fetches the bot's own member.
    async fn fetch_actor(&self) -> Result<GuildMember, AppError>;

    /// Fetches a single member.
    async fn fetch_member(&self, user_id: u64) -> Result<GuildMember, AppError>;
}

/// Whether the bot may change nicknames in the guild.
#[async_trait]
pub trait PermissionOracle: Send + Sync {
    async fn can_manage_nicknames(&self) -> Result<bool, AppError>;
}

/// Changes a member's nickname.
#[async_trait]
pub trait NicknameMutator: Send + Sync {
    async fn set_nickname(
        &self,
        user_id: u64,
        nickname: &str,
        reason: &str,
    ) -> Result<(), MutationError>;
}

/// Out-of-band channel for suggesting a nickname to a member who can't be renamed.
#[async_trait]
pub trait DirectMessenger: Send + Sync {
    async fn suggest_nickname(&self, user_id: u64, nickname: &str) -> Result<(), MutationError>;
}
