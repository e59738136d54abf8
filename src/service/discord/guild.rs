//! Serenity implementation of the Discord interfaces for a single guild.

use std::{collections::HashMap, sync::Arc};

use dioxus_logger::tracing;
use serenity::{
    all::{CreateMessage, EditMember, GuildId, Member, Role, RoleId, UserId},
    async_trait,
    http::Http,
};
use tokio::sync::OnceCell;

use crate::{
    error::{AppError, MutationError},
    model::member::{GuildMember, GuildRoster},
    service::discord::{
        rank::{can_manage_nicknames, to_guild_member},
        DirectMessenger, MemberSource, NicknameMutator, PermissionOracle,
    },
};

/// Maximum number of members to fetch per API request.
///
/// Discord's API supports up to 1000 members per request.
static MEMBERS_PER_REQUEST: u64 = 1000;

/// Guild roles and owner, the inputs of every rank and permission check.
type Hierarchy = (HashMap<RoleId, Role>, UserId);

/// Discord access for one guild over Serenity's HTTP client.
///
/// The guild's roles and the bot's own member are fetched at most once per gateway,
/// so a gateway is meant to live for a single batch or member update.
///
/// Requires the `GUILD_MEMBERS` privileged intent for member listing.
pub struct SerenityGuildGateway {
    http: Arc<Http>,
    guild_id: GuildId,
    hierarchy: OnceCell<Hierarchy>,
    actor: OnceCell<Member>,
}

impl SerenityGuildGateway {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
            hierarchy: OnceCell::new(),
            actor: OnceCell::new(),
        }
    }

    /// Creates a gateway whose roles, owner and bot member are already known.
    #[cfg(test)]
    pub fn with_snapshot(
        http: Arc<Http>,
        guild_id: u64,
        roles: HashMap<RoleId, Role>,
        owner_id: UserId,
        actor: Member,
    ) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
            hierarchy: OnceCell::new_with(Some((roles, owner_id))),
            actor: OnceCell::new_with(Some(actor)),
        }
    }

    /// Returns the guild's roles and owner, fetching them on first use.
    async fn hierarchy(&self) -> Result<&Hierarchy, AppError> {
        self.hierarchy
            .get_or_try_init(|| self.load_hierarchy())
            .await
    }

    async fn load_hierarchy(&self) -> Result<Hierarchy, AppError> {
        let guild = self
            .http
            .get_guild(self.guild_id)
            .await
            .map_err(|e| source_error(self.guild_id, "guild", e))?;

        Ok((guild.roles, guild.owner_id))
    }

    /// Returns the bot's own member in the guild, fetching it on first use.
    async fn current_member(&self) -> Result<&Member, AppError> {
        self.actor
            .get_or_try_init(|| self.load_current_member())
            .await
    }

    async fn load_current_member(&self) -> Result<Member, AppError> {
        let user = self
            .http
            .get_current_user()
            .await
            .map_err(|e| source_error(self.guild_id, "current user", e))?;

        self.http
            .get_member(self.guild_id, user.id)
            .await
            .map_err(|e| source_error(self.guild_id, "bot member", e))
    }

    /// Fetches all members with pagination.
    async fn all_members(&self) -> Result<Vec<Member>, AppError> {
        let mut all_members = Vec::new();
        let mut after: Option<u64> = None;

        loop {
            let members = self
                .http
                .get_guild_members(self.guild_id, Some(MEMBERS_PER_REQUEST), after)
                .await
                .map_err(|e| source_error(self.guild_id, "members", e))?;

            if members.is_empty() {
                break;
            }

            tracing::debug!(
                "Fetched {} members from Discord API for guild {} (total so far: {})",
                members.len(),
                self.guild_id,
                all_members.len() + members.len()
            );

            after = members.last().map(|m| m.user.id.get());
            let fetched_count = members.len();
            all_members.extend(members);

            // Less than a full page means we've reached the end
            if fetched_count < MEMBERS_PER_REQUEST as usize {
                break;
            }
        }

        Ok(all_members)
    }
}

fn source_error(guild_id: GuildId, what: &str, e: serenity::Error) -> AppError {
    AppError::MemberSource(format!("guild {} {}: {}", guild_id, what, e))
}

#[async_trait]
impl MemberSource for SerenityGuildGateway {
    async fn fetch_roster(&self) -> Result<GuildRoster, AppError> {
        let (roles, owner_id) = self.hierarchy().await?;
        let actor = self.current_member().await?;
        let members = self.all_members().await?;

        let actor_id = actor.user.id;
        let members: Vec<GuildMember> = members
            .iter()
            .filter(|m| m.user.id != actor_id)
            .map(|m| to_guild_member(m, roles, *owner_id))
            .collect();

        tracing::trace!(
            "Fetched roster of {} members for guild {}",
            members.len(),
            self.guild_id
        );

        Ok(GuildRoster {
            actor: to_guild_member(actor, roles, *owner_id),
            members,
        })
    }

    async fn fetch_actor(&self) -> Result<GuildMember, AppError> {
        let (roles, owner_id) = self.hierarchy().await?;
        let actor = self.current_member().await?;

        Ok(to_guild_member(actor, roles, *owner_id))
    }

    async fn fetch_member(&self, user_id: u64) -> Result<GuildMember, AppError> {
        let (roles, owner_id) = self.hierarchy().await?;
        let member = self
            .http
            .get_member(self.guild_id, UserId::new(user_id))
            .await
            .map_err(|e| source_error(self.guild_id, "member", e))?;

        Ok(to_guild_member(&member, roles, *owner_id))
    }
}

#[async_trait]
impl PermissionOracle for SerenityGuildGateway {
    async fn can_manage_nicknames(&self) -> Result<bool, AppError> {
        let (roles, owner_id) = self.hierarchy().await?;
        let actor = self.current_member().await?;

        Ok(can_manage_nicknames(actor, roles, self.guild_id, *owner_id))
    }
}

#[async_trait]
impl NicknameMutator for SerenityGuildGateway {
    async fn set_nickname(
        &self,
        user_id: u64,
        nickname: &str,
        reason: &str,
    ) -> Result<(), MutationError> {
        self.guild_id
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new().nickname(nickname).audit_log_reason(reason),
            )
            .await
            .map(|_| ())
            .map_err(|e| MutationError::Discord(e.to_string()))
    }
}

#[async_trait]
impl DirectMessenger for SerenityGuildGateway {
    async fn suggest_nickname(&self, user_id: u64, nickname: &str) -> Result<(), MutationError> {
        let content = format!(
            "Ik mag jouw bijnaam in deze server niet aanpassen, maar vandaag ben jij **{}**. \
             Verander hem zelf even?",
            nickname
        );

        UserId::new(user_id)
            .direct_message(&self.http, CreateMessage::new().content(content))
            .await
            .map(|_| ())
            .map_err(|e| MutationError::Rejected(e.to_string()))
    }
}
