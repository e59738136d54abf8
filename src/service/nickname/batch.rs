use dioxus_logger::tracing;
use rand::Rng;
use serde_json::json;

use crate::{
    error::AppError,
    model::{
        batch::{BatchOptions, BatchResult, OwnerSuggestion},
        member::GuildMember,
        policy::{BattlePair, ValuePool},
    },
    service::{
        discord::{DirectMessenger, MemberSource, NicknameMutator, PermissionOracle},
        log::{LogCategory, LogSink},
        nickname::policy::{draw_policy, ValueSelector},
    },
};

/// Audit log reason attached to every nickname change made by a batch.
const RENAME_REASON: &str = "Snackbot nickname lottery";

/// Service renaming all eligible members of a guild in one batch.
///
/// Members are processed sequentially and each nickname change is awaited before the
/// next one starts, so the battle allocator always sees up-to-date counts. All state
/// of a run lives in the run itself; runs for different guilds are independent.
pub struct NicknameBatchService<'a> {
    mutator: &'a dyn NicknameMutator,
    messenger: &'a dyn DirectMessenger,
    log: &'a dyn LogSink,
    pool: &'a ValuePool,
    battle: &'a BattlePair,
}

impl<'a> NicknameBatchService<'a> {
    /// Creates a new NicknameBatchService instance.
    ///
    /// # Arguments
    /// - `mutator` - Applies nickname changes
    /// - `messenger` - Sends the owner a suggestion when they cannot be renamed
    /// - `log` - Sink for batch events
    /// - `pool` - Values drawn from by the random and group policies
    /// - `battle` - The two contenders used when a battle is drawn
    pub fn new(
        mutator: &'a dyn NicknameMutator,
        messenger: &'a dyn DirectMessenger,
        log: &'a dyn LogSink,
        pool: &'a ValuePool,
        battle: &'a BattlePair,
    ) -> Self {
        Self {
            mutator,
            messenger,
            log,
            pool,
            battle,
        }
    }

    /// Runs a batch for a guild, reading members and permission from Discord.
    ///
    /// The blacklist is checked before any Discord request is made and the permission
    /// before the member list is read.
    ///
    /// # Returns
    /// - `Ok(BatchResult)` - Batch completed, possibly with per-member failures, or was
    ///   refused by a precondition
    /// - `Err(AppError)` - The permission or the member list could not be read
    pub async fn run_for_guild<R: Rng + Send>(
        &self,
        source: &dyn MemberSource,
        oracle: &dyn PermissionOracle,
        mut options: BatchOptions,
        rng: &mut R,
    ) -> Result<BatchResult, AppError> {
        if options.is_blacklisted() {
            return Ok(self.abort(&options).await);
        }

        options.permission_granted = oracle.can_manage_nicknames().await?;
        if !options.permission_granted {
            return Ok(self.abort(&options).await);
        }

        let roster = source.fetch_roster().await?;

        Ok(self
            .run_batch(&roster.actor, &roster.members, &options, rng)
            .await)
    }

    /// Renames `actor` and every eligible entry of `members`.
    ///
    /// The actor is always processed first and is never subject to the hierarchy
    /// check. Entries of `members` ranked at or above the actor are skipped; an entry
    /// equal to the actor itself is ignored.
    pub async fn run_batch<R: Rng + Send>(
        &self,
        actor: &GuildMember,
        members: &[GuildMember],
        options: &BatchOptions,
        rng: &mut R,
    ) -> BatchResult {
        if precondition_error(options).is_some() {
            return self.abort(options).await;
        }

        let policy = match &options.forced_policy {
            Some(policy) => policy.clone(),
            None => draw_policy(rng, self.pool, self.battle),
        };
        let kind = policy.kind();
        let mut selector = ValueSelector::new(policy);
        let mut result = BatchResult {
            policy: Some(kind),
            ..BatchResult::default()
        };

        tracing::debug!(
            "Starting {} nickname batch for guild {} with {} members",
            kind,
            options.guild_id,
            members.len()
        );

        let value = selector.next_value(rng);
        self.apply(options.guild_id, actor, &value, &mut result).await;

        for member in members {
            if member.user_id == actor.user_id {
                continue;
            }

            if member.rank >= actor.rank {
                if options.owner_escalation && member.user_id == options.owner_id {
                    let value = selector.suggest_value(rng);
                    result.owner_suggestion =
                        Some(self.suggest_to_owner(options.guild_id, member, value).await);
                }

                tracing::trace!(
                    guild_owner = member.owner,
                    "Skipping {} ({}) in guild {}: rank {} >= {}",
                    member.display_name,
                    member.user_id,
                    options.guild_id,
                    member.rank,
                    actor.rank
                );
                result.skipped += 1;
                continue;
            }

            let value = selector.next_value(rng);
            self.apply(options.guild_id, member, &value, &mut result).await;
        }

        result.uniform_value = selector.uniform_value();
        result.battle = selector.battle_tally();

        tracing::debug!(
            "Nickname batch for guild {} considered {} members",
            options.guild_id,
            result.total()
        );

        self.log
            .record(
                &result.summary(),
                LogCategory::Nickname,
                json!({
                    "guild_id": options.guild_id,
                    "policy": result.policy,
                    "applied": result.applied,
                    "failed": result.failed,
                    "skipped": result.skipped,
                    "uniform_value": result.uniform_value,
                    "battle": result.battle,
                }),
            )
            .await;

        result
    }

    /// Applies one nickname and records the outcome.
    async fn apply(
        &self,
        guild_id: u64,
        member: &GuildMember,
        value: &str,
        result: &mut BatchResult,
    ) {
        match self
            .mutator
            .set_nickname(member.user_id, value, RENAME_REASON)
            .await
        {
            Ok(()) => {
                tracing::debug!(
                    bot = member.bot,
                    "Renamed {} ({}) to {} in guild {}",
                    member.display_name,
                    member.user_id,
                    value,
                    guild_id
                );
                result.applied += 1;
            }
            Err(e) => {
                let error = format!(
                    "Failed to rename {} ({}) to {}: {}",
                    member.display_name, member.user_id, value, e
                );
                self.log
                    .record(
                        &error,
                        LogCategory::Error,
                        json!({
                            "guild_id": guild_id,
                            "user_id": member.user_id,
                            "attempted": value,
                        }),
                    )
                    .await;
                result.failed += 1;
                result.errors.push(error);
            }
        }
    }

    /// Sends the owner the nickname they would have received.
    async fn suggest_to_owner(
        &self,
        guild_id: u64,
        owner: &GuildMember,
        value: String,
    ) -> OwnerSuggestion {
        let delivered = match self.messenger.suggest_nickname(owner.user_id, &value).await {
            Ok(()) => true,
            Err(e) => {
                self.log
                    .record(
                        &format!("Failed to send nickname suggestion to owner: {}", e),
                        LogCategory::Error,
                        json!({ "guild_id": guild_id, "user_id": owner.user_id, "value": value }),
                    )
                    .await;
                false
            }
        };

        OwnerSuggestion {
            user_id: owner.user_id,
            value,
            delivered,
        }
    }

    /// Reports a refused batch once and returns its empty result.
    async fn abort(&self, options: &BatchOptions) -> BatchResult {
        let reason = precondition_error(options)
            .unwrap_or_else(|| format!("Nickname batch refused for guild {}", options.guild_id));

        self.log
            .record(
                &reason,
                LogCategory::Nickname,
                json!({ "guild_id": options.guild_id }),
            )
            .await;

        BatchResult::aborted(reason)
    }
}

/// Returns why a batch may not run at all, blacklist first.
fn precondition_error(options: &BatchOptions) -> Option<String> {
    if options.is_blacklisted() {
        return Some(format!(
            "Guild {} is blacklisted; no nicknames were changed",
            options.guild_id
        ));
    }

    if !options.permission_granted {
        return Some(format!(
            "Missing Manage Nicknames permission in guild {}",
            options.guild_id
        ));
    }

    None
}
