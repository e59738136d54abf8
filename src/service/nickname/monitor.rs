use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use dioxus_logger::tracing;
use rand::Rng;
use serde_json::json;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    model::{member::NicknameChange, policy::ValuePool},
    service::{
        discord::{MemberSource, NicknameMutator, PermissionOracle},
        log::{LogCategory, LogSink},
    },
};

/// Audit log reason attached to nickname changes made by the monitor.
const REVERT_REASON: &str = "Snackbot nickname monitor";

/// Which member the monitor watches and where it may act.
pub struct MonitorSettings<'a> {
    pub monitored_user_id: Option<u64>,
    pub blacklist: &'a HashSet<u64>,
}

/// Why a nickname change was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The change belongs to a member that isn't watched.
    NotMonitored,
    /// The nickname didn't actually change.
    Unchanged,
    /// The new nickname is the value the monitor itself last wrote for the member.
    OwnWrite,
    /// The guild is blacklisted.
    Blacklisted,
    /// The bot lacks the Manage Nicknames permission.
    MissingPermission,
}

/// What the monitor did with a nickname change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorOutcome {
    Ignored(IgnoreReason),
    /// The member ranks at or above the bot.
    HierarchyBlocked,
    /// The nickname was overwritten with `value`.
    Reverted { value: String },
    /// Overwriting with `value` failed.
    Failed { value: String, reason: String },
}

/// Nicknames the monitor wrote, keyed by guild and member.
///
/// Discord reports the monitor's own rename as a member update; the ledger lets the
/// monitor recognise that echo. Clones share the same entries.
#[derive(Debug, Default, Clone)]
pub struct RevertLedger {
    written: Arc<RwLock<HashMap<(u64, u64), String>>>,
}

impl RevertLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` as the last nickname written for the member.
    pub async fn remember(&self, guild_id: u64, user_id: u64, value: &str) {
        self.written
            .write()
            .await
            .insert((guild_id, user_id), value.to_string());
    }

    /// Returns true when `nickname` is the last value written for the member.
    ///
    /// A match consumes the entry, so the same nickname chosen later by the member
    /// counts as a real change again.
    pub async fn take_own_write(&self, guild_id: u64, user_id: u64, nickname: Option<&str>) -> bool {
        let Some(nickname) = nickname else {
            return false;
        };

        let mut written = self.written.write().await;
        if written.get(&(guild_id, user_id)).map(String::as_str) == Some(nickname) {
            written.remove(&(guild_id, user_id));
            return true;
        }

        false
    }
}

/// Service that overwrites the watched member's nickname whenever they change it.
///
/// Behaves like a single-member nickname batch with the random policy, triggered by a
/// member update instead of the schedule.
pub struct NicknameMonitorService<'a> {
    mutator: &'a dyn NicknameMutator,
    log: &'a dyn LogSink,
    pool: &'a ValuePool,
    ledger: &'a RevertLedger,
}

impl<'a> NicknameMonitorService<'a> {
    pub fn new(
        mutator: &'a dyn NicknameMutator,
        log: &'a dyn LogSink,
        pool: &'a ValuePool,
        ledger: &'a RevertLedger,
    ) -> Self {
        Self {
            mutator,
            log,
            pool,
            ledger,
        }
    }

    /// Handles an observed nickname change.
    ///
    /// Checks run cheapest first: watched member, actual change, the monitor's own
    /// echo, blacklist, permission, and finally the hierarchy.
    ///
    /// # Returns
    /// - `Ok(MonitorOutcome)` - What was done with the change
    /// - `Err(AppError)` - Permission or member ranks could not be read
    pub async fn on_member_update<R: Rng + Send>(
        &self,
        change: &NicknameChange,
        source: &dyn MemberSource,
        oracle: &dyn PermissionOracle,
        settings: &MonitorSettings<'_>,
        rng: &mut R,
    ) -> Result<MonitorOutcome, AppError> {
        if settings.monitored_user_id != Some(change.user_id) {
            return Ok(MonitorOutcome::Ignored(IgnoreReason::NotMonitored));
        }

        if !change.is_changed() {
            return Ok(MonitorOutcome::Ignored(IgnoreReason::Unchanged));
        }

        if self
            .ledger
            .take_own_write(change.guild_id, change.user_id, change.after.as_deref())
            .await
        {
            tracing::trace!(
                "Nickname of {} in guild {} is the monitor's own write",
                change.user_id,
                change.guild_id
            );
            return Ok(MonitorOutcome::Ignored(IgnoreReason::OwnWrite));
        }

        if settings.blacklist.contains(&change.guild_id) {
            return Ok(MonitorOutcome::Ignored(IgnoreReason::Blacklisted));
        }

        if !oracle.can_manage_nicknames().await? {
            return Ok(MonitorOutcome::Ignored(IgnoreReason::MissingPermission));
        }

        let actor = source.fetch_actor().await?;
        let member = source.fetch_member(change.user_id).await?;

        if member.rank >= actor.rank {
            self.log
                .record(
                    &format!(
                        "Cannot revert nickname of {} ({}): rank {} >= {}",
                        member.display_name, member.user_id, member.rank, actor.rank
                    ),
                    LogCategory::Monitor,
                    json!({
                        "guild_id": change.guild_id,
                        "user_id": change.user_id,
                        "before": change.before,
                        "after": change.after,
                    }),
                )
                .await;
            return Ok(MonitorOutcome::HierarchyBlocked);
        }

        let value = self.pool.pick(rng).to_string();

        match self
            .mutator
            .set_nickname(change.user_id, &value, REVERT_REASON)
            .await
        {
            Ok(()) => {
                self.ledger
                    .remember(change.guild_id, change.user_id, &value)
                    .await;
                self.log
                    .record(
                        &format!(
                            "Reverted nickname of {} ({}) to {}",
                            member.display_name, member.user_id, value
                        ),
                        LogCategory::Monitor,
                        json!({
                            "guild_id": change.guild_id,
                            "user_id": change.user_id,
                            "before": change.before,
                            "after": change.after,
                            "attempted": value,
                            "reverted_to": value,
                        }),
                    )
                    .await;
                Ok(MonitorOutcome::Reverted { value })
            }
            Err(e) => {
                let reason = e.to_string();
                self.log
                    .record(
                        &format!(
                            "Failed to revert nickname of {} ({}): {}",
                            member.display_name, member.user_id, reason
                        ),
                        LogCategory::Error,
                        json!({
                            "guild_id": change.guild_id,
                            "user_id": change.user_id,
                            "before": change.before,
                            "after": change.after,
                            "attempted": value,
                        }),
                    )
                    .await;
                Ok(MonitorOutcome::Failed { value, reason })
            }
        }
    }
}
