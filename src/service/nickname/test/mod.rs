use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use serde_json::Value;
use serenity::async_trait;
use test_utils::rng::{seeded, ZeroRng};

use crate::{
    error::{AppError, MutationError},
    model::{
        batch::BatchOptions,
        member::{GuildMember, GuildRoster, NicknameChange},
        policy::{BattlePair, MutationPolicy, PolicyKind, ValuePool},
    },
    service::{
        discord::{DirectMessenger, MemberSource, NicknameMutator, PermissionOracle},
        log::{LogCategory, LogSink},
        nickname::{
            monitor::IgnoreReason, MonitorOutcome, MonitorSettings, NicknameBatchService,
            NicknameMonitorService, RevertLedger,
        },
    },
};

mod policy;

const GUILD_ID: u64 = 500;
const OWNER_ID: u64 = 1;
const ACTOR_ID: u64 = 99;

/// Nickname mutator that records every call and fails for configured users.
#[derive(Default)]
struct RecordingMutator {
    calls: Mutex<Vec<(u64, String)>>,
    failing: HashSet<u64>,
}

impl RecordingMutator {
    fn failing(ids: &[u64]) -> Self {
        Self {
            failing: ids.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(u64, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn value_for(&self, user_id: u64) -> Option<String> {
        self.calls()
            .into_iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, value)| value)
    }
}

#[async_trait]
impl NicknameMutator for RecordingMutator {
    async fn set_nickname(
        &self,
        user_id: u64,
        nickname: &str,
        _reason: &str,
    ) -> Result<(), MutationError> {
        self.calls
            .lock()
            .unwrap()
            .push((user_id, nickname.to_string()));

        if self.failing.contains(&user_id) {
            return Err(MutationError::Discord("Missing Access".to_string()));
        }
        Ok(())
    }
}

/// Direct messenger that records suggestions and optionally refuses them.
#[derive(Default)]
struct RecordingMessenger {
    calls: Mutex<Vec<(u64, String)>>,
    refuse: bool,
}

impl RecordingMessenger {
    fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(u64, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectMessenger for RecordingMessenger {
    async fn suggest_nickname(&self, user_id: u64, nickname: &str) -> Result<(), MutationError> {
        self.calls
            .lock()
            .unwrap()
            .push((user_id, nickname.to_string()));

        if self.refuse {
            return Err(MutationError::Rejected("Cannot send messages to this user".to_string()));
        }
        Ok(())
    }
}

/// Log sink that keeps every entry in memory.
#[derive(Default)]
struct MemoryLogSink {
    entries: Mutex<Vec<(String, LogCategory, Value)>>,
}

impl MemoryLogSink {
    fn categories(&self) -> Vec<LogCategory> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, category, _)| *category)
            .collect()
    }

    fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(message, _, _)| message.clone())
            .collect()
    }
}

#[async_trait]
impl LogSink for MemoryLogSink {
    async fn record(&self, message: &str, category: LogCategory, fields: Value) {
        self.entries
            .lock()
            .unwrap()
            .push((message.to_string(), category, fields));
    }
}

/// In-memory guild serving a fixed roster and permission, counting every read.
struct FakeGuild {
    roster: Option<GuildRoster>,
    permission: bool,
    reads: AtomicUsize,
}

impl FakeGuild {
    fn new(actor: GuildMember, members: Vec<GuildMember>) -> Self {
        Self {
            roster: Some(GuildRoster { actor, members }),
            permission: true,
            reads: AtomicUsize::new(0),
        }
    }

    fn unreachable() -> Self {
        Self {
            roster: None,
            permission: true,
            reads: AtomicUsize::new(0),
        }
    }

    fn without_permission(mut self) -> Self {
        self.permission = false;
        self
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn roster(&self) -> Result<&GuildRoster, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.roster
            .as_ref()
            .ok_or_else(|| AppError::MemberSource("guild unavailable".to_string()))
    }
}

#[async_trait]
impl MemberSource for FakeGuild {
    async fn fetch_roster(&self) -> Result<GuildRoster, AppError> {
        self.roster().cloned()
    }

    async fn fetch_actor(&self) -> Result<GuildMember, AppError> {
        Ok(self.roster()?.actor.clone())
    }

    async fn fetch_member(&self, user_id: u64) -> Result<GuildMember, AppError> {
        self.roster()?
            .members
            .iter()
            .find(|m| m.user_id == user_id)
            .cloned()
            .ok_or_else(|| AppError::MemberSource(format!("unknown member {}", user_id)))
    }
}

#[async_trait]
impl PermissionOracle for FakeGuild {
    async fn can_manage_nicknames(&self) -> Result<bool, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.permission)
    }
}

fn member(user_id: u64, rank: u32) -> GuildMember {
    GuildMember {
        user_id,
        display_name: format!("member-{}", user_id),
        rank,
        bot: false,
        owner: false,
    }
}

fn actor(rank: u32) -> GuildMember {
    GuildMember {
        bot: true,
        display_name: "snackbot".to_string(),
        ..member(ACTOR_ID, rank)
    }
}

fn options(forced_policy: Option<MutationPolicy>) -> BatchOptions {
    BatchOptions {
        guild_id: GUILD_ID,
        blacklist: HashSet::new(),
        permission_granted: true,
        forced_policy,
        owner_id: OWNER_ID,
        owner_escalation: true,
    }
}

fn uniform(value: &str) -> Option<MutationPolicy> {
    Some(MutationPolicy::Uniform(value.to_string()))
}

fn battle_policy() -> Option<MutationPolicy> {
    Some(MutationPolicy::Battle(BattlePair::default()))
}
