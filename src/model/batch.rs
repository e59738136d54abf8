use std::collections::HashSet;

use serde::Serialize;

use crate::{
    config::Config,
    model::policy::{MutationPolicy, PolicyKind},
};

/// Inputs of a single nickname batch for one guild.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Guild being processed.
    pub guild_id: u64,
    /// Guilds the bot must never touch.
    pub blacklist: HashSet<u64>,
    /// Whether the bot may change nicknames in this guild.
    pub permission_granted: bool,
    /// Policy to use instead of drawing one from the event table.
    pub forced_policy: Option<MutationPolicy>,
    /// Owner who gets a suggestion by DM when they cannot be renamed.
    pub owner_id: u64,
    /// Whether the owner suggestion DM is sent at all.
    pub owner_escalation: bool,
}

impl BatchOptions {
    /// Builds options for `guild_id` from the bot configuration.
    ///
    /// Permission is assumed until the permission oracle says otherwise.
    pub fn from_config(
        config: &Config,
        guild_id: u64,
        forced_policy: Option<MutationPolicy>,
    ) -> Self {
        Self {
            guild_id,
            blacklist: config.blacklisted_guilds.clone(),
            permission_granted: true,
            forced_policy,
            owner_id: config.owner_id,
            owner_escalation: config.owner_escalation,
        }
    }

    pub fn is_blacklisted(&self) -> bool {
        self.blacklist.contains(&self.guild_id)
    }
}

/// Final counts of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleTally {
    pub choice_a: String,
    pub choice_b: String,
    pub count_a: usize,
    pub count_b: usize,
}

/// Nickname suggested to the owner instead of renaming them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerSuggestion {
    pub user_id: u64,
    pub value: String,
    pub delivered: bool,
}

/// Outcome of a nickname batch.
///
/// `applied + failed + skipped` equals the number of members considered, the actor
/// included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub applied: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub policy: Option<PolicyKind>,
    pub uniform_value: Option<String>,
    pub battle: Option<BattleTally>,
    pub owner_suggestion: Option<OwnerSuggestion>,
}

/// Number of errors quoted in a summary before the rest are elided.
const SUMMARY_ERROR_LIMIT: usize = 3;

impl BatchResult {
    /// Result of a batch that was refused before touching any member.
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self {
            errors: vec![reason.into()],
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.applied + self.failed + self.skipped
    }

    /// Renders a short human readable report for chat replies and logs.
    pub fn summary(&self) -> String {
        let Some(policy) = self.policy else {
            return match self.errors.first() {
                Some(reason) => format!("Nickname batch not started: {}", reason),
                None => "Nickname batch not started".to_string(),
            };
        };

        let mut summary = format!(
            "Nickname batch ({}): {} renamed, {} failed, {} skipped.",
            policy, self.applied, self.failed, self.skipped
        );

        if let Some(value) = &self.uniform_value {
            summary.push_str(&format!(" Everyone is now {}.", value));
        }

        if let Some(battle) = &self.battle {
            summary.push_str(&format!(
                " {} {} vs {} {}.",
                battle.choice_a, battle.count_a, battle.choice_b, battle.count_b
            ));
        }

        if let Some(suggestion) = &self.owner_suggestion {
            let status = if suggestion.delivered {
                "sent"
            } else {
                "not delivered"
            };
            summary.push_str(&format!(
                " Owner suggestion '{}' {}.",
                suggestion.value, status
            ));
        }

        if !self.errors.is_empty() {
            summary.push_str("\nErrors:");
            for error in self.errors.iter().take(SUMMARY_ERROR_LIMIT) {
                summary.push_str(&format!("\n- {}", error));
            }
            if self.errors.len() > SUMMARY_ERROR_LIMIT {
                summary.push_str(&format!(
                    "\n- ...and {} more",
                    self.errors.len() - SUMMARY_ERROR_LIMIT
                ));
            }
        }

        summary
    }
}
