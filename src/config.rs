use std::{collections::HashSet, time::Duration};

use crate::{
    error::{config::ConfigError, AppError},
    model::policy::{BattlePair, ValuePool, MAX_NICKNAME_LENGTH},
    util::parse::{parse_bool, parse_u64_from_string, parse_u64_list},
};

const DEFAULT_NICKNAME_CRON: &str = "0 0 12 * * *";
const DEFAULT_WISDOM_CRON: &str = "0 0 9 * * *";
const DEFAULT_THROWAWAY_CRON: &str = "0 0 18 * * Fri";
const DEFAULT_THROWAWAY_LIFETIME_MINUTES: u64 = 60;

pub struct Config {
    pub discord_bot_token: String,

    pub owner_id: u64,
    pub monitored_user_id: Option<u64>,
    pub blacklisted_guilds: HashSet<u64>,
    pub owner_escalation: bool,

    pub wisdom_channel_id: Option<u64>,
    pub log_channel_id: Option<u64>,

    pub nickname_cron: String,
    pub wisdom_cron: String,
    pub throwaway_cron: String,
    pub throwaway_lifetime: Duration,

    pub nickname_pool: ValuePool,
    pub battle: BattlePair,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        };
        let optional_id = |name: &str| -> Result<Option<u64>, ConfigError> {
            optional(name)
                .map(|value| parse_u64_from_string(value.clone()).map_err(|_| invalid(name, &value)))
                .transpose()
        };

        let owner_id = {
            let value = required("OWNER_ID")?;
            parse_u64_from_string(value.clone()).map_err(|_| invalid("OWNER_ID", &value))?
        };

        let blacklisted_guilds = match optional("BLACKLISTED_GUILDS") {
            Some(value) => {
                parse_u64_list(&value).map_err(|_| invalid("BLACKLISTED_GUILDS", &value))?
            }
            None => HashSet::new(),
        };

        let owner_escalation = match optional("OWNER_ESCALATION") {
            Some(value) => parse_bool(&value).map_err(|_| invalid("OWNER_ESCALATION", &value))?,
            None => true,
        };

        let throwaway_lifetime_secs = match optional("THROWAWAY_LIFETIME_MINUTES") {
            Some(value) => parse_u64_from_string(value.clone())
                .ok()
                .and_then(|minutes| minutes.checked_mul(60))
                .ok_or_else(|| invalid("THROWAWAY_LIFETIME_MINUTES", &value))?,
            None => DEFAULT_THROWAWAY_LIFETIME_MINUTES * 60,
        };

        let nickname_pool = match optional("NICKNAME_POOL") {
            // Every entry must fit Discord's nickname limit
            Some(value) => ValuePool::new(value.split(','))
                .filter(|pool| {
                    pool.values()
                        .iter()
                        .all(|v| v.chars().count() <= MAX_NICKNAME_LENGTH)
                })
                .ok_or_else(|| invalid("NICKNAME_POOL", &value))?,
            None => ValuePool::snacks(),
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            owner_id,
            monitored_user_id: optional_id("MONITORED_USER_ID")?,
            blacklisted_guilds,
            owner_escalation,
            wisdom_channel_id: optional_id("WISDOM_CHANNEL_ID")?,
            log_channel_id: optional_id("LOG_CHANNEL_ID")?,
            nickname_cron: optional("NICKNAME_CRON")
                .unwrap_or_else(|| DEFAULT_NICKNAME_CRON.to_string()),
            wisdom_cron: optional("WISDOM_CRON").unwrap_or_else(|| DEFAULT_WISDOM_CRON.to_string()),
            throwaway_cron: optional("THROWAWAY_CRON")
                .unwrap_or_else(|| DEFAULT_THROWAWAY_CRON.to_string()),
            throwaway_lifetime: Duration::from_secs(throwaway_lifetime_secs),
            nickname_pool,
            battle: BattlePair::default(),
        })
    }

    pub fn is_blacklisted(&self, guild_id: u64) -> bool {
        self.blacklisted_guilds.contains(&guild_id)
    }
}
