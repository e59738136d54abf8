use std::sync::Arc;

use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use serenity::all::{Context, Message};

use crate::{
    config::Config,
    model::{
        batch::BatchOptions,
        policy::{MutationPolicy, MAX_NICKNAME_LENGTH},
    },
    service::{
        channel::ThrowawayChannelService,
        discord::SerenityGuildGateway,
        log::LogCategory,
        nickname::NicknameBatchService,
        wisdom::WisdomService,
    },
    state::AppState,
};

/// Discord rejects messages longer than this.
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Prefix command recognised in guild messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `!wijsheid`
    Wisdom,
    /// `!snackattack [battle|random|<value>]`
    SnackAttack(Option<ForcedPolicy>),
    /// `!kanaal`
    Channel,
}

/// Policy requested with `!snackattack`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForcedPolicy {
    Battle,
    Random,
    Uniform(String),
}

impl ForcedPolicy {
    fn into_policy(self, config: &Config) -> MutationPolicy {
        match self {
            Self::Battle => MutationPolicy::Battle(config.battle.clone()),
            Self::Random => MutationPolicy::Random(config.nickname_pool.clone()),
            Self::Uniform(value) => MutationPolicy::Uniform(value),
        }
    }
}

impl BotCommand {
    fn owner_only(&self) -> bool {
        !matches!(self, Self::Wisdom)
    }
}

/// Parses a message into a bot command.
///
/// Command names are case-insensitive. Returns `None` for anything that isn't one of
/// the bot's commands.
pub fn parse_command(content: &str) -> Option<BotCommand> {
    let content = content.trim();
    let (name, rest) = match content.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (content, ""),
    };

    match name.to_lowercase().as_str() {
        "!wijsheid" => Some(BotCommand::Wisdom),
        "!kanaal" => Some(BotCommand::Channel),
        "!snackattack" => Some(BotCommand::SnackAttack(parse_forced_policy(rest))),
        _ => None,
    }
}

fn parse_forced_policy(argument: &str) -> Option<ForcedPolicy> {
    if argument.is_empty() {
        return None;
    }

    let policy = match argument.to_lowercase().as_str() {
        "battle" => ForcedPolicy::Battle,
        "random" => ForcedPolicy::Random,
        _ => ForcedPolicy::Uniform(argument.chars().take(MAX_NICKNAME_LENGTH).collect()),
    };

    Some(policy)
}

/// Handle message creation in a channel
pub async fn handle_message(config: &Arc<Config>, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // Commands only work in guild channels (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some(command) = parse_command(&message.content) else {
        return;
    };

    let state = AppState::new(config.clone(), ctx.http.clone());

    if command.owner_only() && message.author.id.get() != config.owner_id {
        tracing::debug!(
            "Ignoring {:?} from {}: not the owner",
            command,
            message.author.id
        );
        reply(&state, &message, "Alleen de baas mag aan de frituur zitten.").await;
        return;
    }

    state
        .log
        .record(
            &format!("{} used {:?}", message.author.name, command),
            LogCategory::Command,
            json!({
                "guild_id": guild_id.get(),
                "channel_id": message.channel_id.get(),
                "user_id": message.author.id.get(),
            }),
        )
        .await;

    match command {
        BotCommand::Wisdom => {
            let service = WisdomService::new(state.http.clone(), state.log.as_ref());
            if let Err(e) = service.post(message.channel_id.get()).await {
                tracing::error!(
                    "Failed to post wisdom in channel {}: {}",
                    message.channel_id,
                    e
                );
            }
        }
        BotCommand::SnackAttack(forced) => {
            let text = run_snack_attack(&state, guild_id.get(), forced).await;
            reply(&state, &message, &text).await;
        }
        BotCommand::Channel => {
            let text = open_throwaway_channel(&state, guild_id.get()).await;
            reply(&state, &message, &text).await;
        }
    }
}

/// Runs a nickname batch in `guild_id` and returns the reply text.
async fn run_snack_attack(state: &AppState, guild_id: u64, forced: Option<ForcedPolicy>) -> String {
    let config = &state.config;
    let gateway = SerenityGuildGateway::new(state.http.clone(), guild_id);
    let service = NicknameBatchService::new(
        &gateway,
        &gateway,
        state.log.as_ref(),
        &config.nickname_pool,
        &config.battle,
    );
    let options = BatchOptions::from_config(
        config,
        guild_id,
        forced.map(|policy| policy.into_policy(config)),
    );
    let mut rng = StdRng::from_os_rng();

    match service
        .run_for_guild(&gateway, &gateway, options, &mut rng)
        .await
    {
        Ok(result) => result.summary(),
        Err(e) => {
            tracing::error!("Snack attack failed in guild {}: {}", guild_id, e);
            format!("De snackattack is mislukt: {}", e)
        }
    }
}

/// Opens a throwaway channel in `guild_id` and returns the reply text.
async fn open_throwaway_channel(state: &AppState, guild_id: u64) -> String {
    if state.config.is_blacklisted(guild_id) {
        return "Deze server staat op de zwarte lijst.".to_string();
    }

    let service = ThrowawayChannelService::new(state.http.clone(), state.log.clone());

    match service
        .create_temporary(guild_id, state.config.throwaway_lifetime)
        .await
    {
        Ok((channel_id, _)) => format!(
            "Vers uit het vet: <#{}> (verdwijnt over {} minuten)",
            channel_id,
            state.config.throwaway_lifetime.as_secs() / 60
        ),
        Err(e) => {
            tracing::error!("Failed to create throwaway channel in guild {}: {}", guild_id, e);
            format!("Kanaal aanmaken mislukt: {}", e)
        }
    }
}

async fn reply(state: &AppState, message: &Message, text: &str) {
    let content: String = text.chars().take(MAX_MESSAGE_LENGTH).collect();

    if let Err(e) = message.channel_id.say(&state.http, content).await {
        tracing::error!(
            "Failed to reply in channel {}: {}",
            message.channel_id,
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wisdom_and_channel_commands() {
        assert_eq!(parse_command("!wijsheid"), Some(BotCommand::Wisdom));
        assert_eq!(parse_command("  !KANAAL  "), Some(BotCommand::Channel));
    }

    #[test]
    fn snack_attack_without_argument_draws_policy() {
        assert_eq!(
            parse_command("!snackattack"),
            Some(BotCommand::SnackAttack(None))
        );
    }

    #[test]
    fn snack_attack_keywords_force_policies() {
        assert_eq!(
            parse_command("!snackattack battle"),
            Some(BotCommand::SnackAttack(Some(ForcedPolicy::Battle)))
        );
        assert_eq!(
            parse_command("!snackattack Random"),
            Some(BotCommand::SnackAttack(Some(ForcedPolicy::Random)))
        );
    }

    #[test]
    fn snack_attack_other_text_forces_uniform() {
        assert_eq!(
            parse_command("!snackattack  Patatje Oorlog "),
            Some(BotCommand::SnackAttack(Some(ForcedPolicy::Uniform(
                "Patatje Oorlog".to_string()
            ))))
        );
    }

    #[test]
    fn uniform_value_is_truncated_to_nickname_limit() {
        let long = "x".repeat(50);
        let Some(BotCommand::SnackAttack(Some(ForcedPolicy::Uniform(value)))) =
            parse_command(&format!("!snackattack {}", long))
        else {
            panic!("expected a uniform snack attack");
        };

        assert_eq!(value.chars().count(), MAX_NICKNAME_LENGTH);
    }

    #[test]
    fn other_messages_are_not_commands() {
        assert_eq!(parse_command("hallo"), None);
        assert_eq!(parse_command("!wijsheden"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn only_wisdom_is_open_to_everyone() {
        assert!(!BotCommand::Wisdom.owner_only());
        assert!(BotCommand::Channel.owner_only());
        assert!(BotCommand::SnackAttack(None).owner_only());
    }
}
