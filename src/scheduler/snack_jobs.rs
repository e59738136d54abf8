use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;

use crate::{
    error::AppError,
    model::batch::BatchOptions,
    scheduler::guilds::fetch_guild_ids,
    service::{
        channel::ThrowawayChannelService,
        discord::SerenityGuildGateway,
        log::LogCategory,
        nickname::NicknameBatchService,
        wisdom::WisdomService,
    },
    state::AppState,
};

/// Runs a nickname batch in every guild the bot is in.
///
/// Blacklisted guilds are passed to the engine like any other; it refuses them before
/// touching Discord. A guild whose members can't be read is logged and skipped.
pub async fn run_nickname_batches(state: &AppState) -> Result<(), AppError> {
    let config = &state.config;
    let mut rng = StdRng::from_os_rng();

    for guild_id in fetch_guild_ids(&state.http).await? {
        let gateway = SerenityGuildGateway::new(state.http.clone(), guild_id);
        let service = NicknameBatchService::new(
            &gateway,
            &gateway,
            state.log.as_ref(),
            &config.nickname_pool,
            &config.battle,
        );
        let options = BatchOptions::from_config(config, guild_id, None);

        match service
            .run_for_guild(&gateway, &gateway, options, &mut rng)
            .await
        {
            Ok(result) => {
                tracing::info!(
                    "Nickname batch for guild {} finished: {} renamed, {} failed, {} skipped",
                    guild_id,
                    result.applied,
                    result.failed,
                    result.skipped
                );
            }
            Err(e) => {
                state
                    .log
                    .record(
                        &format!("Nickname batch for guild {} failed: {}", guild_id, e),
                        LogCategory::Error,
                        json!({ "guild_id": guild_id }),
                    )
                    .await;
            }
        }
    }

    Ok(())
}

/// Posts a freshly generated wisdom to `channel_id`.
pub async fn post_wisdom(state: &AppState, channel_id: u64) -> Result<(), AppError> {
    let wisdom = WisdomService::new(state.http.clone(), state.log.as_ref())
        .post(channel_id)
        .await?;

    tracing::debug!("Scheduled wisdom posted: {}", wisdom);

    Ok(())
}

/// Opens a throwaway channel in every non-blacklisted guild.
pub async fn open_throwaway_channels(state: &AppState) -> Result<(), AppError> {
    let service = ThrowawayChannelService::new(state.http.clone(), state.log.clone());

    for guild_id in fetch_guild_ids(&state.http).await? {
        if state.config.is_blacklisted(guild_id) {
            continue;
        }

        if let Err(e) = service
            .create_temporary(guild_id, state.config.throwaway_lifetime)
            .await
        {
            state
                .log
                .record(
                    &format!("Failed to open throwaway channel in guild {}: {}", guild_id, e),
                    LogCategory::Error,
                    json!({ "guild_id": guild_id }),
                )
                .await;
        }
    }

    Ok(())
}
