use std::sync::Arc;

use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};
use serenity::all::{Context, GuildMemberUpdateEvent, Member};

use crate::{
    config::Config,
    model::member::NicknameChange,
    service::{
        discord::SerenityGuildGateway,
        nickname::{MonitorSettings, NicknameMonitorService, RevertLedger},
    },
    state::AppState,
};

/// Handles the guild_member_update event by feeding nickname changes to the monitor.
///
/// Only the configured monitored member is considered. The previous nickname comes
/// from the cache; when the member wasn't cached it is treated as unset, so any
/// nickname in the update counts as a change.
pub async fn handle_guild_member_update(
    config: &Arc<Config>,
    ledger: &RevertLedger,
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    if config.monitored_user_id != Some(event.user.id.get()) {
        return;
    }

    if old.is_none() {
        tracing::debug!(
            "No cached member for {} in guild {}, treating previous nickname as unset",
            event.user.id,
            event.guild_id
        );
    }

    let change = change_from_update(old.as_ref(), &event);

    let state = AppState::new(config.clone(), ctx.http.clone());
    let gateway = SerenityGuildGateway::new(state.http.clone(), change.guild_id);
    let service =
        NicknameMonitorService::new(&gateway, state.log.as_ref(), &config.nickname_pool, ledger);
    let settings = MonitorSettings {
        monitored_user_id: config.monitored_user_id,
        blacklist: &config.blacklisted_guilds,
    };
    let mut rng = StdRng::from_os_rng();

    match service
        .on_member_update(&change, &gateway, &gateway, &settings, &mut rng)
        .await
    {
        Ok(outcome) => {
            tracing::debug!(
                "Nickname monitor handled change of {} in guild {}: {:?}",
                change.user_id,
                change.guild_id,
                outcome
            );
        }
        Err(e) => {
            tracing::error!(
                "Nickname monitor failed for {} in guild {}: {}",
                change.user_id,
                change.guild_id,
                e
            );
        }
    }
}

/// Builds the observed change from the cached member and the update event.
fn change_from_update(old: Option<&Member>, event: &GuildMemberUpdateEvent) -> NicknameChange {
    NicknameChange {
        guild_id: event.guild_id.get(),
        user_id: event.user.id.get(),
        before: old.and_then(|member| member.nick.clone()),
        after: event.nick.clone(),
    }
}
