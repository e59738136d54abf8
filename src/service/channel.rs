//! Throwaway channels: created on a schedule or on command and deleted after a while.

use std::{sync::Arc, time::Duration};

use chrono::{TimeDelta, Utc};
use dioxus_logger::tracing;
use rand::Rng;
use serde_json::json;
use serenity::{
    all::{ChannelId, ChannelType, CreateChannel, GuildId},
    http::Http,
};

use crate::{
    data::snack::SNACKS,
    error::AppError,
    service::log::{LogCategory, LogSink},
};

/// Builds a channel name such as `bitterbal-0421`.
///
/// Discord lowercases text channel names and replaces spaces with dashes; the name is
/// produced in that form directly.
pub fn throwaway_channel_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let snack = SNACKS[rng.random_range(0..SNACKS.len())];
    let slug = snack.to_lowercase().replace(' ', "-");

    format!("{}-{:04}", slug, rng.random_range(0..10_000))
}

/// Service creating and deleting throwaway text channels.
#[derive(Clone)]
pub struct ThrowawayChannelService {
    http: Arc<Http>,
    log: Arc<dyn LogSink>,
}

impl ThrowawayChannelService {
    pub fn new(http: Arc<Http>, log: Arc<dyn LogSink>) -> Self {
        Self { http, log }
    }

    /// Creates a throwaway text channel in `guild_id`.
    ///
    /// # Returns
    /// - `Ok((channel_id, name))` - The created channel
    /// - `Err(AppError::DiscordErr)` - Discord refused to create the channel
    pub async fn create(&self, guild_id: u64) -> Result<(u64, String), AppError> {
        let name = throwaway_channel_name(&mut rand::rng());

        let channel = GuildId::new(guild_id)
            .create_channel(
                &self.http,
                CreateChannel::new(&name)
                    .kind(ChannelType::Text)
                    .topic("Dit kanaal verdwijnt vanzelf weer.")
                    .audit_log_reason("Snackbot throwaway channel"),
            )
            .await?;

        Ok((channel.id.get(), name))
    }

    /// Deletes a channel.
    pub async fn destroy(&self, channel_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id).delete(&self.http).await?;

        Ok(())
    }

    /// Creates a throwaway channel and schedules its deletion after `lifetime`.
    ///
    /// Deletion runs in a background task; its outcome is only logged.
    ///
    /// # Returns
    /// - `Ok((channel_id, name))` - The created channel
    /// - `Err(AppError::DiscordErr)` - Discord refused to create the channel
    pub async fn create_temporary(
        &self,
        guild_id: u64,
        lifetime: Duration,
    ) -> Result<(u64, String), AppError> {
        let (channel_id, name) = self.create(guild_id).await?;
        let expires_at = TimeDelta::from_std(lifetime)
            .ok()
            .map(|delta| (Utc::now() + delta).to_rfc3339());

        self.log
            .record(
                &format!("Created throwaway channel #{}", name),
                LogCategory::Channel,
                json!({
                    "guild_id": guild_id,
                    "channel_id": channel_id,
                    "expires_at": expires_at,
                }),
            )
            .await;

        let service = self.clone();
        let task_name = name.clone();
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;

            match service.destroy(channel_id).await {
                Ok(()) => {
                    service
                        .log
                        .record(
                            &format!("Deleted throwaway channel #{}", task_name),
                            LogCategory::Channel,
                            json!({ "guild_id": guild_id, "channel_id": channel_id }),
                        )
                        .await;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to delete throwaway channel {} in guild {}: {}",
                        channel_id,
                        guild_id,
                        e
                    );
                }
            }
        });

        Ok((channel_id, name))
    }
}

#[cfg(test)]
mod tests {
    use test_utils::rng::{seeded, ZeroRng};

    use super::*;

    #[test]
    fn zero_rng_name() {
        assert_eq!(throwaway_channel_name(&mut ZeroRng), "kroket-0000");
    }

    #[test]
    fn names_are_valid_channel_names() {
        let mut rng = seeded(60);

        for _ in 0..200 {
            let name = throwaway_channel_name(&mut rng);
            let (slug, digits) = name.rsplit_once('-').unwrap();

            assert!(!slug.contains(' '));
            assert_eq!(slug, slug.to_lowercase());
            assert_eq!(digits.len(), 4);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
