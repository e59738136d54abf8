//! Random wisdom generation and posting.

use std::sync::Arc;

use rand::Rng;
use serde_json::json;
use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};

use crate::{
    data::{
        snack::SNACKS,
        wisdom::{CLOSINGS, PREDICATES, SUBJECTS},
    },
    error::AppError,
    service::log::{LogCategory, LogSink},
};

fn pick<'t, R: Rng + ?Sized>(table: &[&'t str], rng: &mut R) -> &'t str {
    table[rng.random_range(0..table.len())]
}

/// Builds one random wisdom sentence.
///
/// Either a plain statement with a closing remark, or a quote attributed to a snack.
pub fn generate_wisdom<R: Rng + ?Sized>(rng: &mut R) -> String {
    let subject = pick(SUBJECTS, rng);
    let predicate = pick(PREDICATES, rng);

    if rng.random_bool(0.5) {
        format!("{} {}. {}", subject, predicate, pick(CLOSINGS, rng))
    } else {
        let snack = pick(SNACKS, rng).to_lowercase();
        let mut quoted = subject.to_string();
        if let Some(first) = quoted.get_mut(0..1) {
            first.make_ascii_lowercase();
        }
        format!("Zoals de {} altijd zegt: {} {}.", snack, quoted, predicate)
    }
}

/// Service posting generated wisdom to Discord channels.
pub struct WisdomService<'a> {
    http: Arc<Http>,
    log: &'a dyn LogSink,
}

impl<'a> WisdomService<'a> {
    pub fn new(http: Arc<Http>, log: &'a dyn LogSink) -> Self {
        Self { http, log }
    }

    /// Generates a wisdom and posts it to `channel_id`.
    ///
    /// # Returns
    /// - `Ok(String)` - The posted wisdom
    /// - `Err(AppError::DiscordErr)` - The message could not be sent
    pub async fn post(&self, channel_id: u64) -> Result<String, AppError> {
        let wisdom = generate_wisdom(&mut rand::rng());

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(&wisdom))
            .await?;

        self.log
            .record(
                "Posted wisdom",
                LogCategory::Wisdom,
                json!({ "channel_id": channel_id, "wisdom": wisdom }),
            )
            .await;

        Ok(wisdom)
    }
}
