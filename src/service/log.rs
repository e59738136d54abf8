//! Log sinks for bot events.
//!
//! Services report what they do through a `LogSink` with a category and a JSON object
//! of structured fields. The sink never reports failure back: logging is best effort
//! and must not influence a batch.

use std::sync::Arc;

use chrono::Utc;
use dioxus_logger::tracing;
use serde::Serialize;
use serde_json::Value;
use serenity::{
    all::{ChannelId, CreateMessage},
    async_trait,
    http::Http,
};

/// Discord's message length limit.
const MAX_ENTRY_LENGTH: usize = 2000;

/// Category of a logged bot event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    Nickname,
    Monitor,
    Wisdom,
    Channel,
    Command,
    Error,
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Nickname => "nickname",
            Self::Monitor => "monitor",
            Self::Wisdom => "wisdom",
            Self::Channel => "channel",
            Self::Command => "command",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Destination for bot event logs.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Records an event. Never fails; sinks swallow their own errors.
    async fn record(&self, message: &str, category: LogCategory, fields: Value);
}

/// Sink that writes events to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl TracingLogSink {
    fn emit(message: &str, category: LogCategory, fields: &Value) {
        match category {
            LogCategory::Error => {
                tracing::error!(category = %category, fields = %fields, "{}", message)
            }
            _ => tracing::info!(category = %category, fields = %fields, "{}", message),
        }
    }
}

#[async_trait]
impl LogSink for TracingLogSink {
    async fn record(&self, message: &str, category: LogCategory, fields: Value) {
        Self::emit(message, category, &fields);
    }
}

/// Sink that writes to tracing and mirrors every event into a Discord channel.
pub struct ChannelLogSink {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelLogSink {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

/// Renders an event the way it is posted to the log channel.
pub fn format_channel_entry(
    timestamp: i64,
    message: &str,
    category: LogCategory,
    fields: &Value,
) -> String {
    let mut entry = format!("<t:{}:T> **[{}]** {}", timestamp, category, message);

    let has_fields = match fields {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    };
    if has_fields {
        entry.push_str(&format!("\n```json\n{}\n```", fields));
    }

    if entry.chars().count() > MAX_ENTRY_LENGTH {
        entry = entry.chars().take(MAX_ENTRY_LENGTH).collect();
    }

    entry
}

#[async_trait]
impl LogSink for ChannelLogSink {
    async fn record(&self, message: &str, category: LogCategory, fields: Value) {
        TracingLogSink::emit(message, category, &fields);

        let entry = format_channel_entry(Utc::now().timestamp(), message, category, &fields);

        if let Err(e) = self
            .channel_id
            .send_message(&self.http, CreateMessage::new().content(entry))
            .await
        {
            tracing::warn!(
                "Failed to mirror log entry to channel {}: {}",
                self.channel_id,
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn channel_entry_includes_fields() {
        let entry = format_channel_entry(
            1_700_000_000,
            "Renamed jan",
            LogCategory::Nickname,
            &json!({ "value": "Kroket" }),
        );

        assert_eq!(
            entry,
            "<t:1700000000:T> **[nickname]** Renamed jan\n```json\n{\"value\":\"Kroket\"}\n```"
        );
    }

    #[test]
    fn channel_entry_omits_empty_fields() {
        let entry = format_channel_entry(1, "Posted wisdom", LogCategory::Wisdom, &json!({}));

        assert_eq!(entry, "<t:1:T> **[wisdom]** Posted wisdom");
    }

    #[test]
    fn channel_entry_fits_in_one_message() {
        let message = "x".repeat(3000);
        let entry = format_channel_entry(1, &message, LogCategory::Error, &Value::Null);

        assert_eq!(entry.chars().count(), MAX_ENTRY_LENGTH);
    }
}
