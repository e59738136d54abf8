use std::sync::Arc;

use dioxus_logger::tracing::Level;
use serenity::http::Http;

use crate::{
    config::Config,
    error::{internal::InternalError, AppError},
    service::log::{ChannelLogSink, LogSink, TracingLogSink},
};

/// Installs the global tracing subscriber.
///
/// Must be called once, before anything logs.
pub fn init_logging() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO).map_err(|e| InternalError::LoggerInit(e.to_string()))?;

    Ok(())
}

/// Chooses the log sink for bot events.
///
/// Events always go to tracing; with `LOG_CHANNEL_ID` set they are mirrored to that
/// Discord channel as well.
pub fn build_log_sink(config: &Config, http: Arc<Http>) -> Arc<dyn LogSink> {
    match config.log_channel_id {
        Some(channel_id) => Arc::new(ChannelLogSink::new(http, channel_id)),
        None => Arc::new(TracingLogSink),
    }
}
