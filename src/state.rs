//! Shared bot state.
//!
//! `AppState` bundles everything the scheduler jobs and event handlers need to run a
//! service. It is cheap to clone: every field is reference counted.

use std::sync::Arc;

use serenity::http::Http;

use crate::{config::Config, service::log::LogSink, startup};

#[derive(Clone)]
pub struct AppState {
    /// Bot configuration loaded at startup.
    pub config: Arc<Config>,

    /// Discord HTTP client shared with the gateway client.
    pub http: Arc<Http>,

    /// Sink for bot event logs (tracing, optionally mirrored to a channel).
    pub log: Arc<dyn LogSink>,
}

impl AppState {
    pub fn new(config: Arc<Config>, http: Arc<Http>) -> Self {
        let log = startup::build_log_sink(&config, http.clone());

        Self { config, http, log }
    }
}
