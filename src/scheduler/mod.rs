//! Cron jobs driving the bot's recurring events.
//!
//! Every job runs on its own schedule from the configuration. A failing run is
//! logged and the job simply fires again at its next slot.

pub mod guilds;
pub mod snack_jobs;

use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, state::AppState};

/// Starts the scheduler with the nickname, wisdom and throwaway channel jobs.
///
/// The wisdom job is only added when `WISDOM_CHANNEL_ID` is configured.
///
/// # Arguments
/// - `state`: Shared bot state cloned into every job run
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let nickname_job = Job::new_async(state.config.nickname_cron.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = snack_jobs::run_nickname_batches(&state).await {
                tracing::error!("Error running nickname batches: {}", e);
            }
        })
    })?;
    scheduler.add(nickname_job).await?;

    if let Some(channel_id) = state.config.wisdom_channel_id {
        let job_state = state.clone();
        let wisdom_job = Job::new_async(state.config.wisdom_cron.as_str(), move |_uuid, _lock| {
            let state = job_state.clone();

            Box::pin(async move {
                if let Err(e) = snack_jobs::post_wisdom(&state, channel_id).await {
                    tracing::error!("Error posting wisdom: {}", e);
                }
            })
        })?;
        scheduler.add(wisdom_job).await?;
    } else {
        tracing::info!("WISDOM_CHANNEL_ID not set, scheduled wisdom disabled");
    }

    let job_state = state.clone();
    let channel_job = Job::new_async(state.config.throwaway_cron.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = snack_jobs::open_throwaway_channels(&state).await {
                tracing::error!("Error opening throwaway channels: {}", e);
            }
        })
    })?;
    scheduler.add(channel_job).await?;

    scheduler.start().await?;

    tracing::info!("Snack scheduler started");

    Ok(())
}
