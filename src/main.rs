use std::sync::Arc;

use chrono_tz::Tz;
use tokio::time::Duration;
use tracing::{error, info, warn};

use tagesform_rs::{
    constants::{DEFAULT_POLL_SECS, LOG_DIRECTIVE},
    models::MonitorState,
    schedule::{OwnerId, start_schedule_manager},
    store::ScheduleStore,
    utils::timezone::parse_timezone,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(MonitorState::new(
        ScheduleStore::new(config.schedules_file),
        config.timezone,
        config.owner,
    ));

    // Fail fast on an unreadable store; later failures are retried by the manager
    if let Err(e) = state.store.load_all().await {
        error!("{}", e);
        std::process::exit(1);
    }

    let manager = start_schedule_manager(Arc::clone(&state), config.poll_interval);
    info!("Schedule manager task started");

    wait_for_shutdown(&state).await;
    manager.abort();
    info!("Shutting down");
}

/// Configuration loaded from environment variables
struct Config {
    schedules_file: String,
    timezone: Tz,
    owner: Option<OwnerId>,
    poll_interval: Duration,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let schedules_file = std::env::var("SCHEDULES_FILE")
        .map_err(|_| "SCHEDULES_FILE environment variable not set. Set it with: export SCHEDULES_FILE=/path/to/schedules.json")?;

    let timezone = match std::env::var("SCHEDULE_TIMEZONE") {
        Ok(tz) => parse_timezone(&tz)?,
        Err(_) => Tz::UTC,
    };

    // Optional: only watch a single owner
    let owner = match std::env::var("SCHEDULE_OWNER") {
        Ok(id) => Some(OwnerId(id.trim().parse().map_err(|_| {
            format!("SCHEDULE_OWNER must be an integer owner id, got '{}'", id)
        })?)),
        Err(_) => None,
    };

    let poll_secs = std::env::var("SCHEDULE_POLL_SECS")
        .ok()
        .and_then(|secs| secs.parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_POLL_SECS);

    if let Some(owner) = owner {
        info!("Watching schedules of owner {} only", owner);
    }
    info!("Resolving schedules in timezone {} every {}s", timezone, poll_secs);

    Ok(Config {
        schedules_file,
        timezone,
        owner,
        poll_interval: Duration::from_secs(poll_secs),
    })
}

/// Wait for Ctrl-C, turning SIGHUP into a schedule reload
#[cfg(unix)]
async fn wait_for_shutdown(state: &MonitorState) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            warn!("Failed to install SIGHUP handler, reloads disabled: {}", e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => return,
            _ = hangup.recv() => {
                info!("SIGHUP received, requesting schedule reload");
                state.request_reload();
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown(_state: &MonitorState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
    }
}
