//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured log events
//! the plugin emits while serving chat commands.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{PopCommandError, Result};

/// Initialize logging based on configuration.
///
/// When a log directory is configured, a daily rolling file layer is added
/// next to stdout. The returned guard must be kept alive for the file writer
/// to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PopCommandError::Logging(e.to_string()))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| PopCommandError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a chat command invocation
pub fn log_command(player_id: &str, command: &str, broadcast: bool) {
    info!(
        player_id = player_id,
        command = command,
        broadcast = broadcast,
        "Population command served"
    );
}

/// Log a rejected command
pub fn log_permission_denied(player_id: &str, command: &str, permission: &str) {
    warn!(
        player_id = player_id,
        command = command,
        permission = permission,
        "Permission denied"
    );
}

/// Log a template that references more placeholders than supplied values
pub fn log_template_fallback(key: &str, locale: &str, placeholders: usize, supplied: usize) {
    warn!(
        key = key,
        locale = locale,
        placeholders = placeholders,
        supplied = supplied,
        "Wrong number of params compared to the string"
    );
}

/// Log a permission registration
pub fn log_permission_registered(permission: &str) {
    debug!(permission = permission, "Permission registered");
}
