//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.
//! Features:
//! - Pretty console output in development, JSON in production
//! - Daily rotating application logs when a log directory is configured
//! - Separate daily rotating audit log for order lifecycle changes (target `audit`)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Target used for order lifecycle audit records
pub const AUDIT_TARGET: &str = "audit";

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"); `RUST_LOG` takes precedence
/// * `json_format` - Whether to use JSON format (true for production, false for development)
/// * `log_dir` - Optional directory for file logging (e.g., Some("./logs"))
///
/// # Examples
/// ```no_run
/// # use comanda_server::utils::logger::init_logger_with_file;
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let Some(dir) = log_dir else {
        registry.try_init()?;
        return Ok(());
    };

    // Create main log directory and one subdirectory per log type
    let log_dir = Path::new(dir);
    let app_log_dir = log_dir.join("app");
    let audit_log_dir = log_dir.join("audit");
    fs::create_dir_all(&app_log_dir)?;
    fs::create_dir_all(&audit_log_dir)?;

    // Application logs: everything except audit records
    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
    let app_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_writer(std::sync::Mutex::new(app_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() != AUDIT_TARGET
        }));

    // Audit logs: only order lifecycle records
    let audit_log = RollingFileAppender::new(Rotation::DAILY, audit_log_dir, "audit");
    let audit_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::sync::Mutex::new(audit_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() == AUDIT_TARGET
        }));

    registry.with(app_layer).with(audit_layer).try_init()?;
    Ok(())
}
