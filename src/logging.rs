use crate::persistence::ensure_dir;
use anyhow::Result;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Prefix of the rolling log files
pub const LOG_PREFIX: &str = "mindea";

/// Send logs to daily rolling files under `logs_dir`.
///
/// The terminal UI owns stdout, so nothing is written there. The level comes
/// from `log_level`, else `RUST_LOG`, else `info`.
pub fn enable_logging(logs_dir: &Path, log_level: Option<LevelFilter>) -> Result<()> {
    ensure_dir(logs_dir)?;

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .build(logs_dir)?;

    let level = log_level
        .map(|v| v.to_string())
        .unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
        )))
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
