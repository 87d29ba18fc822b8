use crate::persistence::{ensure_dir, find_local_dir, tasks_file};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MINDEA_DIR";

/// Directory name under the home directory when nothing else applies
const GLOBAL_DIR_NAME: &str = ".mindea";

/// Settings resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: Option<LevelFilter>,
}

impl Config {
    /// Resolve the data directory: explicit flag, then `$MINDEA_DIR`, then the
    /// nearest local `.mindea` above the current directory, then `~/.mindea`.
    pub fn resolve(data_dir: Option<PathBuf>, log_level: Option<LevelFilter>) -> Result<Self> {
        let current_dir = env::current_dir().context("Could not determine current directory")?;
        let data_dir = resolve_data_dir(
            data_dir,
            env::var_os(DATA_DIR_ENV).map(PathBuf::from),
            &current_dir,
            dirs::home_dir(),
        )?;

        Ok(Self {
            data_dir: ensure_dir(&data_dir)?,
            log_level,
        })
    }

    pub fn tasks_file(&self) -> PathBuf {
        tasks_file(&self.data_dir)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

fn resolve_data_dir(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    current_dir: &Path,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit.or(from_env) {
        return Ok(dir);
    }

    if let Some(local) = find_local_dir(current_dir) {
        return Ok(local);
    }

    let home = home.context("Could not determine home directory")?;
    Ok(home.join(GLOBAL_DIR_NAME))
}
