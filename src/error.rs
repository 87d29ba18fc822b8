use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the task registry and its backing store
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The name is already taken, or is blank after trimming
    #[error("{}", duplicate_message(.name))]
    DuplicateTask { name: String },

    #[error("no task named '{name}'")]
    TaskNotFound { name: String },

    #[error("task file {} is corrupt: {reason}", .path.display())]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("failed to read task file {}", .path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write task file {}", .path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TrackerError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateTask { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::TaskNotFound { name: name.into() }
    }

    /// Whether the error comes from durable storage rather than user input
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageCorrupt { .. } | Self::StorageRead { .. } | Self::StorageWrite { .. }
        )
    }
}

fn duplicate_message(name: &str) -> String {
    if name.is_empty() {
        "task name cannot be blank".to_string()
    } else {
        format!("task '{}' already exists", name)
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
