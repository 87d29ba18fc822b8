use super::files::{atomic_write, read_optional};
use crate::domain::TaskRecord;
use crate::error::{TrackerError, TrackerResult};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// Task records keyed by task name
pub type TaskMap = BTreeMap<String, TaskRecord>;

/// Durable storage for the task collection
pub trait TaskStore {
    /// Read the persisted tasks. Missing storage yields an empty map.
    /// `today` fills in the date of records that do not carry one.
    fn load(&self, today: NaiveDate) -> TrackerResult<TaskMap>;

    /// Replace the persisted tasks with `tasks`
    fn save(&self, tasks: &TaskMap) -> TrackerResult<()>;
}

/// On-disk value of one task. Early versions stored only the number of
/// seconds, so a bare number is still accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Record {
        time: f64,
        #[serde(default)]
        date: Option<NaiveDate>,
    },
    Legacy(f64),
}

impl StoredEntry {
    fn into_record(self, today: NaiveDate) -> TaskRecord {
        match self {
            Self::Record { time, date } => TaskRecord {
                time,
                date: date.unwrap_or(today),
            },
            Self::Legacy(time) => TaskRecord { time, date: today },
        }
    }
}

/// Parse the JSON task document.
///
/// Names are trimmed on load. A blank name, or two names that trim to the
/// same task, make the document invalid.
pub fn parse_tasks(content: impl AsRef<[u8]>, today: NaiveDate) -> Result<TaskMap, String> {
    let content = content.as_ref();
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(TaskMap::new());
    }

    let raw: BTreeMap<String, StoredEntry> =
        serde_json::from_slice(content).map_err(|e| e.to_string())?;

    let mut tasks = TaskMap::new();
    for (raw_name, entry) in raw {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err("task with a blank name".to_string());
        }

        let record = entry.into_record(today);
        if !record.time.is_finite() || record.time < 0.0 {
            return Err(format!("task '{}' has invalid time {}", name, record.time));
        }

        if tasks.insert(name.to_string(), record).is_some() {
            return Err(format!("task '{}' is stored more than once", name));
        }
    }

    Ok(tasks)
}

/// Serialize tasks as the JSON task document
pub fn serialize_tasks(tasks: &TaskMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks)
}

/// Task store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TaskStore for JsonTaskStore {
    fn load(&self, today: NaiveDate) -> TrackerResult<TaskMap> {
        let content = read_optional(&self.path).map_err(|source| TrackerError::StorageRead {
            path: self.path.clone(),
            source,
        })?;

        let Some(content) = content else {
            tracing::debug!(path = %self.path.display(), "no task file yet");
            return Ok(TaskMap::new());
        };

        let tasks = parse_tasks(content, today).map_err(|reason| TrackerError::StorageCorrupt {
            path: self.path.clone(),
            reason,
        })?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &TaskMap) -> TrackerResult<()> {
        let write_error = |source: io::Error| TrackerError::StorageWrite {
            path: self.path.clone(),
            source,
        };

        let json = serialize_tasks(tasks).map_err(|e| write_error(e.into()))?;
        atomic_write(&self.path, &json).map_err(write_error)?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::date;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn store_in(dir: &tempfile::TempDir) -> JsonTaskStore {
        JsonTaskStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tasks = store_in(&temp_dir).load(date("2026-10-19")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load(date("2026-10-19")).unwrap().is_empty());
    }

    #[test]
    fn test_legacy_bare_number_loads_with_today() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), r#"{"coding": 120}"#).unwrap();

        let tasks = store.load(date("2026-10-19")).unwrap();
        assert_eq!(
            tasks.get("coding"),
            Some(&TaskRecord {
                time: 120.0,
                date: date("2026-10-19"),
            })
        );
    }

    #[test]
    fn test_mixed_legacy_and_structured_records() {
        let today = date("2026-10-19");
        let tasks = parse_tasks(
            r#"{"coding": 12.5, "reading": {"time": 60, "date": "2026-10-01"}, "gym": {"time": 5}}"#,
            today,
        )
        .unwrap();

        assert_eq!(tasks["coding"].date, today);
        assert_eq!(tasks["reading"].date, date("2026-10-01"));
        assert_eq!(tasks["reading"].time, 60.0);
        assert_eq!(tasks["gym"].date, today);
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "{not json").unwrap();

        let err = store.load(date("2026-10-19")).unwrap_err();
        assert!(matches!(err, TrackerError::StorageCorrupt { .. }));
    }

    #[test]
    fn test_wrong_shapes_are_corrupt() {
        let today = date("2026-10-19");
        assert!(parse_tasks("[1, 2]", today).is_err());
        assert!(parse_tasks(r#"{"a": "ten"}"#, today).is_err());
        assert!(parse_tasks(r#"{"a": {"date": "2026-10-19"}}"#, today).is_err());
        assert!(parse_tasks(r#"{"a": {"time": 1, "date": "19/10/2026"}}"#, today).is_err());
        assert!(parse_tasks(r#"{"a": -4}"#, today).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_corrupt() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), b"{\"coding\": \xff\xfe}").unwrap();

        let err = store.load(date("2026-10-19")).unwrap_err();
        assert!(matches!(err, TrackerError::StorageCorrupt { .. }));
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir(store.path()).unwrap();

        let err = store.load(date("2026-10-19")).unwrap_err();
        assert!(matches!(err, TrackerError::StorageRead { .. }));
    }

    #[test]
    fn test_stored_names_are_trimmed() {
        let tasks = parse_tasks(r#"{" write ": 5, "read": 3}"#, date("2026-10-19")).unwrap();
        let names: Vec<&str> = tasks.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["read", "write"]);
        assert_eq!(tasks["write"].time, 5.0);
    }

    #[test]
    fn test_blank_or_colliding_names_are_corrupt() {
        let today = date("2026-10-19");
        assert!(parse_tasks(r#"{"": 3}"#, today).is_err());
        assert!(parse_tasks(r#"{"   ": 3}"#, today).is_err());
        assert!(parse_tasks(r#"{" write ": 5, "write": 3}"#, today).is_err());

        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), r#"{" write ": 5, "": 3}"#).unwrap();
        assert!(matches!(
            store.load(today).unwrap_err(),
            TrackerError::StorageCorrupt { .. }
        ));
    }

    #[test]
    fn test_load_save_load_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        fs::write(
            store.path(),
            r#"{"coding": 120, "reading": {"time": 33.25, "date": "2026-09-30"}}"#,
        )
        .unwrap();

        let today = date("2026-10-19");
        let first = store.load(today).unwrap();
        store.save(&first).unwrap();
        let second = store.load(today).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_writes_structured_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        let mut tasks = TaskMap::new();
        tasks.insert(
            "write".to_string(),
            TaskRecord {
                time: 65.0,
                date: date("2026-10-19"),
            },
        );
        store.save(&tasks).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(value["write"]["time"], 65.0);
        assert_eq!(value["write"]["date"], "2026-10-19");
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonTaskStore::new(temp_dir.path().join("gone").join("tasks.json"));

        let err = store.save(&TaskMap::new()).unwrap_err();
        assert!(matches!(err, TrackerError::StorageWrite { .. }));
    }
}
