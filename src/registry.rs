use crate::domain::{Task, TaskSnapshot};
use crate::error::{TrackerError, TrackerResult};
use crate::persistence::{TaskMap, TaskStore};
use crate::timer::Clock;
use std::collections::BTreeMap;

/// Authoritative in-memory set of tasks.
///
/// Every persisted mutation is written through the store before the method
/// returns. At most one task runs at a time: starting a task pauses whichever
/// task was running.
pub struct TaskRegistry {
    tasks: BTreeMap<String, Task>,
    store: Box<dyn TaskStore>,
    clock: Box<dyn Clock>,
}

impl TaskRegistry {
    /// Load the registry from `store`. All tasks start idle.
    pub fn load(store: Box<dyn TaskStore>, clock: Box<dyn Clock>) -> TrackerResult<Self> {
        let records = store.load(clock.today())?;
        let tasks = records
            .into_iter()
            .map(|(name, record)| (name.clone(), Task::from_record(name, record)))
            .collect();

        Ok(Self {
            tasks,
            store,
            clock,
        })
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    fn get_mut(&mut self, name: &str) -> TrackerResult<&mut Task> {
        self.tasks
            .get_mut(name)
            .ok_or_else(|| TrackerError::not_found(name))
    }

    /// Create an idle task with zero time, dated today
    #[tracing::instrument(skip(self))]
    pub fn add_task(&mut self, name: &str) -> TrackerResult<&Task> {
        let name = name.trim();
        if name.is_empty() || self.tasks.contains_key(name) {
            return Err(TrackerError::duplicate(name));
        }

        let task = Task::new(name.to_string(), self.clock.today());
        self.tasks.insert(name.to_string(), task);
        self.persist()?;

        tracing::info!("task added");
        Ok(&self.tasks[name])
    }

    /// Remove a task, discarding any run in progress
    #[tracing::instrument(skip(self))]
    pub fn delete_task(&mut self, name: &str) -> TrackerResult<Task> {
        let task = self
            .tasks
            .remove(name)
            .ok_or_else(|| TrackerError::not_found(name))?;
        self.persist()?;

        tracing::info!(discarded_run = task.is_running(), "task deleted");
        Ok(task)
    }

    /// Start the timer of `name`.
    ///
    /// The run start is not persisted: a crash while running loses the run.
    /// If another task was running it is paused first, and that pause is
    /// persisted.
    #[tracing::instrument(skip(self))]
    pub fn start_timer(&mut self, name: &str) -> TrackerResult<()> {
        if self.get_mut(name)?.is_running() {
            tracing::debug!("already running");
            return Ok(());
        }

        let others: Vec<String> = self
            .tasks
            .values()
            .filter(|t| t.is_running() && t.name() != name)
            .map(|t| t.name().to_string())
            .collect();

        let clock = self.clock.as_ref();
        for other in &others {
            if let Some(task) = self.tasks.get_mut(other) {
                if let Some(run) = task.pause(clock) {
                    tracing::info!(task = %other, run_secs = run, "paused to start another task");
                }
            }
        }

        if let Some(task) = self.tasks.get_mut(name) {
            task.start(clock);
        }

        if !others.is_empty() {
            self.persist()?;
        }

        tracing::info!("timer started");
        Ok(())
    }

    /// Pause the timer of `name`, folding the run into its accumulated time.
    /// Returns the length of the run, or `None` if the task was idle.
    #[tracing::instrument(skip(self))]
    pub fn pause_timer(&mut self, name: &str) -> TrackerResult<Option<f64>> {
        let clock = self.clock.as_ref();
        let task = self
            .tasks
            .get_mut(name)
            .ok_or_else(|| TrackerError::not_found(name))?;

        let Some(run) = task.pause(clock) else {
            tracing::debug!("already idle");
            return Ok(None);
        };

        self.persist()?;
        tracing::info!(run_secs = run, "timer paused");
        Ok(Some(run))
    }

    /// Accumulated time plus the run in progress, without mutating anything
    pub fn current_elapsed(&self, name: &str) -> TrackerResult<f64> {
        self.tasks
            .get(name)
            .map(|t| t.current_elapsed(self.clock.as_ref()))
            .ok_or_else(|| TrackerError::not_found(name))
    }

    /// The task whose timer is running, if any
    pub fn running_task(&self) -> Option<&Task> {
        self.tasks.values().find(|t| t.is_running())
    }

    /// Pause every running task and persist once
    #[tracing::instrument(skip(self))]
    pub fn shutdown(&mut self) -> TrackerResult<()> {
        let clock = self.clock.as_ref();
        for task in self.tasks.values_mut() {
            if let Some(run) = task.pause(clock) {
                tracing::info!(task = %task.name(), run_secs = run, "paused on shutdown");
            }
        }
        self.persist()
    }

    /// All tasks, ordered by name, with live elapsed time
    pub fn snapshot(&self) -> Vec<TaskSnapshot> {
        let clock = self.clock.as_ref();
        self.tasks.values().map(|t| t.snapshot(clock)).collect()
    }

    /// `(name, accumulated seconds)` for every task with recorded time
    pub fn report_entries(&self) -> Vec<(String, f64)> {
        self.tasks
            .values()
            .filter(|t| t.accumulated_secs > 0.0)
            .map(|t| (t.name().to_string(), t.accumulated_secs))
            .collect()
    }

    /// The persisted form of the current state
    pub fn records(&self) -> TaskMap {
        self.tasks
            .iter()
            .map(|(name, task)| (name.clone(), task.to_record()))
            .collect()
    }

    fn persist(&self) -> TrackerResult<()> {
        self.store.save(&self.records()).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist tasks");
            e
        })
    }
}
