use crate::timer::{self, Clock};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Persisted shape of a task: `{"time": <seconds>, "date": "YYYY-MM-DD"}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub time: f64,
    pub date: NaiveDate,
}

/// Runtime timer state of a task (never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { since: Instant },
}

impl TimerState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// A named activity whose worked time is tracked
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    /// Confirmed time in seconds, excluding the run in progress
    pub accumulated_secs: f64,
    /// Set on creation and on every start
    pub last_active: NaiveDate,
    pub timer: TimerState,
}

impl Task {
    pub fn new(name: String, today: NaiveDate) -> Self {
        Self {
            name,
            accumulated_secs: 0.0,
            last_active: today,
            timer: TimerState::Idle,
        }
    }

    pub fn from_record(name: String, record: TaskRecord) -> Self {
        Self {
            name,
            accumulated_secs: record.time,
            last_active: record.date,
            timer: TimerState::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Begin a run. Returns false if one is already in progress.
    pub fn start(&mut self, clock: &dyn Clock) -> bool {
        if self.is_running() {
            return false;
        }
        self.timer = TimerState::Running { since: clock.now() };
        self.last_active = clock.today();
        true
    }

    /// End the current run and fold it into the accumulated time.
    /// Returns the length of the run, or `None` if the task was idle.
    pub fn pause(&mut self, clock: &dyn Clock) -> Option<f64> {
        match self.timer {
            TimerState::Idle => None,
            TimerState::Running { since } => {
                let run = timer::elapsed_since(clock, since);
                self.accumulated_secs += run;
                self.timer = TimerState::Idle;
                Some(run)
            }
        }
    }

    /// Accumulated time plus the run in progress, if any
    pub fn current_elapsed(&self, clock: &dyn Clock) -> f64 {
        match self.timer {
            TimerState::Idle => self.accumulated_secs,
            TimerState::Running { since } => timer::accumulate(self.accumulated_secs, clock, since),
        }
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            time: self.accumulated_secs,
            date: self.last_active,
        }
    }

    pub fn snapshot(&self, clock: &dyn Clock) -> TaskSnapshot {
        TaskSnapshot {
            name: self.name.clone(),
            elapsed_secs: self.current_elapsed(clock),
            accumulated_secs: self.accumulated_secs,
            last_active: self.last_active,
            running: self.is_running(),
        }
    }
}

/// Point-in-time view of a task used for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSnapshot {
    pub name: String,
    /// Live elapsed time, including the run in progress
    pub elapsed_secs: f64,
    pub accumulated_secs: f64,
    pub last_active: NaiveDate,
    pub running: bool,
}
