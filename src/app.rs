use crate::domain::{FilterMode, TaskSnapshot};
use crate::error::{TrackerError, TrackerResult};
use crate::registry::TaskRegistry;
use crate::report::{format_clock, time_distribution, Slice};
use crate::ticker::status_ttl;
use chrono::NaiveDate;
use std::time::Instant;

/// A user action, carrying the task it targets when it needs one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTask(String),
    SelectTask(String),
    StartTimer,
    PauseTimer,
    DeleteTask,
    ToggleTodayFilter,
    TogglePreviousFilter,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    Report,
}

/// Transient message shown in the status line
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

/// Main application state
pub struct AppState {
    pub registry: TaskRegistry,
    /// Task that Start/Pause/Delete act on
    pub selected: Option<String>,
    pub filter: FilterMode,
    /// Highlighted row among the visible tasks
    pub cursor: usize,
    pub ui_mode: UiMode,
    /// Text typed into the add-task form
    pub input: String,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(registry: TaskRegistry) -> Self {
        Self {
            registry,
            selected: None,
            filter: FilterMode::All,
            cursor: 0,
            ui_mode: UiMode::Normal,
            input: String::new(),
            status: None,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.registry.clock().today()
    }

    /// Execute one command against the registry. The cursor is kept on a
    /// visible row even when the command fails part way.
    pub fn apply(&mut self, command: Command) -> TrackerResult<()> {
        let result = self.execute(command);
        self.clamp_cursor();
        result
    }

    fn execute(&mut self, command: Command) -> TrackerResult<()> {
        match command {
            Command::AddTask(name) => {
                self.registry.add_task(&name)?;
            }
            Command::SelectTask(name) => {
                if !self.registry.contains(&name) {
                    return Err(TrackerError::not_found(name));
                }
                self.selected = Some(name);
            }
            Command::StartTimer => {
                if let Some(name) = &self.selected {
                    self.registry.start_timer(name)?;
                }
            }
            Command::PauseTimer => {
                if let Some(name) = &self.selected {
                    self.registry.pause_timer(name)?;
                }
            }
            Command::DeleteTask => {
                if let Some(name) = self.selected.take() {
                    self.registry.delete_task(&name)?;
                }
            }
            Command::ToggleTodayFilter => {
                self.filter = self.filter.toggle_today();
            }
            Command::TogglePreviousFilter => {
                self.filter = self.filter.toggle_previous();
            }
        }
        Ok(())
    }

    /// Apply a command and report failures in the status line
    pub fn dispatch(&mut self, command: Command) {
        let description = describe(&command);
        match self.apply(command) {
            Ok(()) => {
                if let Some(text) = description {
                    self.set_status(text, false);
                }
            }
            Err(e) => {
                if e.is_storage() {
                    tracing::error!(error = %e, "command failed to persist");
                } else {
                    tracing::warn!(error = %e, "command rejected");
                }
                self.set_status(e.to_string(), true);
            }
        }
    }

    /// Tasks passing the active filter, with live elapsed time
    pub fn visible_tasks(&self) -> Vec<TaskSnapshot> {
        self.filter.apply(self.registry.snapshot(), self.today())
    }

    /// Time distribution of confirmed time across all tasks
    pub fn distribution(&self) -> Vec<Slice> {
        time_distribution(&self.registry.report_entries())
    }

    /// Live "MM:SS" of the selected task
    pub fn selected_clock(&self) -> Option<String> {
        let name = self.selected.as_ref()?;
        self.registry.current_elapsed(name).ok().map(format_clock)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.visible_tasks().len() {
            self.cursor += 1;
        }
    }

    /// Command selecting the highlighted task, if any row is highlighted
    pub fn select_under_cursor(&self) -> Option<Command> {
        self.visible_tasks()
            .get(self.cursor)
            .map(|t| Command::SelectTask(t.name.clone()))
    }

    fn clamp_cursor(&mut self) {
        let visible = self.visible_tasks().len();
        self.cursor = self.cursor.min(visible.saturating_sub(1));
    }

    pub fn begin_add(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Close the add-task form and turn its text into a command
    pub fn submit_input(&mut self) -> Command {
        self.ui_mode = UiMode::Normal;
        Command::AddTask(std::mem::take(&mut self.input))
    }

    pub fn toggle_report(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Report => UiMode::Normal,
            _ => UiMode::Report,
        };
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            shown_at: Instant::now(),
        });
    }

    /// Periodic refresh. Only clears stale status messages.
    pub fn tick(&mut self) {
        self.expire_status(Instant::now());
    }

    fn expire_status(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if now.saturating_duration_since(status.shown_at) >= status_ttl() {
                self.status = None;
            }
        }
    }

    /// Pause any running task and persist
    pub fn shutdown(&mut self) -> TrackerResult<()> {
        self.registry.shutdown()
    }
}

fn describe(command: &Command) -> Option<String> {
    match command {
        Command::AddTask(name) => Some(format!("Added '{}'", name.trim())),
        Command::DeleteTask => Some("Task deleted".to_string()),
        _ => None,
    }
}
