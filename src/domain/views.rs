use super::task::TaskSnapshot;
use chrono::NaiveDate;

/// Which tasks the list shows. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    TodayOnly,
    PreviousOnly,
}

impl FilterMode {
    /// Switch between `TodayOnly` and `All`, clearing `PreviousOnly`
    pub fn toggle_today(self) -> Self {
        match self {
            Self::TodayOnly => Self::All,
            _ => Self::TodayOnly,
        }
    }

    /// Switch between `PreviousOnly` and `All`, clearing `TodayOnly`
    pub fn toggle_previous(self) -> Self {
        match self {
            Self::PreviousOnly => Self::All,
            _ => Self::PreviousOnly,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All tasks",
            Self::TodayOnly => "Today",
            Self::PreviousOnly => "Previous",
        }
    }

    pub fn apply(self, tasks: Vec<TaskSnapshot>, today: NaiveDate) -> Vec<TaskSnapshot> {
        match self {
            Self::All => filter_all(tasks),
            Self::TodayOnly => filter_today(tasks, today),
            Self::PreviousOnly => filter_previous(tasks, today),
        }
    }
}

/// Tasks last active today
pub fn filter_today(tasks: Vec<TaskSnapshot>, today: NaiveDate) -> Vec<TaskSnapshot> {
    tasks.into_iter().filter(|t| t.last_active == today).collect()
}

/// Tasks last active on any other day
pub fn filter_previous(tasks: Vec<TaskSnapshot>, today: NaiveDate) -> Vec<TaskSnapshot> {
    tasks.into_iter().filter(|t| t.last_active != today).collect()
}

pub fn filter_all(tasks: Vec<TaskSnapshot>) -> Vec<TaskSnapshot> {
    tasks
}
