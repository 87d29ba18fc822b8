pub mod task;
pub mod views;

pub use task::{Task, TaskRecord, TaskSnapshot};
pub use views::FilterMode;
