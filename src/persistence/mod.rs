pub mod files;
pub mod store;

pub use files::{ensure_dir, find_local_dir, init_local_dir, tasks_file};
pub use store::{JsonTaskStore, TaskMap, TaskStore};
