pub mod generator;
pub mod stats;

pub use generator::{bar, render_report};
pub use stats::{format_clock, format_hours_minutes, time_distribution, Slice};
