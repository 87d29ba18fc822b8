use crate::report::stats::{format_hours_minutes, Slice};
use chrono::NaiveDate;

const BAR_WIDTH: usize = 30;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Proportional bar for a slice, at least one cell for any nonzero share
pub fn bar(percent: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let cells = ((percent / 100.0) * width as f64).round() as usize;
    let cells = cells.clamp(usize::from(percent > 0.0), width);
    "█".repeat(cells)
}

/// Plain-text time distribution report
pub fn render_report(slices: &[Slice], date: NaiveDate) -> String {
    let mut report = String::new();
    report.push_str(&format!("Time distribution ({})\n\n", date));

    if slices.is_empty() {
        report.push_str("No time tracked yet.\n");
        return report;
    }

    let label_width = slices.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
    for slice in slices {
        report.push_str(&format!(
            "{:<label_width$}  {:>8}  {:>6}  {}\n",
            slice.label,
            format_hours_minutes(slice.seconds),
            format_percent(slice.percent),
            bar(slice.percent, BAR_WIDTH),
        ));
    }

    let total: f64 = slices.iter().map(|s| s.seconds).sum();
    report.push_str(&format!("\nTotal: {}\n", format_hours_minutes(total)));
    report
}
