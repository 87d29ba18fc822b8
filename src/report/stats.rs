use std::cmp::Ordering;

/// One task's share of the tracked time
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Capitalized task name
    pub label: String,
    pub seconds: f64,
    /// Share of the total, 0.0 to 100.0
    pub percent: f64,
}

/// Format seconds as "Nh Mm" (e.g. "0h 5m", "2h 0m")
pub fn format_hours_minutes(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Format seconds as "MM:SS"; minutes are not wrapped into hours
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Uppercase the first character, lowercase the rest
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Share of time per task, largest first. Entries without time are dropped.
pub fn time_distribution(entries: &[(String, f64)]) -> Vec<Slice> {
    let total: f64 = entries.iter().map(|(_, s)| s.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices: Vec<Slice> = entries
        .iter()
        .filter(|(_, seconds)| *seconds > 0.0)
        .map(|(name, seconds)| Slice {
            label: capitalize(name),
            seconds: *seconds,
            percent: seconds / total * 100.0,
        })
        .collect();

    slices.sort_by(|a, b| {
        b.seconds
            .partial_cmp(&a.seconds)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    slices
}
