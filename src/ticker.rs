use std::time::Duration;

/// Redraw interval. Running clocks advance on screen once per tick.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// How long a status message stays on screen
pub const STATUS_TTL_MS: u64 = 4000;

pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

pub fn status_ttl() -> Duration {
    Duration::from_millis(STATUS_TTL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_outlives_several_ticks() {
        assert_eq!(tick_duration(), Duration::from_secs(1));
        assert!(status_ttl() >= tick_duration() * 4);
    }
}
