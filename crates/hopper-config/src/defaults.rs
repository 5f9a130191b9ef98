/// Default filter for the daemon's own diagnostic events.
pub const DEFAULT_LOG_FILTER: &str = "warn";
