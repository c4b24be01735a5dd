use std::time::Duration;

/// Controls the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Pause between loop iterations. Zero is allowed and is the right
    /// choice for transports with blocking reads.
    pub interval: Duration,
    /// Name given to the dispatch thread.
    pub thread_name: String,
    /// Stack size for the dispatch thread. Subscribers run on it, so raise
    /// this if they recurse deeply. `None` keeps the platform default.
    pub stack_size: Option<usize>,
}

impl DispatcherConfig {
    /// Default config with a different interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(10),
            thread_name: "mavlite-dispatch".to_string(),
            stack_size: None,
        }
    }
}
