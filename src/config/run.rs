use std::time::Duration;

/// Run configuration: time budgets, parallelism and retry policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Budget for a single HTTP call
    pub action_timeout: Duration,
    /// Budget for one scenario, all of its calls included
    pub test_timeout: Duration,
    /// Budget for the whole run
    pub global_timeout: Duration,
    pub workers: usize,
    /// Extra attempts for a scenario that failed transiently
    pub retries: u32,
}

impl RunConfig {
    pub const DEFAULT_ACTION_TIMEOUT_MS: u64 = 10_000;
    pub const DEFAULT_TEST_TIMEOUT_MS: u64 = 30_000;
    pub const DEFAULT_GLOBAL_TIMEOUT_MS: u64 = 600_000;

    /// Defaults for a run; CI runs serially with retries to spare the public service
    pub fn for_environment(is_ci: bool) -> Self {
        Self {
            action_timeout: Duration::from_millis(Self::DEFAULT_ACTION_TIMEOUT_MS),
            test_timeout: Duration::from_millis(Self::DEFAULT_TEST_TIMEOUT_MS),
            global_timeout: Duration::from_millis(Self::DEFAULT_GLOBAL_TIMEOUT_MS),
            workers: if is_ci { 1 } else { 4 },
            retries: if is_ci { 2 } else { 0 },
        }
    }

    /// Total attempts a scenario gets
    pub fn max_attempts(&self) -> u32 {
        self.retries + 1
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::for_environment(false)
    }
}
