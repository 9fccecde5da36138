use std::env;

/// Environment variable holding the loop step budget.
pub const STEP_LIMIT_ENV: &str = "SCRIPTLET_STEP_LIMIT";

/// Host policy for running scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of loop iterations a single run may perform.
    /// `None` means unlimited.
    pub step_limit: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which maps a variable name to
    /// its value. Values that do not parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(STEP_LIMIT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(limit) => config.step_limit = Some(limit),
                Err(err) => tracing::warn!(
                    value = %raw,
                    error = %err,
                    "ignoring invalid {}", STEP_LIMIT_ENV
                ),
            }
        }
        config
    }
}
