//! Scheduler configuration structure.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`SchedulerConfig::from_env`].
pub const LIMIT_ENV_VAR: &str = "TASK_THROTTLE_LIMIT";

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Concurrency ceiling: maximum tasks in flight at any instant.
    pub limit: usize,
}

impl Default for SchedulerConfig {
    /// Defaults the limit to the machine's available parallelism.
    fn default() -> Self {
        Self {
            limit: num_cpus::get(),
        }
    }
}

impl SchedulerConfig {
    /// Create a configuration with an explicit limit.
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 {
            return Err("limit must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the environment, honoring a `.env` file.
    ///
    /// Reads [`LIMIT_ENV_VAR`]; when unset, falls back to available
    /// parallelism. A set-but-unparseable or zero value is an error.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let cfg = match std::env::var(LIMIT_ENV_VAR) {
            Ok(raw) => {
                let limit: usize = raw
                    .parse()
                    .map_err(|e| format!("{LIMIT_ENV_VAR} invalid: {e}"))?;
                Self { limit }
            }
            Err(_) => Self::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}
