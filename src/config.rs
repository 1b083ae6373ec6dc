use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub struct SnippetConfig {
    /// Artificial delay of each sighting pipeline stage
    pub stage_delay: Duration,
    /// Delay before the reward settles
    pub reward_delay: Duration,
    /// Chance that the homework counts as done
    pub homework_probability: f64,
    /// Forces the homework flag instead of drawing it
    pub homework_override: Option<bool>,
    /// Seed for reproducible runs; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            stage_delay: Duration::from_millis(2000),
            reward_delay: Duration::from_millis(1000),
            homework_probability: 0.5,
            homework_override: None,
            seed: None,
        }
    }
}

impl SnippetConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.homework_probability) {
            return Err(ConfigError::InvalidValue {
                field: "homework_probability".to_string(),
                value: self.homework_probability.to_string(),
                reason: "Must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(())
    }
}
