//! Dashboard Configuration
//!
//! Single configuration document for the control layer: health polling cadence,
//! demo run pacing, busy indicator and run status wording. Every section has
//! defaults, so a deployment only overrides what it needs.

use serde::{Deserialize, Serialize};

use crate::migration::RunMessages;
use crate::services::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Connection health polling
    pub health: HealthConfig,

    /// Simulated migration run pacing
    pub demo: DemoConfig,

    /// Global processing indicator
    pub busy: BusyConfig,

    /// Run status footer wording
    pub messages: RunMessages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Interval between probe rounds in milliseconds
    pub poll_interval_ms: u32,

    /// Samples older than this are shown as unknown
    pub stale_after_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Pause between demo progress steps in milliseconds
    pub step_delay_ms: u32,

    /// Percentage points per demo step
    pub step_size: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusyConfig {
    /// Shown when a busy slot was opened without a message
    pub default_message: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 30_000,
            stale_after_ms: 120_000,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 400,
            step_size: 10,
        }
    }
}

impl Default for BusyConfig {
    fn default() -> Self {
        Self {
            default_message: "Processing...".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parses a JSON override document and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(|errors| ConfigError::Invalid { errors })?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.health.poll_interval_ms == 0 {
            errors.push("Health poll_interval_ms must be greater than 0".to_string());
        }

        if self.health.stale_after_ms < u64::from(self.health.poll_interval_ms) {
            errors.push(
                "Health stale_after_ms must be at least poll_interval_ms".to_string(),
            );
        }

        if self.demo.step_delay_ms == 0 {
            errors.push("Demo step_delay_ms must be greater than 0".to_string());
        }

        if !(1..=100).contains(&self.demo.step_size) {
            errors.push("Demo step_size must be between 1 and 100".to_string());
        }

        if self.busy.default_message.trim().is_empty() {
            errors.push("Busy default_message must not be empty".to_string());
        }

        let messages = [
            ("idle_prompt", &self.messages.idle_prompt),
            ("in_progress", &self.messages.in_progress),
            ("completed", &self.messages.completed),
            ("generic_error", &self.messages.generic_error),
        ];
        for (name, text) in messages {
            if text.trim().is_empty() {
                errors.push(format!("Message {} must not be empty", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
