//! Config validation logic.

use std::time::Duration;
use tracing::debug;

use crate::errors::TidyMoveError;

use super::types::Config;

impl Config {
    /// Reject settings the pipeline cannot honour.
    pub fn validate(&self) -> Result<(), TidyMoveError> {
        if self.progress_interval == Duration::ZERO {
            return Err(TidyMoveError::InvalidTickInterval);
        }
        debug!(
            log_level = %self.log_level,
            json = self.json,
            interval_ms = self.progress_interval.as_millis() as u64,
            log_file = %self
                .log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into()),
            "Config validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let cfg = Config {
            progress_interval: Duration::ZERO,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, TidyMoveError::InvalidTickInterval));
    }
}
