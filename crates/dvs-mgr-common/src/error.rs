//! Error types for DVS manager operations.
//!
//! This module defines the error types used throughout the DVS manager
//! crates. All errors implement `std::error::Error` via `thiserror`.

use thiserror::Error;

/// Result type alias for DVS manager operations.
pub type DvsMgrResult<T> = Result<T, DvsMgrError>;

/// Errors that can occur during DVS manager operations.
#[derive(Debug, Error)]
pub enum DvsMgrError {
    /// Fetching switch configuration from the management plane failed.
    #[error("Failed to fetch configuration for switch '{switch}': {message}")]
    ConfigFetch {
        /// The switch whose configuration was requested.
        switch: String,
        /// Error message from the management plane.
        message: String,
    },

    /// The named switch is not known to the configuration source.
    #[error("Switch '{switch}' not found")]
    SwitchNotFound {
        /// The switch name.
        switch: String,
    },

    /// Switch configuration failed validation.
    #[error("Invalid configuration on switch '{switch}': {message}")]
    InvalidConfig {
        /// The switch carrying the invalid configuration.
        switch: String,
        /// Error message.
        message: String,
    },
}

impl DvsMgrError {
    /// Creates a configuration fetch error.
    pub fn config_fetch(switch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigFetch {
            switch: switch.into(),
            message: message.into(),
        }
    }

    /// Creates a switch not found error.
    pub fn switch_not_found(switch: impl Into<String>) -> Self {
        Self::SwitchNotFound {
            switch: switch.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(switch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            switch: switch.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient condition
    /// that may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DvsMgrError::ConfigFetch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DvsMgrError::switch_not_found("dvSwitch0");
        assert_eq!(err.to_string(), "Switch 'dvSwitch0' not found");
    }

    #[test]
    fn test_config_fetch_error() {
        let err = DvsMgrError::config_fetch("dvSwitch0", "connection reset");
        assert_eq!(
            err.to_string(),
            "Failed to fetch configuration for switch 'dvSwitch0': connection reset"
        );
    }

    #[test]
    fn test_invalid_config_error() {
        let err = DvsMgrError::invalid_config("dvSwitch0", "duplicate secondary VLAN 20");
        assert!(err.to_string().contains("dvSwitch0"));
        assert!(err.to_string().contains("duplicate secondary VLAN 20"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(DvsMgrError::config_fetch("dvSwitch0", "timeout").is_retryable());
        assert!(!DvsMgrError::switch_not_found("dvSwitch0").is_retryable());
        assert!(!DvsMgrError::invalid_config("dvSwitch0", "bad entry").is_retryable());
    }
}
