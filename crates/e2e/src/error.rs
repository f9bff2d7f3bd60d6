//! Error types for the probe suite

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("WebDriver session failed to start: {0}")]
    DriverStartup(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("timed out after {timeout:?} waiting for {condition}")]
    Timeout {
        condition: String,
        timeout: Duration,
    },
}

impl SuiteError {
    /// An assertion failure with a human-readable message.
    pub fn assertion(msg: impl Into<String>) -> Self {
        SuiteError::Assertion(msg.into())
    }
}

pub type SuiteResult<T> = Result<T, SuiteError>;

/// Fail the current case with an assertion error unless `cond` holds.
///
/// Wait timeouts and transport faults have their own variants; this is
/// only for observed-state-vs-expectation mismatches.
pub fn ensure(cond: bool, msg: impl Into<String>) -> SuiteResult<()> {
    if cond {
        Ok(())
    } else {
        Err(SuiteError::Assertion(msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_passes_through_on_success() {
        assert!(ensure(true, "unused").is_ok());
    }

    #[test]
    fn ensure_carries_the_message() {
        let err = ensure(false, "status was 500").unwrap_err();
        assert!(matches!(err, SuiteError::Assertion(_)));
        assert!(err.to_string().contains("status was 500"));
    }

    #[test]
    fn timeout_names_the_condition() {
        let err = SuiteError::Timeout {
            condition: "element #country".to_string(),
            timeout: Duration::from_secs(10),
        };
        let msg = err.to_string();
        assert!(msg.contains("element #country"));
        assert!(msg.contains("10s"));
    }
}
