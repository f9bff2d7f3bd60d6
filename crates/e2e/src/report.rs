//! Per-case outcome collection
//!
//! The UI cases share one browser session, so they run inside a single
//! test binary invocation; this module keeps the reporting per-case
//! anyway. Each case is awaited through [`SuiteSummary::run`], logged as
//! it finishes, and the final verdict lists every failed case by name.

use std::future::Future;
use std::time::Instant;

use serde::Serialize;
use tracing::{error, info};

use crate::error::{SuiteError, SuiteResult};

/// Outcome of one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Collected outcomes for a module's cases.
#[derive(Debug, Default, Serialize)]
pub struct SuiteSummary {
    pub cases: Vec<CaseReport>,
}

impl SuiteSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Await one case and record its outcome.
    ///
    /// A failure is recorded and logged, never propagated: later cases
    /// still run and the caller keeps control of session teardown.
    pub async fn run<F>(&mut self, name: &str, case: F)
    where
        F: Future<Output = SuiteResult<()>>,
    {
        let start = Instant::now();
        let result = case.await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => info!("✓ {} ({} ms)", name, duration_ms),
            Err(e) => error!("✗ {} - {}", name, e),
        }

        self.cases.push(CaseReport {
            name: name.to_string(),
            passed: result.is_ok(),
            duration_ms,
            error: result.err().map(|e| e.to_string()),
        });
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    /// Log totals and collapse into a single verdict.
    pub fn finish(self) -> SuiteResult<()> {
        info!(
            "Case results: {} passed, {} failed",
            self.passed(),
            self.failed()
        );

        if self.failed() == 0 {
            return Ok(());
        }

        let failed: Vec<&str> = self
            .cases
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.name.as_str())
            .collect();
        Err(SuiteError::assertion(format!(
            "{} of {} cases failed: {}",
            failed.len(),
            self.cases.len(),
            failed.join(", ")
        )))
    }
}
