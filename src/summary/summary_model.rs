use serde::{Deserialize, Serialize};

// ============================================================================
// Normalized result model — built once by the aggregator, read-only after
// ============================================================================

/// One failing or erroring test case within a suite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFailure {
    /// Case name; empty when the source omits it
    pub case_name: String,

    /// Owning class name; empty when the source omits it
    pub class_name: String,

    /// Failure description, truncated at ingestion
    pub message: String,
}

/// One test suite's normalized outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    /// Suite identifier (often a qualified class name)
    pub name: String,

    /// Total case count
    pub total: u64,

    /// Assertion failure count
    pub failures: u64,

    /// Unexpected error count
    pub errors: u64,

    /// Skipped case count
    pub skipped: u64,

    /// Wall-clock seconds for the suite
    pub elapsed_seconds: f64,

    /// Failing cases in source order
    pub failed_cases: Vec<CaseFailure>,
}

impl SuiteResult {
    /// Passing case count. The aggregator guarantees
    /// `failures + errors + skipped <= total`, so this never underflows.
    pub fn passed(&self) -> u64 {
        self.total - self.failures - self.errors - self.skipped
    }

    /// Failed count as shown in the suite table (failures + errors).
    pub fn failed(&self) -> u64 {
        self.failures + self.errors
    }
}

/// Aggregate of all suites in one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Suites in discovery order
    pub suites: Vec<SuiteResult>,

    pub total_tests: u64,
    pub total_failures: u64,
    pub total_errors: u64,
    pub total_skipped: u64,
    pub total_passed: u64,
    pub total_elapsed_seconds: f64,
}

impl RunSummary {
    /// Whether the run passed overall. Skips do not affect pass/fail status.
    pub fn all_passed(&self) -> bool {
        self.total_failures == 0 && self.total_errors == 0
    }

    /// All case failures across all suites, in suite order then case order.
    pub fn case_failures(&self) -> impl Iterator<Item = &CaseFailure> {
        self.suites.iter().flat_map(|s| s.failed_cases.iter())
    }

    /// Whether any suite recorded a case failure.
    pub fn has_case_failures(&self) -> bool {
        self.suites.iter().any(|s| !s.failed_cases.is_empty())
    }
}
