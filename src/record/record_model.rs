use serde::{Deserialize, Serialize};

/// One suite-level result record as found in the source, before any
/// normalization. Every field the source may omit is an `Option`; the
/// accessor methods apply the documented defaults so downstream code never
/// touches a missing attribute directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSuiteRecord {
    /// Suite name attribute (often a qualified class name)
    pub name: Option<String>,

    /// Total case count, verbatim attribute text
    pub tests: Option<String>,

    /// Failure count, verbatim attribute text
    pub failures: Option<String>,

    /// Error count, verbatim attribute text
    pub errors: Option<String>,

    /// Skipped count, verbatim attribute text
    pub skipped: Option<String>,

    /// Elapsed seconds, verbatim attribute text
    pub time: Option<String>,

    /// Per-case entries in source order
    pub cases: Vec<RawCaseRecord>,
}

impl RawSuiteRecord {
    /// Total case count; 0 when absent or unparsable.
    pub fn tests_count(&self) -> u64 {
        parse_count(&self.tests)
    }

    /// Failure count; 0 when absent or unparsable.
    pub fn failure_count(&self) -> u64 {
        parse_count(&self.failures)
    }

    /// Error count; 0 when absent or unparsable.
    pub fn error_count(&self) -> u64 {
        parse_count(&self.errors)
    }

    /// Skipped count; 0 when absent or unparsable.
    pub fn skipped_count(&self) -> u64 {
        parse_count(&self.skipped)
    }

    /// Elapsed seconds; 0.0 when absent or unparsable.
    pub fn elapsed_seconds(&self) -> f64 {
        self.time
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

/// One test case entry within a suite record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCaseRecord {
    /// Case name attribute
    pub name: Option<String>,

    /// Class name attribute
    pub classname: Option<String>,

    /// Failure marker, if the case failed an assertion
    pub failure: Option<RawIssue>,

    /// Error marker, if the case raised unexpectedly
    pub error: Option<RawIssue>,
}

/// A failure or error marker on a case entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssue {
    /// Explicit message attribute
    pub message: Option<String>,

    /// Free-form element body text
    pub body: Option<String>,
}

fn parse_count(raw: &Option<String>) -> u64 {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
}
