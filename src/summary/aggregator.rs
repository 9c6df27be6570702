use crate::record::record_model::{RawCaseRecord, RawSuiteRecord};
use crate::summary::summary_model::{CaseFailure, RunSummary, SuiteResult};

// ============================================================================
// Aggregator — raw suite records in, one RunSummary out
// ============================================================================

/// Maximum stored length of a failure message, in characters. Applied once
/// at ingestion, never at render time.
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Aggregate raw suite records into a run-wide summary.
///
/// Every input record contributes exactly one `SuiteResult`, so
/// `summary.suites.len()` always equals the number of records examined and
/// totals stay reconcilable against the source. Suite order and case order
/// are preserved exactly; totals are plain sums.
///
/// Malformed records are recovered, not rejected: a missing name becomes the
/// placeholder `suite-<N>`, missing or unparsable counts read as zero, and a
/// record whose declared failures + errors + skipped exceed its declared
/// total has all four counts zeroed (keeping its name, elapsed time, and
/// failure detail) rather than reporting a clamped passed count.
pub fn aggregate(records: Vec<RawSuiteRecord>) -> RunSummary {
    let mut suites = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        suites.push(normalize_suite(record, index));
    }

    let mut total_tests = 0;
    let mut total_failures = 0;
    let mut total_errors = 0;
    let mut total_skipped = 0;
    let mut total_passed = 0;
    let mut total_elapsed_seconds = 0.0;

    for suite in &suites {
        total_tests += suite.total;
        total_failures += suite.failures;
        total_errors += suite.errors;
        total_skipped += suite.skipped;
        total_passed += suite.passed();
        total_elapsed_seconds += suite.elapsed_seconds;
    }

    RunSummary {
        suites,
        total_tests,
        total_failures,
        total_errors,
        total_skipped,
        total_passed,
        total_elapsed_seconds,
    }
}

fn normalize_suite(record: RawSuiteRecord, index: usize) -> SuiteResult {
    let name = match record.name.as_deref() {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => format!("suite-{}", index + 1),
    };

    let mut total = record.tests_count();
    let mut failures = record.failure_count();
    let mut errors = record.error_count();
    let mut skipped = record.skipped_count();
    let elapsed_seconds = record.elapsed_seconds();

    // Declared counts that would make the passed count negative are a data
    // error; substitute zeros instead of clamping.
    if failures + errors + skipped > total {
        total = 0;
        failures = 0;
        errors = 0;
        skipped = 0;
    }

    let failed_cases = record
        .cases
        .iter()
        .filter_map(collect_case_failure)
        .collect();

    SuiteResult {
        name,
        total,
        failures,
        errors,
        skipped,
        elapsed_seconds,
        failed_cases,
    }
}

/// Extract the failure detail for one case, if it failed or errored.
///
/// The failure marker takes precedence; the error marker is only consulted
/// when no failure marker exists. Message priority: marker message attribute,
/// then marker body text, then empty string.
fn collect_case_failure(case: &RawCaseRecord) -> Option<CaseFailure> {
    let issue = case.failure.as_ref().or(case.error.as_ref())?;

    let message = issue
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .or(issue.body.as_deref())
        .unwrap_or("");

    Some(CaseFailure {
        case_name: case.name.clone().unwrap_or_default(),
        class_name: case.classname.clone().unwrap_or_default(),
        message: truncate_chars(message, MAX_MESSAGE_CHARS),
    })
}

/// Character-count truncation, safe at multi-byte boundaries.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
