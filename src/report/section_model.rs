use serde::{Deserialize, Serialize};

// ============================================================================
// Report sections — renderer-independent units of report content
// ============================================================================

/// One unit of report content. The builder emits these in a fixed order
/// (cover, summary, suite table, failure detail); renderers decide pagination
/// and styling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Cover(CoverSection),
    Summary(SummarySection),
    SuiteTable(SuiteTableSection),
    FailureDetail(FailureDetailSection),
}

/// Title page. Purely descriptive, no computed content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverSection {
    /// Report title
    pub title: String,

    /// Generation timestamp, preformatted `YYYY-MM-DD HH:MM:SS`
    pub generated_at: String,

    /// Label of the project the run belongs to
    pub project_label: String,
}

/// Overall run status plus the six summary rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarySection {
    /// Semantic pass/fail flag for renderer styling
    pub all_passed: bool,

    /// Total tests, passed, failures, errors, skipped, total time
    pub rows: Vec<SummaryRow>,
}

impl SummarySection {
    /// Status line as shown on the report.
    pub fn status_text(&self) -> &'static str {
        if self.all_passed { "ALL PASSED" } else { "FAILED" }
    }
}

/// One label/value pair in the summary section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

/// One row per suite, in stored suite order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuiteTableSection {
    pub rows: Vec<SuiteRow>,
}

/// One suite's line in the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuiteRow {
    /// Short display name, package prefix stripped, at most 30 characters
    pub display_name: String,

    /// Total case count
    pub total: u64,

    /// Passing case count
    pub passed: u64,

    /// Failures plus errors
    pub failed: u64,

    /// Elapsed seconds, preformatted to 2 decimals
    pub elapsed: String,

    /// Semantic flag: renderers style this row as failing
    pub failing: bool,
}

/// Flat list of every case failure across the run. Omitted entirely from the
/// section sequence when the run has no case failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailureDetailSection {
    pub entries: Vec<FailureEntry>,
}

/// One failing case, numbered across the whole run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailureEntry {
    /// 1-indexed position in the flat failure list
    pub sequence: usize,

    pub case_name: String,
    pub class_name: String,

    /// Already truncated at ingestion; newline-collapsed and trimmed
    pub message: String,
}
