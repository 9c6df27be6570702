use chrono::{DateTime, Local};

use crate::report::section_model::{
    CoverSection, FailureDetailSection, FailureEntry, Section, SuiteRow, SuiteTableSection,
    SummaryRow, SummarySection,
};
use crate::summary::summary_model::RunSummary;

// ============================================================================
// Report builder — pure projection of a RunSummary into sections
// ============================================================================

/// Maximum length of a suite's display name in the table, in characters.
pub const MAX_DISPLAY_NAME_CHARS: usize = 30;

/// Caller-supplied report metadata. The timestamp comes from outside so the
/// builder stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Report title shown on the cover
    pub title: String,

    /// When the report was generated
    pub generated_at: DateTime<Local>,

    /// Label of the project the run belongs to
    pub project_label: String,
}

/// Build the ordered section sequence for one run.
///
/// Cover and Summary are always emitted. The suite table is omitted when the
/// run has no suites, and the failure detail section is omitted when no case
/// failed anywhere; an empty run therefore yields exactly two sections with
/// all-zero counts and `all_passed = true`.
pub fn build_sections(summary: &RunSummary, meta: &ReportMeta) -> Vec<Section> {
    let mut sections = vec![
        Section::Cover(build_cover(meta)),
        Section::Summary(build_summary(summary)),
    ];

    if !summary.suites.is_empty() {
        sections.push(Section::SuiteTable(build_suite_table(summary)));
    }

    if summary.has_case_failures() {
        sections.push(Section::FailureDetail(build_failure_detail(summary)));
    }

    sections
}

fn build_cover(meta: &ReportMeta) -> CoverSection {
    CoverSection {
        title: meta.title.clone(),
        generated_at: meta.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        project_label: meta.project_label.clone(),
    }
}

fn build_summary(summary: &RunSummary) -> SummarySection {
    let rows = vec![
        row("Total tests", summary.total_tests.to_string()),
        row("Passed", summary.total_passed.to_string()),
        row("Failures", summary.total_failures.to_string()),
        row("Errors", summary.total_errors.to_string()),
        row("Skipped", summary.total_skipped.to_string()),
        row("Total time", format!("{:.2}s", summary.total_elapsed_seconds)),
    ];

    SummarySection {
        all_passed: summary.all_passed(),
        rows,
    }
}

fn build_suite_table(summary: &RunSummary) -> SuiteTableSection {
    let rows = summary
        .suites
        .iter()
        .map(|suite| {
            let failed = suite.failed();
            SuiteRow {
                display_name: short_display_name(&suite.name),
                total: suite.total,
                passed: suite.passed(),
                failed,
                elapsed: format!("{:.2}", suite.elapsed_seconds),
                failing: failed > 0,
            }
        })
        .collect();

    SuiteTableSection { rows }
}

fn build_failure_detail(summary: &RunSummary) -> FailureDetailSection {
    let entries = summary
        .case_failures()
        .enumerate()
        .map(|(i, failure)| FailureEntry {
            sequence: i + 1,
            case_name: failure.case_name.clone(),
            class_name: failure.class_name.clone(),
            message: failure.message.replace('\n', " ").trim().to_string(),
        })
        .collect();

    FailureDetailSection { entries }
}

/// Tabular display name: the last `.`-delimited segment (the full name when
/// no `.` is present), truncated to 30 characters.
pub fn short_display_name(name: &str) -> String {
    let short = name.rsplit('.').next().unwrap_or(name);
    short.chars().take(MAX_DISPLAY_NAME_CHARS).collect()
}

fn row(label: &str, value: String) -> SummaryRow {
    SummaryRow {
        label: label.to_string(),
        value,
    }
}
