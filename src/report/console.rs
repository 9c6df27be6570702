use crate::report::section_model::{
    CoverSection, FailureDetailSection, Section, SuiteTableSection, SummarySection,
};
use crate::report::sink::DocumentRenderer;

// ============================================================================
// Console renderer — formatted terminal output
// ============================================================================

/// Render the section sequence as plain terminal text.
///
/// Produces output like:
/// ```text
/// === Test Execution Report ===
/// Generated: 2026-08-06 14:02:11
/// Project: shop-backend
///
/// ✗ FAILED
///   Total tests  12
///   Passed       10
/// ```
pub struct ConsoleRenderer;

impl DocumentRenderer for ConsoleRenderer {
    fn render(&self, sections: &[Section]) -> String {
        let mut out = String::new();

        for section in sections {
            match section {
                Section::Cover(cover) => render_cover(cover, &mut out),
                Section::Summary(summary) => render_summary(summary, &mut out),
                Section::SuiteTable(table) => render_suite_table(table, &mut out),
                Section::FailureDetail(detail) => render_failure_detail(detail, &mut out),
            }
        }

        out
    }
}

fn render_cover(cover: &CoverSection, out: &mut String) {
    out.push_str(&format!("=== {} ===\n", cover.title));
    out.push_str(&format!("Generated: {}\n", cover.generated_at));
    out.push_str(&format!("Project: {}\n\n", cover.project_label));
}

fn render_summary(summary: &SummarySection, out: &mut String) {
    let marker = if summary.all_passed {
        "\u{2713}"
    } else {
        "\u{2717}"
    };
    out.push_str(&format!("{} {}\n", marker, summary.status_text()));

    for row in &summary.rows {
        out.push_str(&format!("  {:<12} {}\n", row.label, row.value));
    }
    out.push('\n');
}

fn render_suite_table(table: &SuiteTableSection, out: &mut String) {
    out.push_str(&format!(
        "  {:<30} {:>6} {:>6} {:>6} {:>8}\n",
        "Suite", "Tests", "Passed", "Failed", "Time(s)"
    ));

    for row in &table.rows {
        let marker = if row.failing { "\u{2717}" } else { " " };
        out.push_str(&format!(
            "{} {:<30} {:>6} {:>6} {:>6} {:>8}\n",
            marker, row.display_name, row.total, row.passed, row.failed, row.elapsed
        ));
    }
    out.push('\n');
}

fn render_failure_detail(detail: &FailureDetailSection, out: &mut String) {
    out.push_str(&format!("Failed tests ({})\n", detail.entries.len()));

    for entry in &detail.entries {
        out.push_str(&format!("{}. {}\n", entry.sequence, entry.case_name));
        if !entry.class_name.is_empty() {
            out.push_str(&format!("   class: {}\n", entry.class_name));
        }
        if !entry.message.is_empty() {
            out.push_str(&format!("   {}\n", entry.message));
        }
    }
}
