use crate::report::section_model::{
    CoverSection, FailureDetailSection, Section, SuiteTableSection, SummarySection,
};
use crate::report::sink::DocumentRenderer;

// ============================================================================
// HTML renderer — self-contained HTML document
// ============================================================================

/// Render the section sequence as a self-contained HTML document.
///
/// Features:
/// - Green/red header based on the summary's pass/fail flag
/// - Bordered summary and suite tables
/// - Failing suite rows and the failure list highlighted in red
/// - Inline CSS (no external dependencies)
pub struct HtmlRenderer;

impl DocumentRenderer for HtmlRenderer {
    fn render(&self, sections: &[Section]) -> String {
        let all_passed = sections
            .iter()
            .find_map(|s| match s {
                Section::Summary(summary) => Some(summary.all_passed),
                _ => None,
            })
            .unwrap_or(true);

        let header_color = if all_passed { "#4CAF50" } else { "#f44336" };

        let title = sections
            .iter()
            .find_map(|s| match s {
                Section::Cover(cover) => Some(cover.title.as_str()),
                _ => None,
            })
            .unwrap_or("Test Report");

        let mut body = String::new();
        for section in sections {
            match section {
                Section::Cover(cover) => render_cover(cover, &mut body),
                Section::Summary(summary) => render_summary(summary, &mut body),
                Section::SuiteTable(table) => render_suite_table(table, &mut body),
                Section::FailureDetail(detail) => render_failure_detail(detail, &mut body),
            }
        }

        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: {header_color}; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 14px; opacity: 0.9; }}
.content {{ max-width: 900px; margin: 20px auto; padding: 0 20px; }}
.status {{ font-size: 20px; font-weight: bold; margin: 16px 0; }}
.status.pass {{ color: #4CAF50; }}
.status.fail {{ color: #f44336; }}
table {{ border-collapse: collapse; background: white; width: 100%; margin-bottom: 20px; }}
th, td {{ border: 1px solid #ddd; padding: 6px 10px; font-size: 14px; text-align: left; }}
th {{ background: #e6e6e6; }}
td.num {{ text-align: right; }}
tr.fail td {{ color: #c62828; }}
.failure {{ background: white; border-left: 4px solid #f44336; border-radius: 4px; padding: 10px 14px; margin-bottom: 10px; }}
.failure h4 {{ margin: 0 0 4px 0; font-size: 15px; }}
.failure .class {{ color: #666; font-size: 13px; margin: 0 0 4px 0; }}
.failure .message {{ font-size: 13px; margin: 0; }}
</style>
</head>
<body>
<div class="content">
{body}</div>
</body>
</html>"##,
            title = escape_html(title),
            header_color = header_color,
            body = body,
        )
    }
}

fn render_cover(cover: &CoverSection, out: &mut String) {
    out.push_str(&format!(
        r#"<div class="header">
<h1>{title}</h1>
<p>Generated: {generated}</p>
<p>Project: {project}</p>
</div>
"#,
        title = escape_html(&cover.title),
        generated = escape_html(&cover.generated_at),
        project = escape_html(&cover.project_label),
    ));
}

fn render_summary(summary: &SummarySection, out: &mut String) {
    let status_class = if summary.all_passed { "pass" } else { "fail" };
    out.push_str(&format!(
        "<div class=\"status {}\">{}</div>\n<table>\n",
        status_class,
        summary.status_text()
    ));

    for row in &summary.rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td class=\"num\">{}</td></tr>\n",
            escape_html(&row.label),
            escape_html(&row.value)
        ));
    }
    out.push_str("</table>\n");
}

fn render_suite_table(table: &SuiteTableSection, out: &mut String) {
    out.push_str(
        "<table>\n<tr><th>Suite</th><th>Tests</th><th>Passed</th><th>Failed</th><th>Time(s)</th></tr>\n",
    );

    for row in &table.rows {
        let row_class = if row.failing { " class=\"fail\"" } else { "" };
        out.push_str(&format!(
            "<tr{}><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            row_class,
            escape_html(&row.display_name),
            row.total,
            row.passed,
            row.failed,
            escape_html(&row.elapsed),
        ));
    }
    out.push_str("</table>\n");
}

fn render_failure_detail(detail: &FailureDetailSection, out: &mut String) {
    out.push_str(&format!(
        "<h2>Failed tests ({})</h2>\n",
        detail.entries.len()
    ));

    for entry in &detail.entries {
        out.push_str(&format!(
            r#"<div class="failure">
<h4>{seq}. {name}</h4>
"#,
            seq = entry.sequence,
            name = escape_html(&entry.case_name),
        ));
        if !entry.class_name.is_empty() {
            out.push_str(&format!(
                "<p class=\"class\">{}</p>\n",
                escape_html(&entry.class_name)
            ));
        }
        if !entry.message.is_empty() {
            out.push_str(&format!(
                "<p class=\"message\">{}</p>\n",
                escape_html(&entry.message)
            ));
        }
        out.push_str("</div>\n");
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
