use crate::report::console::ConsoleRenderer;
use crate::report::html::HtmlRenderer;
use crate::report::json::JsonRenderer;
use crate::report::section_model::Section;

// ============================================================================
// Document renderer seam — the report core only hands over sections
// ============================================================================

/// Renders an ordered section sequence into a complete document. Pagination,
/// styling, and layout belong to the implementation; the section sequence is
/// the whole contract.
pub trait DocumentRenderer {
    fn render(&self, sections: &[Section]) -> String;
}

/// Select a renderer by format name. Unknown names fall back to HTML, the
/// default document format.
pub fn renderer_for(format: &str) -> Box<dyn DocumentRenderer> {
    match format {
        "console" => Box::new(ConsoleRenderer),
        "json" => Box::new(JsonRenderer),
        _ => Box::new(HtmlRenderer),
    }
}

/// Default output filename for a format.
pub fn default_output_name(format: &str) -> &'static str {
    match format {
        "console" => "test-report.txt",
        "json" => "test-report.json",
        _ => "test-report.html",
    }
}
