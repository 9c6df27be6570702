use crate::report::section_model::Section;
use crate::report::sink::DocumentRenderer;

// ============================================================================
// JSON renderer — machine-readable section dump
// ============================================================================

/// Render the section sequence as pretty-printed JSON for machine consumers.
/// The output is the serde projection of the section model, so it
/// deserializes back into `Vec<Section>` unchanged.
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn render(&self, sections: &[Section]) -> String {
        // Section contains only string and integer fields, so serialization
        // cannot fail.
        serde_json::to_string_pretty(sections).unwrap_or_else(|_| "[]".to_string())
    }
}
