//! Unified diff previews for dry runs

use similar::TextDiff;

/// Unified diff between the loaded and rewritten text of `path`
pub fn unified_diff(path: &str, original: &str, modified: &str) -> String {
    TextDiff::from_lines(original, modified)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}
