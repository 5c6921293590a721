/// Whether the pipeline altered a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Changed,
    Unchanged,
}

/// Exact comparison of the pipeline output against the text as loaded
pub fn detect_change(original: &str, current: &str) -> Change {
    if original == current {
        Change::Unchanged
    } else {
        Change::Changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        assert_eq!(detect_change("a\n", "a\n"), Change::Unchanged);
        assert_eq!(detect_change("a\n", "a"), Change::Changed);
        assert_eq!(detect_change("a\n", "a\r\n"), Change::Changed);
    }
}
