// LogLens - core/filter.rs
//
// Case-insensitive substring filter over the log buffer.
// Core layer: pure logic, no I/O or UI dependencies.

/// Normalise a raw search query: trim surrounding whitespace.
///
/// An empty (or whitespace-only) query matches everything. Comparison is
/// case-insensitive; the caller keeps the original casing for display.
pub fn normalise_query(raw: &str) -> &str {
    raw.trim()
}

/// Apply the query to a slice of lines, returning indices of matching lines.
///
/// Returns a Vec of indices into the original slice. This avoids copying
/// lines and enables virtual scrolling on the filtered view. Order is
/// preserved; the result is a pure function of (lines, query).
pub fn apply(lines: &[String], query: &str) -> Vec<usize> {
    let query = normalise_query(query);
    if query.is_empty() {
        return (0..lines.len()).collect();
    }

    let query_lower = query.to_lowercase();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Summary-count line for the status bar.
///
/// `"{matching} matching lines / {total} total lines"`; degrades to
/// `"0 total lines"` when the buffer is empty.
pub fn summary(total: usize, matching: usize) -> String {
    if total == 0 {
        "0 total lines".to_string()
    } else {
        format!("{matching} matching lines / {total} total lines")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let logs = lines(&["alpha", "beta", "gamma"]);
        assert_eq!(apply(&logs, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_whitespace_only_query_matches_everything() {
        let logs = lines(&["alpha", "beta"]);
        assert_eq!(apply(&logs, "   \t"), vec![0, 1]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let logs = lines(&["Connection FAILED", "Connection succeeded"]);
        assert_eq!(apply(&logs, "failed"), vec![0]);
        assert_eq!(apply(&logs, "CONNECTION"), vec![0, 1]);
    }

    #[test]
    fn test_non_matching_lines_excluded() {
        let logs = lines(&["disk full", "link up", "disk degraded"]);
        let matched = apply(&logs, "disk");
        assert_eq!(matched, vec![0, 2]);
        for (idx, line) in logs.iter().enumerate() {
            let contains = line.to_lowercase().contains("disk");
            assert_eq!(matched.contains(&idx), contains);
        }
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let logs = lines(&["ERROR disk full"]);
        assert_eq!(apply(&logs, "  error  "), vec![0]);
    }

    #[test]
    fn test_idempotent() {
        let logs = lines(&["a1", "b2", "a3"]);
        let first = apply(&logs, "a");
        let second = apply(&logs, "a");
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_counts() {
        assert_eq!(summary(5, 2), "2 matching lines / 5 total lines");
        assert_eq!(summary(3, 3), "3 matching lines / 3 total lines");
        assert_eq!(summary(0, 0), "0 total lines");
    }
}
