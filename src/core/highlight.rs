// LogLens - core/highlight.rs
//
// Query-occurrence highlighting. Produces byte ranges into the original
// line for every case-insensitive occurrence of the query; the UI layer
// turns ranges into styled text segments.
//
// Matching is a literal substring scan, never a compiled pattern, so query
// text containing regex metacharacters is matched verbatim and line text is
// never interpreted as markup.

/// Byte range of one query occurrence within a line.
///
/// `start..end` index the *original* string, so slicing with them is always
/// valid even when lowercasing changes byte lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Find every case-insensitive occurrence of `query` in `line`.
///
/// All occurrences are reported, not just the first. Occurrences do not
/// overlap: the scan resumes after the end of each match. An empty (or
/// whitespace-only) query yields no spans.
pub fn spans(line: &str, query: &str) -> Vec<HighlightSpan> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    // Lowercase both sides, keeping a map from each byte of the lowered
    // line back to the byte offset of the originating char in `line`.
    // Lowercasing can change byte lengths (e.g. 'İ' folds to two chars),
    // so matching offsets in the lowered string cannot index the original
    // directly.
    let query_lower = query.to_lowercase();
    let mut lower = String::with_capacity(line.len());
    let mut origin: Vec<usize> = Vec::with_capacity(line.len() + 1);

    for (byte_idx, ch) in line.char_indices() {
        for folded in ch.to_lowercase() {
            let start_len = lower.len();
            lower.push(folded);
            for _ in start_len..lower.len() {
                origin.push(byte_idx);
            }
        }
    }
    origin.push(line.len());

    let mut result = Vec::new();
    let mut search_from = 0;
    while let Some(found) = lower[search_from..].find(&query_lower) {
        let lower_start = search_from + found;
        let lower_end = lower_start + query_lower.len();
        result.push(HighlightSpan {
            start: origin[lower_start],
            end: origin[lower_end],
        });
        search_from = lower_end;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked<'a>(line: &'a str, query: &str) -> Vec<&'a str> {
        spans(line, query)
            .iter()
            .map(|s| &line[s.start..s.end])
            .collect()
    }

    #[test]
    fn test_case_insensitive_occurrence_marked() {
        let line = "ERROR disk full";
        let s = spans(line, "error");
        assert_eq!(s, vec![HighlightSpan { start: 0, end: 5 }]);
        assert_eq!(&line[s[0].start..s[0].end], "ERROR");
    }

    #[test]
    fn test_all_occurrences_marked() {
        assert_eq!(
            marked("foo bar foo baz foo qux foo", "foo"),
            vec!["foo", "foo", "foo", "foo"]
        );
    }

    #[test]
    fn test_mixed_case_occurrences() {
        assert_eq!(marked("Retry retry RETRY", "retry"), vec!["Retry", "retry", "RETRY"]);
    }

    #[test]
    fn test_surrounding_text_untouched() {
        let line = "link flap on Gi0/1";
        let s = spans(line, "flap");
        assert_eq!(s.len(), 1);
        assert_eq!(&line[..s[0].start], "link ");
        assert_eq!(&line[s[0].end..], " on Gi0/1");
    }

    #[test]
    fn test_empty_query_yields_no_spans() {
        assert!(spans("anything", "").is_empty());
        assert!(spans("anything", "   ").is_empty());
    }

    #[test]
    fn test_no_match_yields_no_spans() {
        assert!(spans("all quiet", "error").is_empty());
    }

    #[test]
    fn test_metacharacters_match_literally() {
        // The query is data, not pattern syntax.
        assert_eq!(marked("a.b and axb", "a.b"), vec!["a.b"]);
        assert_eq!(marked("open [ bracket", "["), vec!["["]);
        assert_eq!(marked("%PKI-3-CRL_FETCH_FAIL", "%pki"), vec!["%PKI"]);
    }

    #[test]
    fn test_spans_are_valid_byte_offsets_with_multibyte_text() {
        let line = "café RÉSUMÉ café";
        for span in spans(line, "café") {
            // Slicing must not panic and must reproduce a case-variant of
            // the query.
            let slice = &line[span.start..span.end];
            assert_eq!(slice.to_lowercase(), "café");
        }
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        let line = "aaaa";
        let s = spans(line, "aa");
        assert_eq!(
            s,
            vec![
                HighlightSpan { start: 0, end: 2 },
                HighlightSpan { start: 2, end: 4 }
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let line = "ERROR then error again";
        assert_eq!(spans(line, "error"), spans(line, "error"));
    }
}
