// LogLens - core/buffer.rs
//
// In-memory log line storage. The buffer is rebuilt in full from the raw
// input text on every change; line identity is positional, not persistent.

/// Ordered collection of log lines, rebuilt from raw pasted text.
///
/// Each line is kept as the opaque raw string: no timestamp, severity, or
/// host parsing is performed. The full line is both the display unit and
/// the search unit.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Vec<String>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer contents from raw input text.
    ///
    /// Splits on newline boundaries and discards lines that are empty after
    /// trimming. No diffing or incremental update.
    pub fn set_raw(&mut self, raw: &str) {
        self.lines = raw
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
    }

    /// All lines, in input order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `idx`, if in range.
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_raw_splits_on_newlines() {
        let mut buf = LogBuffer::new();
        buf.set_raw("first line\nsecond line\nthird line");
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.line(0), Some("first line"));
        assert_eq!(buf.line(2), Some("third line"));
    }

    #[test]
    fn test_blank_lines_discarded() {
        let mut buf = LogBuffer::new();
        buf.set_raw("one\n\n   \ntwo\n\t\nthree\n");
        assert_eq!(
            buf.lines(),
            &["one".to_string(), "two".to_string(), "three".to_string()]
        );
    }

    #[test]
    fn test_lines_keep_surrounding_whitespace() {
        // Only fully-blank lines are discarded; kept lines are not trimmed.
        let mut buf = LogBuffer::new();
        buf.set_raw("  indented entry  ");
        assert_eq!(buf.line(0), Some("  indented entry  "));
    }

    #[test]
    fn test_set_raw_replaces_previous_contents() {
        let mut buf = LogBuffer::new();
        buf.set_raw("a\nb\nc");
        buf.set_raw("x");
        assert_eq!(buf.lines(), &["x".to_string()]);
    }

    #[test]
    fn test_empty_input_yields_empty_buffer() {
        let mut buf = LogBuffer::new();
        buf.set_raw("");
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }
}
