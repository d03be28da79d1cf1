//! Splitting text into records.

/// One non-empty, comment-stripped line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    /// 1-based line number in the source.
    pub line: usize,
    /// Trimmed content with any trailing comment removed.
    pub text: &'a str,
}

impl<'a> Record<'a> {
    /// Whitespace-separated fields.
    pub fn fields(&self) -> impl Iterator<Item = &'a str> {
        self.text.split_whitespace()
    }
}

/// Yield the records of `source`.
///
/// Blank lines and lines that start with `comment_marker` are skipped;
/// anything from the first marker onwards is dropped from the rest.
pub fn records<'a>(
    source: &'a str,
    comment_marker: &'a str,
) -> impl Iterator<Item = Record<'a>> + 'a {
    source.lines().enumerate().filter_map(move |(i, raw)| {
        let text = match raw.find(comment_marker) {
            Some(at) => &raw[..at],
            None => raw,
        }
        .trim();
        (!text.is_empty()).then_some(Record { line: i + 1, text })
    })
}
