//! Finds the link token under the cursor when nothing is selected.

use crate::pattern;
use crate::span::{Position, Span};
use regex::Regex;

/// Returns the span of the markdown link or bare URL on `line_text` that
/// contains `cursor`, or an empty span at `cursor` if there is none.
///
/// Markdown links are tried before bare URLs so that a cursor inside
/// `[label](url)` selects the whole link rather than just `url`. Within each
/// pass the first containing match from the left wins. Containment is
/// inclusive at both ends: a cursor sitting right after the last char still
/// counts as inside.
pub fn locate(line_text: &str, cursor: Position) -> Span {
    first_containing(pattern::markdown_link(), line_text, cursor)
        .or_else(|| first_containing(pattern::url(), line_text, cursor))
        .unwrap_or_else(|| Span::empty_at(cursor))
}

fn first_containing(re: &Regex, line_text: &str, cursor: Position) -> Option<Span> {
    re.find_iter(line_text).find_map(|m| {
        let start = char_col(line_text, m.start());
        let end = start + m.as_str().chars().count();
        (start <= cursor.ch && cursor.ch <= end).then(|| Span::on_line(cursor.line, start, end))
    })
}

/// Converts a byte offset into `text` to a char column.
fn char_col(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}
