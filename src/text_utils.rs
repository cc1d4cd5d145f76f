//! Text cleanup helpers applied to editor input.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static RE_REPEATED_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Collapse every run of two or more `\n` into a single `\n`.
///
/// Nothing else is touched: interior whitespace, carriage returns and case
/// survive as typed. Returns `Cow::Borrowed` when the input is already clean,
/// which callers use to skip rebuilding the editor.
pub fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    RE_REPEATED_NEWLINES.replace_all(text, "\n")
}

/// Map a line index in `text` to the index of the same line once
/// [`collapse_blank_lines`] has been applied.
pub fn collapsed_line_index(text: &str, line: usize) -> usize {
    let prefix_len = text
        .split('\n')
        .take(line)
        .map(|segment| segment.len() + 1)
        .sum::<usize>()
        .min(text.len());
    collapse_blank_lines(&text[..prefix_len])
        .bytes()
        .filter(|byte| *byte == b'\n')
        .count()
}
