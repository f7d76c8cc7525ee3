use std::borrow::Cow;

use crate::policy::{self, CommentStyle, SplitStyle};

/// Delimiters that separate code tokens, in addition to whitespace.
/// Operators like `+` are deliberately absent so short expressions such as
/// `a+b` survive as single tokens.
const CODE_DELIMITERS: &[char] = &[
    '{', '}', '(', ')', ';', '.', ',', '=', ':', '<', '>', '[', ']',
];

/// Prose tokens this short are stop-word noise and are dropped.
const MIN_PROSE_TOKEN_LEN: usize = 3;

/// Convert raw text into a sequence of normalized (lowercased) tokens,
/// applying the comment-stripping and splitting policy for the given
/// content-type label.
///
/// Empty input yields an empty sequence. Unrecognized labels get the prose
/// policy: no comment stripping, word-character splitting.
#[must_use]
pub fn tokenize(text: &str, label: &str) -> Vec<String> {
    let policy = policy::policy_for(label);

    let stripped: Cow<'_, str> = match policy.comment_style {
        CommentStyle::CFamily => {
            Cow::Owned(strip_block_comments(&strip_line_comments(text, "//"), "/*", "*/"))
        }
        CommentStyle::Hash => Cow::Owned(strip_line_comments(text, "#")),
        CommentStyle::Markup => Cow::Owned(strip_block_comments(text, "<!--", "-->")),
        CommentStyle::Sql => {
            Cow::Owned(strip_block_comments(&strip_line_comments(text, "--"), "/*", "*/"))
        }
        CommentStyle::None => Cow::Borrowed(text),
    };

    let lowered = stripped.to_lowercase();

    match policy.split_style {
        SplitStyle::Code => lowered
            .split(|c: char| c.is_whitespace() || CODE_DELIMITERS.contains(&c))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        SplitStyle::Prose => {
            let words: String = lowered
                .chars()
                .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
                .collect();
            words
                .split_whitespace()
                .filter(|t| t.chars().count() >= MIN_PROSE_TOKEN_LEN)
                .map(str::to_string)
                .collect()
        }
    }
}

/// Remove `marker ... end-of-line` comments from every line.
fn strip_line_comments(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match line.find(marker) {
            Some(pos) => out.push_str(&line[..pos]),
            None => out.push_str(line),
        }
    }
    out
}

/// Remove non-greedy `open ... close` comments, which may span lines.
/// An unterminated comment is left in place rather than swallowing the
/// rest of the document.
fn strip_block_comments(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let after_open = start + open.len();
        match rest[after_open..].find(close) {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &rest[after_open + end + close.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
