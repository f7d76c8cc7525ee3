//! Content-type label to tokenization policy mapping.
//!
//! The engine never inspects a label beyond looking it up here, so adding a
//! language is a single table row.

/// Which comment syntax to strip before tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` line comments and `/* ... */` block comments.
    CFamily,
    /// `#` line comments.
    Hash,
    /// `<!-- ... -->` comments.
    Markup,
    /// `--` line comments and `/* ... */` block comments.
    Sql,
    /// No comment stripping.
    None,
}

/// How to split the (lowercased, comment-stripped) text into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStyle {
    /// Split on structural delimiters and whitespace; keep single-character
    /// tokens, since operators and short identifiers matter in code.
    Code,
    /// Replace non-word characters with spaces, split on whitespace, and drop
    /// tokens of length <= 2 to filter stop-word noise.
    Prose,
}

/// Tokenization policy for one content-type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPolicy {
    pub comment_style: CommentStyle,
    pub split_style: SplitStyle,
}

impl TokenPolicy {
    /// Whether this label is weighted as code by the scorer.
    #[must_use]
    pub fn is_code(&self) -> bool {
        self.split_style == SplitStyle::Code
    }
}

/// Label -> policy table. Unlisted labels fall through to the prose default,
/// which also covers the "Unknown" fallback label.
const POLICIES: &[(&str, CommentStyle, SplitStyle)] = &[
    ("JavaScript", CommentStyle::CFamily, SplitStyle::Code),
    ("TypeScript", CommentStyle::CFamily, SplitStyle::Code),
    ("React", CommentStyle::CFamily, SplitStyle::Code),
    ("Java", CommentStyle::CFamily, SplitStyle::Code),
    ("C", CommentStyle::CFamily, SplitStyle::Code),
    ("C++", CommentStyle::CFamily, SplitStyle::Code),
    ("C#", CommentStyle::CFamily, SplitStyle::Code),
    ("Go", CommentStyle::CFamily, SplitStyle::Code),
    ("Swift", CommentStyle::CFamily, SplitStyle::Code),
    ("Kotlin", CommentStyle::CFamily, SplitStyle::Code),
    ("PHP", CommentStyle::CFamily, SplitStyle::Code),
    ("Rust", CommentStyle::CFamily, SplitStyle::Code),
    ("CSS", CommentStyle::CFamily, SplitStyle::Code),
    ("Python", CommentStyle::Hash, SplitStyle::Code),
    ("Ruby", CommentStyle::Hash, SplitStyle::Code),
    ("R", CommentStyle::Hash, SplitStyle::Code),
    ("Julia", CommentStyle::Hash, SplitStyle::Code),
    ("Perl", CommentStyle::Hash, SplitStyle::Code),
    ("HTML", CommentStyle::Markup, SplitStyle::Code),
    ("XML", CommentStyle::Markup, SplitStyle::Code),
    ("SVG", CommentStyle::Markup, SplitStyle::Code),
    ("SQL", CommentStyle::Sql, SplitStyle::Code),
    ("JSON", CommentStyle::None, SplitStyle::Code),
    ("CSV", CommentStyle::None, SplitStyle::Code),
    ("Text", CommentStyle::None, SplitStyle::Prose),
    ("Markdown", CommentStyle::None, SplitStyle::Prose),
    ("Word", CommentStyle::None, SplitStyle::Prose),
    ("PDF", CommentStyle::None, SplitStyle::Prose),
    ("Rich Text", CommentStyle::None, SplitStyle::Prose),
];

/// Look up the tokenization policy for a content-type label.
#[must_use]
pub fn policy_for(label: &str) -> TokenPolicy {
    for &(name, comment_style, split_style) in POLICIES {
        if name == label {
            return TokenPolicy {
                comment_style,
                split_style,
            };
        }
    }
    TokenPolicy {
        comment_style: CommentStyle::None,
        split_style: SplitStyle::Prose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_family_languages_use_code_policy() {
        for label in ["JavaScript", "Rust", "Go", "C++"] {
            let policy = policy_for(label);
            assert_eq!(policy.comment_style, CommentStyle::CFamily);
            assert_eq!(policy.split_style, SplitStyle::Code);
            assert!(policy.is_code());
        }
    }

    #[test]
    fn hash_comment_languages() {
        for label in ["Python", "Ruby", "R", "Julia", "Perl"] {
            assert_eq!(policy_for(label).comment_style, CommentStyle::Hash);
        }
    }

    #[test]
    fn markup_and_sql() {
        assert_eq!(policy_for("HTML").comment_style, CommentStyle::Markup);
        assert_eq!(policy_for("SVG").comment_style, CommentStyle::Markup);
        assert_eq!(policy_for("SQL").comment_style, CommentStyle::Sql);
    }

    #[test]
    fn prose_labels_are_not_code() {
        for label in ["Text", "Markdown", "Word", "PDF", "Rich Text"] {
            let policy = policy_for(label);
            assert_eq!(policy.comment_style, CommentStyle::None);
            assert!(!policy.is_code());
        }
    }

    #[test]
    fn unknown_label_falls_back_to_prose() {
        let policy = policy_for("Unknown");
        assert_eq!(policy.comment_style, CommentStyle::None);
        assert_eq!(policy.split_style, SplitStyle::Prose);
        assert!(!policy.is_code());
    }

    #[test]
    fn json_splits_like_code_without_stripping() {
        let policy = policy_for("JSON");
        assert_eq!(policy.comment_style, CommentStyle::None);
        assert!(policy.is_code());
    }
}
