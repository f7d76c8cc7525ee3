use std::collections::HashSet;

use crate::matcher;
use crate::policy;
use crate::tokenizer;

/// Weights applied when either side is code: structural token order says more
/// about copied code than shared vocabulary does.
const CODE_JACCARD_WEIGHT: f64 = 0.3;
const CODE_SEQUENCE_WEIGHT: f64 = 0.7;

/// Weights for prose-only pairs, where vocabulary overlap dominates.
const PROSE_JACCARD_WEIGHT: f64 = 0.6;
const PROSE_SEQUENCE_WEIGHT: f64 = 0.4;

/// Score the similarity of two documents in [0, 1].
///
/// Two empty (or whitespace-only) documents are identical by definition and
/// score 1; an empty document compared against a non-empty one scores 0.
/// Otherwise the score blends Jaccard (set overlap) and sequence similarity,
/// weighted by whether either content-type label is a code type.
#[must_use]
pub fn score(text_a: &str, label_a: &str, text_b: &str, label_b: &str) -> f64 {
    let empty_a = text_a.trim().is_empty();
    let empty_b = text_b.trim().is_empty();
    if empty_a && empty_b {
        return 1.0;
    }
    if empty_a || empty_b {
        return 0.0;
    }

    let tokens_a = tokenizer::tokenize(text_a, label_a);
    let tokens_b = tokenizer::tokenize(text_b, label_b);

    let jaccard = jaccard_similarity(&tokens_a, &tokens_b);
    let sequence = matcher::sequence_similarity(&tokens_a, &tokens_b);

    if policy::policy_for(label_a).is_code() || policy::policy_for(label_b).is_code() {
        CODE_JACCARD_WEIGHT * jaccard + CODE_SEQUENCE_WEIGHT * sequence
    } else {
        PROSE_JACCARD_WEIGHT * jaccard + PROSE_SEQUENCE_WEIGHT * sequence
    }
}

/// |A ∩ B| / |A ∪ B| over the token sets. 0 when the union is empty.
#[must_use]
pub fn jaccard_similarity(tokens_a: &[String], tokens_b: &[String]) -> f64 {
    let set_a: HashSet<&str> = tokens_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn two_empty_documents_are_identical() {
        assert_eq!(score("", "Text", "", "Text"), 1.0);
        assert_eq!(score("   \n ", "Python", "\t", "Text"), 1.0);
    }

    #[test]
    fn empty_versus_nonempty_scores_zero() {
        assert_eq!(score("", "Text", "hello world today", "Text"), 0.0);
        assert_eq!(score("x = 1", "Python", "  ", "Python"), 0.0);
    }

    #[test]
    fn identical_nonempty_content_scores_exactly_one() {
        // Jaccard 1 and sequence 1 blend to 1 under either weighting.
        let prose = "the quick brown fox jumps over";
        assert!((score(prose, "Text", prose, "Text") - 1.0).abs() < 1e-12);
        let code = "def add(a, b):\n    return a + b\n";
        assert!((score(code, "Python", code, "Python") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn score_is_always_in_bounds() {
        let samples = [
            ("", "Text"),
            ("one two three", "Text"),
            ("x = y + z; x = y + z; q = r", "JavaScript"),
            ("<p>hello</p>", "HTML"),
        ];
        for (a, la) in &samples {
            for (b, lb) in &samples {
                let s = score(a, la, b, lb);
                assert!((0.0..=1.0).contains(&s), "score {s} out of bounds");
            }
        }
    }

    #[test]
    fn code_pairs_weight_sequence_over_vocabulary() {
        // Same vocabulary, scrambled order: sequence similarity collapses,
        // so the code weighting must score lower than the prose weighting.
        let a = "alpha beta gamma delta epsilon zeta";
        let b = "zeta epsilon delta gamma beta alpha";
        let as_code = score(a, "Python", b, "Python");
        let as_prose = score(a, "Text", b, "Text");
        assert!(as_code < as_prose);
    }

    #[test]
    fn mixed_pair_uses_code_weighting() {
        // One code side is enough to select the code blend.
        let a = "alpha beta gamma delta epsilon zeta";
        let b = "zeta epsilon delta gamma beta alpha";
        let mixed = score(a, "Python", b, "Text");
        let as_code = score(a, "Python", b, "Python");
        assert!((mixed - as_code).abs() < 1e-9);
    }

    #[test]
    fn unrelated_prose_scores_low() {
        let s = score(
            "The quick brown fox",
            "Text",
            "A slow green turtle",
            "Text",
        );
        assert!(s < 0.2, "expected low score, got {s}");
    }

    #[test]
    fn similar_code_scores_high() {
        let s = score(
            "function add(a,b){return a+b;}",
            "JavaScript",
            "function add(a,b){return a-b;}",
            "JavaScript",
        );
        assert!(s > 0.7, "expected high score, got {s}");
    }

    #[test]
    fn jaccard_of_disjoint_sets_is_zero() {
        assert_eq!(jaccard_similarity(&toks("a b"), &toks("c d")), 0.0);
    }

    #[test]
    fn jaccard_counts_distinct_tokens_once() {
        // {a, b} vs {a, c}: intersection 1, union 3.
        let j = jaccard_similarity(&toks("a a b"), &toks("a c c"));
        assert!((j - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn jaccard_of_empty_sets_is_zero() {
        assert_eq!(jaccard_similarity(&[], &[]), 0.0);
    }
}
