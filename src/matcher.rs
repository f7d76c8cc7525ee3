//! Greedy common-run detection between two token sequences.
//!
//! This is deliberately not a true longest-common-subsequence computation.
//! The scan takes the first match it finds for each position in `a`, extends
//! it as far as both sides agree, and then skips past the consumed range on
//! the `a` side. Downstream scoring and phrase extraction depend on exactly
//! this first-match-wins behavior.

/// Minimum run length used when computing sequence similarity.
pub const SIMILARITY_MIN_RUN: usize = 3;

/// Find maximal common contiguous token runs of at least `min_len`,
/// sorted by length descending.
#[must_use]
pub fn common_runs(a: &[String], b: &[String], min_len: usize) -> Vec<Vec<String>> {
    let mut runs: Vec<Vec<String>> = Vec::new();

    let mut i = 0;
    while i < a.len() {
        let mut consumed = false;
        for j in 0..b.len() {
            if a[i] != b[j] {
                continue;
            }
            let mut len = 1;
            while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
                len += 1;
            }
            if len >= min_len {
                runs.push(a[i..i + len].to_vec());
                i += len;
                consumed = true;
                break;
            }
        }
        if !consumed {
            i += 1;
        }
    }

    runs.sort_by(|x, y| y.len().cmp(&x.len()));
    runs
}

/// Fraction of the longer sequence covered by common runs of at least
/// [`SIMILARITY_MIN_RUN`] tokens, clamped to 1.0. Two empty sequences
/// score 0 here; the scorer's empty-document rule takes precedence for
/// fully-empty inputs.
#[must_use]
pub fn sequence_similarity(a: &[String], b: &[String]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    let matched: usize = common_runs(a, b, SIMILARITY_MIN_RUN)
        .iter()
        .map(Vec::len)
        .sum();
    (matched as f64 / max_len as f64).min(1.0)
}
