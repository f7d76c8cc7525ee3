use crate::file::FileRecord;
use crate::matcher;
use crate::similarity;
use crate::tokenizer;

/// Minimum matched-run length for a phrase to be worth showing.
const PHRASE_MIN_RUN: usize = 4;

/// Cap on reported phrases per pair, so evidence stays readable.
const MAX_PHRASES: usize = 5;

/// The outcome of comparing one unordered pair of files.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComparisonResult {
    /// Stable per-pair id: `file_a.id + "-" + file_b.id` in comparison order.
    pub id: String,
    pub file_a: FileRecord,
    pub file_b: FileRecord,
    pub similarity_score: f64,
    /// Longest shared phrases, length descending, at most five.
    pub matched_phrases: Vec<String>,
}

/// Summary counters for one analysis run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComparisonStats {
    pub total_files: usize,
    pub total_pairs: usize,
    /// Pairs at or above the flag threshold.
    pub flagged_pairs: usize,
    pub highest_score: f64,
}

/// Compare every unordered pair of input files.
///
/// Returns one result per pair `(i, j)` with `i < j` in input order, sorted
/// by similarity score descending (ties keep enumeration order). Total for
/// zero or one inputs: the result is simply empty.
#[must_use]
pub fn compare(files: &[FileRecord]) -> Vec<ComparisonResult> {
    let mut results = Vec::with_capacity(files.len().saturating_sub(1) * files.len() / 2);

    for i in 0..files.len() {
        for j in (i + 1)..files.len() {
            let file_a = &files[i];
            let file_b = &files[j];

            let similarity_score = similarity::score(
                &file_a.content,
                &file_a.kind,
                &file_b.content,
                &file_b.kind,
            );
            let matched_phrases = matched_phrases(file_a, file_b);

            results.push(ComparisonResult {
                id: format!("{}-{}", file_a.id, file_b.id),
                file_a: file_a.clone(),
                file_b: file_b.clone(),
                similarity_score,
                matched_phrases,
            });
        }
    }

    results.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
    results
}

/// Longest shared token runs rendered as space-joined phrases, capped at
/// [`MAX_PHRASES`]. The matcher already sorts runs by length descending.
fn matched_phrases(file_a: &FileRecord, file_b: &FileRecord) -> Vec<String> {
    let tokens_a = tokenizer::tokenize(&file_a.content, &file_a.kind);
    let tokens_b = tokenizer::tokenize(&file_b.content, &file_b.kind);

    matcher::common_runs(&tokens_a, &tokens_b, PHRASE_MIN_RUN)
        .into_iter()
        .take(MAX_PHRASES)
        .map(|run| run.join(" "))
        .collect()
}

/// Compute summary counters for a comparison run.
#[must_use]
pub fn compute_stats(
    files: &[FileRecord],
    results: &[ComparisonResult],
    flag_threshold: f64,
) -> ComparisonStats {
    ComparisonStats {
        total_files: files.len(),
        total_pairs: results.len(),
        flagged_pairs: results
            .iter()
            .filter(|r| r.similarity_score >= flag_threshold)
            .count(),
        highest_score: results
            .iter()
            .map(|r| r.similarity_score)
            .fold(0.0, f64::max),
    }
}
