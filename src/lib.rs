pub mod comparator;
pub mod config;
pub mod error;
pub mod file;
pub mod grouper;
pub mod matcher;
pub mod output;
pub mod policy;
pub mod scanner;
pub mod similarity;
pub mod tokenizer;

pub use comparator::{ComparisonResult, ComparisonStats, compare};
pub use file::FileRecord;
pub use grouper::{GroupedResult, group_by_type};

use config::Config;

/// The result of a full analysis run.
pub struct AnalysisResult {
    pub stats: ComparisonStats,
    pub files: Vec<FileRecord>,
    pub results: Vec<ComparisonResult>,
    pub groups: Vec<GroupedResult>,
    pub warnings: Vec<String>,
}

/// Run the full analysis pipeline.
///
/// Scans the configured root for files, reads them into records, compares
/// every unordered pair, and buckets the results by content type. Fails only
/// when the scan finds nothing at all; unreadable files degrade to warnings.
pub fn analyze(config: &Config) -> error::Result<AnalysisResult> {
    // 1. Collect input files
    let scan_config =
        scanner::ScanConfig::new(config.root.clone()).with_excludes(config.exclude.clone());
    let paths = scanner::scan_paths(&scan_config);

    if paths.is_empty() {
        return Err(error::Error::NoInputFiles(config.root.clone()));
    }

    // 2. Read and classify
    let (files, warnings) = scanner::read_files(&paths);

    // 3. Compare all pairs
    let results = comparator::compare(&files);

    // 4. Group by content type
    let groups = grouper::group_by_type(&results);

    // 5. Compute stats
    let stats = comparator::compute_stats(&files, &results, config.flag_threshold);

    Ok(AnalysisResult {
        stats,
        files,
        results,
        groups,
        warnings,
    })
}
