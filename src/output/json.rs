use std::io;

use crate::comparator::{ComparisonResult, ComparisonStats};
use crate::grouper::GroupedResult;
use crate::output::Reporter;

pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct JsonComparison<'a> {
    id: &'a str,
    file_a: JsonFile<'a>,
    file_b: JsonFile<'a>,
    similarity_score: f64,
    matched_phrases: &'a [String],
}

#[derive(serde::Serialize)]
struct JsonFile<'a> {
    id: &'a str,
    name: &'a str,
    kind: &'a str,
    size: u64,
}

#[derive(serde::Serialize)]
struct JsonGroup<'a> {
    group: &'a str,
    comparisons: Vec<JsonComparison<'a>>,
}

fn to_json_comparison(result: &ComparisonResult) -> JsonComparison<'_> {
    JsonComparison {
        id: &result.id,
        file_a: JsonFile {
            id: &result.file_a.id,
            name: &result.file_a.name,
            kind: &result.file_a.kind,
            size: result.file_a.size,
        },
        file_b: JsonFile {
            id: &result.file_b.id,
            name: &result.file_b.name,
            kind: &result.file_b.kind,
            size: result.file_b.size,
        },
        similarity_score: result.similarity_score,
        matched_phrases: &result.matched_phrases,
    }
}

impl Reporter for JsonReporter {
    fn report_stats(
        &self,
        stats: &ComparisonStats,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        let json = serde_json::to_string_pretty(stats).map_err(io::Error::other)?;
        writeln!(writer, "{json}")
    }

    fn report_comparisons(
        &self,
        results: &[ComparisonResult],
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        let json_results: Vec<JsonComparison<'_>> =
            results.iter().map(to_json_comparison).collect();
        let json = serde_json::to_string_pretty(&json_results).map_err(io::Error::other)?;
        writeln!(writer, "{json}")
    }

    fn report_groups(
        &self,
        groups: &[GroupedResult],
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        let json_groups: Vec<JsonGroup<'_>> = groups
            .iter()
            .map(|g| JsonGroup {
                group: &g.group,
                comparisons: g.comparisons.iter().map(to_json_comparison).collect(),
            })
            .collect();
        let json = serde_json::to_string_pretty(&json_groups).map_err(io::Error::other)?;
        writeln!(writer, "{json}")
    }
}
