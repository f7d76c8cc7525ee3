use std::io;

use crate::comparator::{ComparisonResult, ComparisonStats};
use crate::file;
use crate::grouper::GroupedResult;
use crate::output::Reporter;

pub struct TextReporter {
    /// Pairs at or above this score are marked in the report.
    pub flag_threshold: f64,
}

impl TextReporter {
    #[must_use]
    pub const fn new(flag_threshold: f64) -> Self {
        Self { flag_threshold }
    }

    fn write_comparison(
        &self,
        index: usize,
        result: &ComparisonResult,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        let flag = if result.similarity_score >= self.flag_threshold {
            " [FLAGGED]"
        } else {
            ""
        };
        writeln!(
            writer,
            "{}. {} <-> {} ({:.1}%){}",
            index + 1,
            result.file_a.name,
            result.file_b.name,
            result.similarity_score * 100.0,
            flag,
        )?;
        writeln!(
            writer,
            "   {} ({}, {}) vs {} ({}, {})",
            result.file_a.name,
            result.file_a.kind,
            file::format_file_size(result.file_a.size),
            result.file_b.name,
            result.file_b.kind,
            file::format_file_size(result.file_b.size),
        )?;
        for phrase in &result.matched_phrases {
            writeln!(writer, "   match: \"{phrase}\"")?;
        }
        Ok(())
    }
}

impl Reporter for TextReporter {
    fn report_stats(
        &self,
        stats: &ComparisonStats,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        writeln!(writer, "Similarity Statistics")?;
        writeln!(writer, "=====================")?;
        writeln!(writer, "Files analyzed: {}", stats.total_files)?;
        writeln!(writer, "Pairs compared: {}", stats.total_pairs)?;
        writeln!(
            writer,
            "Flagged pairs (>= {:.0}%): {}",
            self.flag_threshold * 100.0,
            stats.flagged_pairs
        )?;
        writeln!(
            writer,
            "Highest similarity: {:.1}%",
            stats.highest_score * 100.0
        )?;
        Ok(())
    }

    fn report_comparisons(
        &self,
        results: &[ComparisonResult],
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        if results.is_empty() {
            writeln!(writer, "No pairs to compare.")?;
            return Ok(());
        }

        writeln!(writer, "Comparisons (most similar first)")?;
        writeln!(writer, "================================")?;
        writeln!(writer)?;
        for (i, result) in results.iter().enumerate() {
            self.write_comparison(i, result, writer)?;
            writeln!(writer)?;
        }
        Ok(())
    }

    fn report_groups(
        &self,
        groups: &[GroupedResult],
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        if groups.is_empty() {
            writeln!(writer, "No groups.")?;
            return Ok(());
        }

        writeln!(writer, "Comparisons by Content Type")?;
        writeln!(writer, "===========================")?;
        writeln!(writer)?;
        for group in groups {
            writeln!(
                writer,
                "{} ({} comparisons):",
                group.group,
                group.comparisons.len()
            )?;
            for result in &group.comparisons {
                writeln!(
                    writer,
                    "  - {} <-> {} ({:.1}%)",
                    result.file_a.name,
                    result.file_b.name,
                    result.similarity_score * 100.0,
                )?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
