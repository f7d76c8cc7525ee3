pub mod json;
pub mod text;

use std::io;

use crate::comparator::{ComparisonResult, ComparisonStats};
use crate::grouper::GroupedResult;

/// Trait for reporting analysis results.
pub trait Reporter {
    fn report_stats(&self, stats: &ComparisonStats, writer: &mut dyn io::Write)
        -> io::Result<()>;
    fn report_comparisons(
        &self,
        results: &[ComparisonResult],
        writer: &mut dyn io::Write,
    ) -> io::Result<()>;
    fn report_groups(
        &self,
        groups: &[GroupedResult],
        writer: &mut dyn io::Write,
    ) -> io::Result<()>;
}
