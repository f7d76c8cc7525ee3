use std::collections::HashMap;

use crate::comparator::ComparisonResult;

/// Comparison results bucketed by the content types involved.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GroupedResult {
    /// The two types sorted lexicographically and joined with " & ", or the
    /// single type name when both sides share it.
    pub group: String,
    pub comparisons: Vec<ComparisonResult>,
}

/// Partition comparison results into buckets keyed by the (sorted) pair of
/// content types. Groups appear in first-seen key order; within a group,
/// results keep their input order. Every result lands in exactly one group.
#[must_use]
pub fn group_by_type(results: &[ComparisonResult]) -> Vec<GroupedResult> {
    let mut groups: Vec<GroupedResult> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for result in results {
        let key = group_key(&result.file_a.kind, &result.file_b.kind);
        if let Some(&i) = index.get(&key) {
            groups[i].comparisons.push(result.clone());
        } else {
            index.insert(key.clone(), groups.len());
            groups.push(GroupedResult {
                group: key,
                comparisons: vec![result.clone()],
            });
        }
    }

    groups
}

fn group_key(kind_a: &str, kind_b: &str) -> String {
    if kind_a == kind_b {
        return kind_a.to_string();
    }
    let (lower, upper) = if kind_a < kind_b {
        (kind_a, kind_b)
    } else {
        (kind_b, kind_a)
    };
    format!("{lower} & {upper}")
}
