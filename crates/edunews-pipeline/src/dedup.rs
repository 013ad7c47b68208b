//! Per-keyword snippet deduplication.

use std::collections::HashSet;

use edunews_core::ClipRecord;

/// Drops records whose snippet text is byte-identical to an earlier record's,
/// keeping the first occurrence.
///
/// Runs on one keyword's records before the cross-keyword merge, so a
/// repeated excerpt cannot inflate a single keyword's evidence. Identical
/// snippets under different keywords are a separate matter and survive.
pub fn dedup_snippets(records: &mut Vec<ClipRecord>) {
    let mut seen: HashSet<String> = HashSet::new();
    records.retain(|record| seen.insert(record.snippet.clone()));
}
