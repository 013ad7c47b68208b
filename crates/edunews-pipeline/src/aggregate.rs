//! Cross-keyword aggregation: one record per distinct broadcast clip.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDateTime;

use edunews_core::ClipRecord;

use crate::types::AggregatedClip;

/// Groups records by clip id and merges each group into one [`AggregatedClip`].
///
/// Broadcast metadata comes from the group's first record in input order;
/// members that disagree are logged and the first-seen value kept. Snippets
/// join in ascending airing order, undated members last, input order
/// preserved on ties. Relevance and sentiment fields are zeroed here and
/// filled downstream.
pub fn aggregate_clips(records: Vec<ClipRecord>) -> Vec<AggregatedClip> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<ClipRecord>> = HashMap::new();
    for record in records {
        if !groups.contains_key(&record.clip_id) {
            order.push(record.clip_id.clone());
        }
        groups.entry(record.clip_id.clone()).or_default().push(record);
    }

    order
        .into_iter()
        .filter_map(|clip_id| groups.remove(&clip_id).and_then(merge_group))
        .collect()
}

/// Ordering for airing timestamps where undated sorts after any date.
pub(crate) fn cmp_show_date(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn merge_group(mut members: Vec<ClipRecord>) -> Option<AggregatedClip> {
    let first = members.first().cloned()?;
    warn_on_disagreement(&first, &members);

    // Stable sort: members without a date land last, ties keep input order.
    members.sort_by(|a, b| cmp_show_date(a.show_date, b.show_date));
    let combined_snippet = members
        .iter()
        .map(|m| m.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let matched_keywords: BTreeSet<String> =
        members.iter().map(|m| m.matched_keyword.clone()).collect();

    Some(AggregatedClip {
        clip_id: first.clip_id,
        preview_url: first.preview_url,
        preview_thumbnail_url: first.preview_thumbnail_url,
        station: first.station,
        show_name: first.show_name,
        show_date: first.show_date,
        retrieval_date: first.retrieval_date,
        combined_snippet,
        matched_keywords,
        relevance: 0,
        keyword_membership: BTreeMap::new(),
        sentiment_polarity: 0.0,
        sentiment_subjectivity: 0.0,
    })
}

fn warn_on_disagreement(first: &ClipRecord, members: &[ClipRecord]) {
    let mut fields: Vec<&str> = Vec::new();
    if members.iter().any(|m| m.station != first.station) {
        fields.push("station");
    }
    if members.iter().any(|m| m.show_name != first.show_name) {
        fields.push("show_name");
    }
    if members.iter().any(|m| m.show_date != first.show_date) {
        fields.push("show_date");
    }
    if members.iter().any(|m| m.retrieval_date != first.retrieval_date) {
        fields.push("retrieval_date");
    }
    if !fields.is_empty() {
        tracing::warn!(
            clip_id = %first.clip_id,
            fields = ?fields,
            "clip group members disagree on broadcast metadata, keeping first-seen values"
        );
    }
}
