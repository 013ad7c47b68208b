//! Raw clip records as produced by a single keyword retrieval.

use chrono::NaiveDateTime;

/// One clip hit for one keyword query.
///
/// The same broadcast clip can appear once per keyword whose query matched
/// it; those records are merged by [`clip_id`](Self::clip_id) downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRecord {
    /// Source-issued identifier, unique per physical broadcast clip.
    pub clip_id: String,
    /// Captioned excerpt returned for this keyword match.
    pub snippet: String,
    pub preview_url: String,
    pub preview_thumbnail_url: String,
    pub station: String,
    pub show_name: String,
    /// Airing timestamp. `None` when the source value did not parse.
    pub show_date: Option<NaiveDateTime>,
    /// Source-reported retrieval date, kept verbatim.
    pub retrieval_date: String,
    /// The keyword whose query produced this record.
    pub matched_keyword: String,
}
