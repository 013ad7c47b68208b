//! Pipeline output types.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use serde::Serialize;

use edunews_gdelt::GdeltError;

/// One distinct broadcast clip with evidence merged across keywords.
///
/// Built by [`crate::aggregate`], scored by [`crate::score`], annotated with
/// sentiment in [`crate::run`], then frozen in the outcome dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedClip {
    pub clip_id: String,
    pub preview_url: String,
    pub preview_thumbnail_url: String,
    pub station: String,
    pub show_name: String,
    pub show_date: Option<NaiveDateTime>,
    pub retrieval_date: String,
    /// Member snippets joined with single spaces, earliest airing first.
    pub combined_snippet: String,
    /// Distinct keywords whose query matched this clip.
    pub matched_keywords: BTreeSet<String>,
    /// Number of distinct matching keywords; always `matched_keywords.len()`.
    pub relevance: usize,
    /// One entry per catalog keyword, matched or not, so the dataset's
    /// columns never depend on what happened to match in a given run.
    pub keyword_membership: BTreeMap<&'static str, bool>,
    pub sentiment_polarity: f32,
    pub sentiment_subjectivity: f32,
}

/// A keyword retrieval that failed after retries.
#[derive(Debug)]
pub struct KeywordFailure {
    pub keyword: &'static str,
    pub error: GdeltError,
}

/// Everything one pipeline run produced.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Final dataset, one row per corroborated clip, ascending airing time
    /// (undated rows last).
    pub clips: Vec<AggregatedClip>,
    /// Keywords whose retrieval failed. Failures never abort the run.
    pub failures: Vec<KeywordFailure>,
    /// Keywords that fetched cleanly but contributed no usable records.
    pub quiet_keywords: Vec<&'static str>,
    /// True when shutdown stopped the run before every keyword completed.
    pub cancelled: bool,
}
