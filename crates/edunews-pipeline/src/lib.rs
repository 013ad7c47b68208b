//! Clip aggregation pipeline.
//!
//! Takes per-keyword clip records through commercial filtering, per-keyword
//! snippet deduplication, cross-keyword grouping by clip identity, relevance
//! scoring against the fixed catalog, and sentiment annotation. The product
//! is a [`PipelineOutcome`]: one row per corroborated clip plus a faithful
//! account of which keywords failed or came back quiet.

pub mod aggregate;
pub mod dedup;
pub mod filter;
pub mod run;
pub mod score;
pub mod summary;
pub mod types;

pub use run::run_pipeline;
pub use summary::DatasetSummary;
pub use types::{AggregatedClip, KeywordFailure, PipelineOutcome};
