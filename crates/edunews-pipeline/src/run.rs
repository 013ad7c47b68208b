//! Pipeline run orchestration.
//!
//! Fetches every catalog keyword through a bounded worker pool and lands each
//! keyword's outcome in its own slot. Only when fetching is done are the
//! slots reordered into catalog order and merged, so the dataset comes out
//! identical no matter which fetches finished first.

use std::future::Future;

use futures::stream::{self, StreamExt};

use edunews_core::catalog::SEARCH_KEYWORDS;
use edunews_core::ClipRecord;
use edunews_gdelt::{GdeltClient, GdeltError};

use crate::aggregate::{aggregate_clips, cmp_show_date};
use crate::dedup::dedup_snippets;
use crate::filter::is_commercial;
use crate::score::score_and_filter;
use crate::types::{KeywordFailure, PipelineOutcome};

/// One keyword's completed retrieval: its catalog position plus the
/// filtered, deduplicated records or the typed failure.
struct KeywordBatch {
    index: usize,
    keyword: &'static str,
    result: Result<Vec<ClipRecord>, GdeltError>,
}

/// Runs the full pipeline against `client`.
///
/// `shutdown` cancels the run between keyword fetches: slots already landed
/// still flow through the merge, in-flight and unstarted fetches are
/// abandoned, and the outcome is marked cancelled. Pass a never-resolving
/// future to run to completion unconditionally.
pub async fn run_pipeline<S>(
    client: &GdeltClient,
    max_concurrent: usize,
    shutdown: S,
) -> PipelineOutcome
where
    S: Future<Output = ()>,
{
    let batches = collect_batches(client, max_concurrent, shutdown).await;
    let cancelled = batches.len() < SEARCH_KEYWORDS.len();
    if cancelled {
        tracing::warn!(
            completed = batches.len(),
            total = SEARCH_KEYWORDS.len(),
            "shutdown before all keyword fetches completed, merging landed slots only"
        );
    }
    merge_batches(batches, cancelled)
}

async fn collect_batches<S>(
    client: &GdeltClient,
    max_concurrent: usize,
    shutdown: S,
) -> Vec<KeywordBatch>
where
    S: Future<Output = ()>,
{
    stream::iter(SEARCH_KEYWORDS.iter().copied().enumerate())
        .map(|(index, keyword)| async move {
            let result = fetch_keyword(client, keyword).await;
            KeywordBatch {
                index,
                keyword,
                result,
            }
        })
        .buffer_unordered(max_concurrent.max(1))
        .take_until(shutdown)
        .collect()
        .await
}

/// One keyword's retrieval stage: fetch, commercial filter, snippet dedup.
async fn fetch_keyword(
    client: &GdeltClient,
    keyword: &'static str,
) -> Result<Vec<ClipRecord>, GdeltError> {
    let mut records = client.fetch_clips(keyword).await?;
    let fetched = records.len();
    records.retain(|record| !is_commercial(&record.snippet));
    let after_filter = records.len();
    dedup_snippets(&mut records);
    tracing::debug!(
        keyword,
        fetched,
        commercials = fetched - after_filter,
        duplicates = after_filter - records.len(),
        kept = records.len(),
        "keyword fetch complete"
    );
    Ok(records)
}

/// Merges landed slots into the final dataset.
///
/// Slots are sorted into catalog order first, which fixes the record input
/// order for grouping regardless of fetch completion order. Failed keywords
/// are reported, never fatal; keywords with no usable records are reported
/// as quiet.
fn merge_batches(mut batches: Vec<KeywordBatch>, cancelled: bool) -> PipelineOutcome {
    batches.sort_by_key(|batch| batch.index);

    let mut records: Vec<ClipRecord> = Vec::new();
    let mut failures: Vec<KeywordFailure> = Vec::new();
    let mut quiet_keywords: Vec<&'static str> = Vec::new();

    for batch in batches {
        match batch.result {
            Ok(batch_records) if batch_records.is_empty() => {
                tracing::info!(keyword = batch.keyword, "keyword contributed no usable clips");
                quiet_keywords.push(batch.keyword);
            }
            Ok(batch_records) => records.extend(batch_records),
            Err(error) => {
                tracing::warn!(
                    keyword = batch.keyword,
                    kind = ?error.kind(),
                    error = %error,
                    "keyword fetch failed"
                );
                failures.push(KeywordFailure {
                    keyword: batch.keyword,
                    error,
                });
            }
        }
    }

    let mut clips = score_and_filter(aggregate_clips(records));
    for clip in &mut clips {
        let sentiment = edunews_sentiment::analyze(&clip.combined_snippet);
        clip.sentiment_polarity = sentiment.polarity;
        clip.sentiment_subjectivity = sentiment.subjectivity;
    }
    clips.sort_by(|a, b| {
        cmp_show_date(a.show_date, b.show_date).then_with(|| a.clip_id.cmp(&b.clip_id))
    });

    tracing::info!(
        clips = clips.len(),
        failures = failures.len(),
        quiet = quiet_keywords.len(),
        cancelled,
        "pipeline run complete"
    );

    PipelineOutcome {
        clips,
        failures,
        quiet_keywords,
        cancelled,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use edunews_core::catalog::keyword_index;

    use super::*;

    fn record(clip_id: &str, keyword: &str, snippet: &str, hour: u32) -> ClipRecord {
        ClipRecord {
            clip_id: clip_id.to_owned(),
            snippet: snippet.to_owned(),
            preview_url: format!("https://archive.example/{clip_id}"),
            preview_thumbnail_url: format!("https://archive.example/{clip_id}.jpg"),
            station: "CNNW".to_owned(),
            show_name: "News Day".to_owned(),
            show_date: NaiveDate::from_ymd_opt(2026, 8, 15).and_then(|d| d.and_hms_opt(hour, 0, 0)),
            retrieval_date: "2026-08-16".to_owned(),
            matched_keyword: keyword.to_owned(),
        }
    }

    fn ok_batch(keyword: &'static str, records: Vec<ClipRecord>) -> KeywordBatch {
        KeywordBatch {
            index: keyword_index(keyword).expect("catalog keyword"),
            keyword,
            result: Ok(records),
        }
    }

    fn failed_batch(keyword: &'static str) -> KeywordBatch {
        KeywordBatch {
            index: keyword_index(keyword).expect("catalog keyword"),
            keyword,
            result: Err(GdeltError::UnexpectedStatus {
                status: 500,
                url: "http://example.test/".to_owned(),
            }),
        }
    }

    fn scenario_batches() -> Vec<KeywordBatch> {
        vec![
            ok_batch(
                "Teacher",
                vec![record("clip-42", "Teacher", "teachers praised the plan", 10)],
            ),
            ok_batch(
                "Curriculum",
                vec![record("clip-42", "Curriculum", "the new curriculum", 10)],
            ),
            ok_batch(
                "Literacy",
                vec![record("clip-7", "Literacy", "a literacy segment", 9)],
            ),
            failed_batch("PTA"),
            ok_batch("Homework", Vec::new()),
        ]
    }

    #[test]
    fn merge_keeps_corroborated_drops_single_keyword() {
        let outcome = merge_batches(scenario_batches(), false);
        assert_eq!(outcome.clips.len(), 1, "only clip-42 is corroborated");
        assert_eq!(outcome.clips[0].clip_id, "clip-42");
        assert_eq!(outcome.clips[0].relevance, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].keyword, "PTA");
        assert_eq!(outcome.quiet_keywords, vec!["Homework"]);
        assert!(!outcome.cancelled);
    }

    #[test]
    fn merge_is_completion_order_invariant() {
        let forward = merge_batches(scenario_batches(), false);
        let mut reversed_input = scenario_batches();
        reversed_input.reverse();
        let reversed = merge_batches(reversed_input, false);
        assert_eq!(forward.clips, reversed.clips);
        assert_eq!(forward.quiet_keywords, reversed.quiet_keywords);
    }

    #[test]
    fn merge_annotates_sentiment_on_retained_clips() {
        let outcome = merge_batches(scenario_batches(), false);
        // combined snippet contains "praised", so polarity must move
        assert!(
            outcome.clips[0].sentiment_polarity > 0.0,
            "expected positive polarity, got {:?}",
            outcome.clips[0]
        );
    }

    #[test]
    fn merge_sorts_dataset_by_airing_time() {
        let batches = vec![
            ok_batch(
                "Teacher",
                vec![
                    record("clip-late", "Teacher", "evening segment", 20),
                    record("clip-early", "Teacher", "morning segment", 6),
                ],
            ),
            ok_batch(
                "Schools",
                vec![
                    record("clip-late", "Schools", "evening again", 20),
                    record("clip-early", "Schools", "morning again", 6),
                ],
            ),
        ];
        let outcome = merge_batches(batches, false);
        assert_eq!(outcome.clips.len(), 2);
        assert_eq!(outcome.clips[0].clip_id, "clip-early");
        assert_eq!(outcome.clips[1].clip_id, "clip-late");
    }

    #[test]
    fn merge_with_no_batches_is_empty_and_reports_nothing() {
        let outcome = merge_batches(Vec::new(), true);
        assert!(outcome.clips.is_empty());
        assert!(outcome.failures.is_empty());
        assert!(outcome.quiet_keywords.is_empty());
        assert!(outcome.cancelled);
    }

    #[test]
    fn all_failures_still_produce_an_outcome() {
        let batches = vec![failed_batch("Teacher"), failed_batch("Schools")];
        let outcome = merge_batches(batches, false);
        assert!(outcome.clips.is_empty());
        assert_eq!(outcome.failures.len(), 2);
    }
}
