//! Relevance scoring and corroboration filtering.

use edunews_core::catalog::SEARCH_KEYWORDS;

use crate::types::AggregatedClip;

/// Clips matched by fewer distinct keywords than this are dropped. A single
/// keyword hit is too weak a signal to count as on-topic coverage.
pub const MIN_MATCHED_KEYWORDS: usize = 2;

/// Fills `relevance` and the fixed-width membership map from the clip's
/// matched keyword set. Every catalog keyword gets an entry, matched or not.
pub fn score_clip(clip: &mut AggregatedClip) {
    clip.relevance = clip.matched_keywords.len();
    clip.keyword_membership = SEARCH_KEYWORDS
        .iter()
        .map(|keyword| (*keyword, clip.matched_keywords.contains(*keyword)))
        .collect();
}

/// Scores every clip, then retains the corroborated ones.
#[must_use]
pub fn score_and_filter(mut clips: Vec<AggregatedClip>) -> Vec<AggregatedClip> {
    let before = clips.len();
    for clip in &mut clips {
        score_clip(clip);
    }
    clips.retain(|clip| clip.relevance >= MIN_MATCHED_KEYWORDS);
    if clips.len() < before {
        tracing::debug!(
            dropped = before - clips.len(),
            kept = clips.len(),
            "dropped single-keyword clips"
        );
    }
    clips
}
