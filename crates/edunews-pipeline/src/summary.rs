//! Descriptive statistics over a finished dataset.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::AggregatedClip;

/// Headline statistics for a run report.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub clip_count: usize,
    pub relevance_min: usize,
    pub relevance_max: usize,
    pub relevance_mean: f32,
    pub polarity_min: f32,
    pub polarity_max: f32,
    pub polarity_mean: f32,
    pub subjectivity_min: f32,
    pub subjectivity_max: f32,
    pub subjectivity_mean: f32,
    /// Clip counts keyed by station call sign, alphabetical.
    pub clips_per_station: BTreeMap<String, usize>,
}

impl DatasetSummary {
    /// Summarizes `clips`. Returns `None` for an empty dataset, which has
    /// nothing meaningful to describe.
    #[must_use]
    pub fn from_clips(clips: &[AggregatedClip]) -> Option<Self> {
        if clips.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = clips.len() as f32;

        let relevance_min = clips.iter().map(|c| c.relevance).min()?;
        let relevance_max = clips.iter().map(|c| c.relevance).max()?;
        #[allow(clippy::cast_precision_loss)]
        let relevance_sum = clips.iter().map(|c| c.relevance).sum::<usize>() as f32;

        let (polarity_min, polarity_max, polarity_sum) =
            fold_stats(clips.iter().map(|c| c.sentiment_polarity));
        let (subjectivity_min, subjectivity_max, subjectivity_sum) =
            fold_stats(clips.iter().map(|c| c.sentiment_subjectivity));

        let mut clips_per_station: BTreeMap<String, usize> = BTreeMap::new();
        for clip in clips {
            *clips_per_station.entry(clip.station.clone()).or_default() += 1;
        }

        Some(Self {
            clip_count: clips.len(),
            relevance_min,
            relevance_max,
            relevance_mean: relevance_sum / count,
            polarity_min,
            polarity_max,
            polarity_mean: polarity_sum / count,
            subjectivity_min,
            subjectivity_max,
            subjectivity_mean: subjectivity_sum / count,
            clips_per_station,
        })
    }
}

fn fold_stats(values: impl Iterator<Item = f32>) -> (f32, f32, f32) {
    values.fold(
        (f32::INFINITY, f32::NEG_INFINITY, 0.0),
        |(min, max, sum), v| (min.min(v), max.max(v), sum + v),
    )
}
