//! Fetch command handler and run reporting.

use edunews_core::catalog::SEARCH_KEYWORDS;
use edunews_core::AppConfig;
use edunews_gdelt::GdeltClient;
use edunews_pipeline::{run_pipeline, AggregatedClip, DatasetSummary, PipelineOutcome};

/// Preview links printed at the bottom of the text report.
const TOP_PREVIEW_LINKS: usize = 10;

/// Runs the pipeline and prints either the text report or a JSON dump of the
/// dataset.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, JSON serialization
/// fails, or every keyword fetch failed (so schedulers notice a dead source).
/// Partial failures are reported and exit cleanly.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    json: bool,
    concurrency: Option<usize>,
) -> anyhow::Result<()> {
    let client = GdeltClient::from_config(config)?;
    let max_concurrent = concurrency.unwrap_or(config.fetch_max_concurrent);

    let outcome = run_pipeline(&client, max_concurrent, crate::shutdown_signal()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.clips)?);
    } else {
        print_report(&outcome);
    }

    let all_failed =
        !outcome.cancelled && outcome.failures.len() == SEARCH_KEYWORDS.len();
    if all_failed {
        anyhow::bail!("all {} keyword fetches failed", outcome.failures.len());
    }
    Ok(())
}

fn print_report(outcome: &PipelineOutcome) {
    if outcome.cancelled {
        println!("run cancelled early; results cover completed keywords only");
    }

    if !outcome.failures.is_empty() {
        println!("{} keyword fetches failed:", outcome.failures.len());
        for failure in &outcome.failures {
            println!(
                "  {}: {} ({:?})",
                failure.keyword,
                failure.error,
                failure.error.kind()
            );
        }
    }

    if !outcome.quiet_keywords.is_empty() {
        println!(
            "{} keywords had no usable clips: [{}]",
            outcome.quiet_keywords.len(),
            outcome.quiet_keywords.join(", ")
        );
    }

    let Some(summary) = DatasetSummary::from_clips(&outcome.clips) else {
        println!("no corroborated clips this window");
        return;
    };

    println!();
    println!("{} corroborated clips", summary.clip_count);
    println!(
        "  relevance    min {} / mean {:.2} / max {}",
        summary.relevance_min, summary.relevance_mean, summary.relevance_max
    );
    println!(
        "  polarity     min {:.2} / mean {:.2} / max {:.2}",
        summary.polarity_min, summary.polarity_mean, summary.polarity_max
    );
    println!(
        "  subjectivity min {:.2} / mean {:.2} / max {:.2}",
        summary.subjectivity_min, summary.subjectivity_mean, summary.subjectivity_max
    );
    println!("  clips per station:");
    for (station, count) in &summary.clips_per_station {
        println!("    {station}: {count}");
    }

    println!();
    println!("top clips by relevance:");
    let mut by_relevance: Vec<&AggregatedClip> = outcome.clips.iter().collect();
    by_relevance.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    for clip in by_relevance.iter().take(TOP_PREVIEW_LINKS) {
        let aired = clip.show_date.map_or_else(
            || "undated".to_owned(),
            |d| d.format("%Y-%m-%d %H:%M").to_string(),
        );
        println!(
            "  [{}] {} | {} | {}",
            clip.relevance, aired, clip.station, clip.preview_url
        );
    }
}

pub(crate) fn print_keywords() {
    println!("{} search keywords:", SEARCH_KEYWORDS.len());
    for (i, keyword) in SEARCH_KEYWORDS.iter().enumerate() {
        println!("  {:>2}. {keyword}", i + 1);
    }
}
