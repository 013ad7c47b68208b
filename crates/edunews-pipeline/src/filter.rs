//! Commercial-content filtering.

use edunews_core::catalog::COMMERCIAL_PHRASES;

/// Returns `true` when the snippet reads like advertising boilerplate
/// rather than a news segment.
///
/// Case-insensitive literal substring match over the commercial phrase list.
/// False positives are accepted; corroboration scoring happens on what
/// survives.
#[must_use]
pub fn is_commercial(snippet: &str) -> bool {
    let lowered = snippet.to_lowercase();
    COMMERCIAL_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
