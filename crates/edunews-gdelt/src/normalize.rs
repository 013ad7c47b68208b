//! Mapping from wire clips to domain records.
//!
//! This is the only module that knows the source's field names or its date
//! formats. Records missing an identifier or a snippet are unusable
//! downstream and are dropped here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use edunews_core::ClipRecord;

use crate::types::WireClip;

/// Timestamp formats observed for `show_date`, tried in order.
const SHOW_DATE_FORMATS: &[&str] = &[
    "%Y%m%d%H%M%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only fallbacks, read as midnight.
const SHOW_DATE_DATE_FORMATS: &[&str] = &["%Y%m%d", "%Y-%m-%d", "%m/%d/%Y"];

/// Converts one wire clip into a [`ClipRecord`] attributed to `keyword`.
///
/// Returns `None` when the clip lacks an `ia_show_id` or a `snippet`. An
/// unparseable `show_date` keeps the record but leaves it undated.
#[must_use]
pub fn clip_from_wire(wire: WireClip, keyword: &str) -> Option<ClipRecord> {
    let clip_id = wire.ia_show_id.filter(|id| !id.trim().is_empty())?;
    let snippet = wire.snippet?;

    let show_date = wire.show_date.as_deref().and_then(parse_show_date);
    if wire.show_date.is_some() && show_date.is_none() {
        tracing::warn!(
            clip_id = %clip_id,
            raw = wire.show_date.as_deref().unwrap_or_default(),
            "unparseable show_date, keeping record undated"
        );
    }

    Some(ClipRecord {
        clip_id,
        snippet,
        preview_url: wire.preview_url.unwrap_or_default(),
        preview_thumbnail_url: wire.preview_thumb.unwrap_or_default(),
        station: wire.station.unwrap_or_default(),
        show_name: wire.show.unwrap_or_default(),
        show_date,
        retrieval_date: wire.date.unwrap_or_default(),
        matched_keyword: keyword.to_owned(),
    })
}

fn parse_show_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in SHOW_DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    for format in SHOW_DATE_DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }
    None
}
