//! GDELT television API response types.
//!
//! Field names mirror the wire format verbatim. Nothing outside this crate
//! touches them; [`crate::normalize`] maps them onto domain records.

use serde::Deserialize;

/// Envelope of a `mode=ClipGallery` response.
///
/// A valid response with no matches either carries an empty `clips` array or
/// omits the key entirely; both deserialize to an empty list here.
#[derive(Debug, Deserialize)]
pub struct ClipGalleryResponse {
    #[serde(default)]
    pub clips: Vec<WireClip>,
}

/// One clip entry exactly as the source sends it.
///
/// Every field is optional: the source omits fields freely, and a record is
/// only rejected later if it lacks an identifier or a snippet.
#[derive(Debug, Deserialize)]
pub struct WireClip {
    #[serde(default)]
    pub ia_show_id: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub preview_thumb: Option<String>,
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub show: Option<String>,
    #[serde(default)]
    pub show_date: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_clip() {
        let body = r#"{
            "clips": [{
                "ia_show_id": "CNNW_20260815_120000_News_Day",
                "snippet": "the school board voted last night",
                "preview_url": "https://archive.example/clip",
                "preview_thumb": "https://archive.example/thumb.jpg",
                "station": "CNNW",
                "show": "News Day",
                "show_date": "20260815120000",
                "date": "2026-08-16"
            }]
        }"#;
        let response: ClipGalleryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.clips.len(), 1);
        let clip = &response.clips[0];
        assert_eq!(clip.ia_show_id.as_deref(), Some("CNNW_20260815_120000_News_Day"));
        assert_eq!(clip.station.as_deref(), Some("CNNW"));
    }

    #[test]
    fn missing_clips_key_is_empty_list() {
        let response: ClipGalleryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.clips.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{"clips": [{"ia_show_id": "x", "snippet": "y", "duration": 30}]}"#;
        let response: ClipGalleryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.clips.len(), 1);
    }

    #[test]
    fn top_level_array_is_rejected() {
        let result = serde_json::from_str::<ClipGalleryResponse>("[1, 2, 3]");
        assert!(result.is_err());
    }
}
