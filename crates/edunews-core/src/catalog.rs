//! Fixed query vocabulary and commercial-indicator phrases.
//!
//! The keyword list is compiled in deliberately: dataset columns derive from
//! it, so two runs of the same binary always produce the same column set.

/// Topical search keywords, one retrieval per entry.
///
/// Slice order is the canonical merge order and the order of the per-keyword
/// membership columns in the final dataset.
pub const SEARCH_KEYWORDS: &[&str] = &[
    "Education",
    "Public Education",
    "Students",
    "Schools",
    "Kids",
    "Elementary School",
    "Secondary School",
    "High School",
    "Charter Schools",
    "Education Policy",
    "Teacher",
    "Classroom",
    "Curriculum",
    "Academic",
    "Lesson",
    "Homework",
    "School District",
    "PTA",
    "Extracurricular",
    "Special Education",
    "Preschool",
    "Education Reform",
    "Literacy",
    "Education Technology",
    "Tutoring",
    "School Administration",
];

/// Phrases that mark a snippet as advertising boilerplate.
///
/// Matched case-insensitively as literal substrings, so entries must be
/// lowercase. False positives (an anchor saying "visit") are accepted.
pub const COMMERCIAL_PHRASES: &[&str] = &[
    "learn more",
    "visit",
    "call now",
    "buy",
    "order",
    "subscribe",
    "save",
];

/// Position of `keyword` in [`SEARCH_KEYWORDS`], if present. Exact match.
#[must_use]
pub fn keyword_index(keyword: &str) -> Option<usize> {
    SEARCH_KEYWORDS.iter().position(|k| *k == keyword)
}
