//! Lexicon sentiment scoring for broadcast snippets.
//!
//! Scores combined clip snippets on two axes: polarity (negative to positive)
//! and subjectivity (factual to opinionated). Pure string processing, no
//! models and no I/O, so annotation can never fail a pipeline run.

pub mod scorer;

pub use scorer::{analyze, Sentiment};
