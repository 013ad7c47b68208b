//! HTTP client for the GDELT television API.
//!
//! Wraps `reqwest` with typed error handling, a per-request timeout, and a
//! bounded retry policy for transient failures. All knowledge of the wire
//! field names and date formats lives in [`normalize`]; the rest of the
//! workspace only ever sees [`edunews_core::ClipRecord`].

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

mod retry;

pub use client::GdeltClient;
pub use error::{ErrorKind, GdeltError};
pub use types::{ClipGalleryResponse, WireClip};
