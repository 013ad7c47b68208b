use thiserror::Error;

/// Errors returned by the GDELT television client.
#[derive(Debug, Error)]
pub enum GdeltError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The source answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Coarse failure classification for run reports: was the source unreachable,
/// or reachable but speaking an unexpected shape?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
}

impl GdeltError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GdeltError::Http(_)
            | GdeltError::UnexpectedStatus { .. }
            | GdeltError::InvalidBaseUrl { .. } => ErrorKind::Transport,
            GdeltError::Deserialize { .. } => ErrorKind::MalformedResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_classify_as_transport() {
        let err = GdeltError::UnexpectedStatus {
            status: 503,
            url: "http://example.test/".to_owned(),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn deserialize_errors_classify_as_malformed() {
        let source = serde_json::from_str::<()>("not json").unwrap_err();
        let err = GdeltError::Deserialize {
            context: "test".to_owned(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }
}
