/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    /// Network or request execution error from `reqwest`, after all
    /// attempts were spent.
    #[error("transport error after {attempts} attempt(s): {source}")]
    Transport {
        /// Attempts made before giving up.
        attempts: u32,
        /// Underlying `reqwest` failure from the last attempt.
        source: reqwest::Error,
    },
    /// Server-side HTTP error (5xx or other retryable status), after all
    /// attempts were spent.
    #[error("server error {status} after {attempts} attempt(s): {body}")]
    Server {
        /// HTTP status code of the last attempt.
        status: u16,
        /// Attempts made before giving up.
        attempts: u32,
        /// Raw response body from the last attempt.
        body: String,
    },
    /// Client error (4xx) reported by the backend API. Never retried.
    #[error("api error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the backend envelope, or the raw body when
        /// no envelope was present.
        message: String,
        /// Machine-readable error code from the backend envelope.
        code: Option<String>,
    },
    /// Response decoding or envelope-shape validation error.
    #[error("decode error: {0}")]
    Decode(String),
}

impl LadderError {
    /// HTTP status of the failure, when one was observed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|status| status.as_u16()),
            Self::Decode(_) => None,
        }
    }

    /// Machine-readable backend error code, when the error envelope
    /// carried one. Callers should branch on this rather than matching
    /// message substrings.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Whether the failure class is eligible for backoff retry. The
    /// client has already spent its attempts by the time an error is
    /// returned; this classifies the failure for callers layering their
    /// own policy on top.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Server { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::LadderError;

    #[test]
    fn api_error_exposes_status_and_code() {
        let err = LadderError::Api {
            status: 404,
            message: "user not found".to_owned(),
            code: Some("USER_NOT_FOUND".to_owned()),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("USER_NOT_FOUND"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn server_error_is_retryable() {
        let err = LadderError::Server {
            status: 503,
            attempts: 3,
            body: "unavailable".to_owned(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.code(), None);
        assert!(err.is_retryable());
    }

    #[test]
    fn decode_error_has_no_status() {
        let err = LadderError::Decode("bad body".to_owned());
        assert_eq!(err.status(), None);
        assert!(!err.is_retryable());
    }
}
