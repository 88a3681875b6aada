//! Failure classes of a catalog fetch.
//!
//! The full error (with its source chain) goes to the log; the view only ever
//! sees the short, stable [`FetchError::user_message`].

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the response could not be received.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// Upstream answered with a non-success status.
    #[error("Catalog returned status {code}")]
    Status { code: u16 },

    /// Body is not valid JSON.
    #[error("Catalog response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body is valid JSON but not an array.
    #[error("Catalog response is a JSON {found}, expected an array")]
    NotAnArray { found: &'static str },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FetchError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Short description shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { .. } => "network error".to_string(),
            FetchError::Status { code } => format!("unexpected status {}", code),
            FetchError::Decode(_) | FetchError::NotAnArray { .. } => {
                "malformed response".to_string()
            }
        }
    }

    /// Error class string for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode(_) | FetchError::NotAnArray { .. } => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_hides_details() {
        let err = FetchError::transport("http://example.test", "connection refused");
        assert_eq!(err.user_message(), "network error");
        assert_eq!(err.error_type(), "transport_error");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn status_message_carries_code() {
        let err = FetchError::Status { code: 503 };
        assert_eq!(err.user_message(), "unexpected status 503");
        assert_eq!(err.error_type(), "status_error");
    }

    #[test]
    fn decode_variants_share_message() {
        let parse = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert_eq!(FetchError::from(parse).user_message(), "malformed response");
        assert_eq!(
            FetchError::NotAnArray { found: "object" }.user_message(),
            "malformed response"
        );
    }
}
