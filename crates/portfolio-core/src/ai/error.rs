use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single completion request.
///
/// The chat session never shows these to the visitor; every variant is
/// replaced by the connection-error fallback text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("request to {provider} failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error {status}: {body}")]
    Status {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("malformed {provider} response: {detail}")]
    Malformed {
        provider: &'static str,
        detail: String,
    },

    #[error("completion task failed: {0}")]
    Task(String),
}

impl ApiError {
    pub(crate) fn transport(provider: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { provider, source }
    }

    pub(crate) fn malformed(provider: &'static str, detail: impl Into<String>) -> Self {
        Self::Malformed {
            provider,
            detail: detail.into(),
        }
    }
}
