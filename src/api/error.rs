use thiserror::Error;

/// Failure taxonomy for calls through the notification gateway.
///
/// `Auth` is expected to be handled globally (session invalidation and a
/// redirect to login); the surfaces publish a `SessionExpired` event when
/// they see it and otherwise treat it like any other failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("authentication required")]
    Auth,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
