use hyper::StatusCode;
use thiserror::Error;

/// Failure modes of the outbound page fetch. Every variant is fatal to the
/// process: without fresh source data there is no degraded mode to fall
/// back to.
#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] hyper::Error),

    #[error("status code error: {0}")]
    Status(StatusCode),

    #[error("invalid request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("failed to read response body: {0}")]
    Decode(#[from] std::io::Error),
}
