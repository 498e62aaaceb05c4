use thiserror::Error;

/// Failure causes for an upstream fetch.
///
/// Callers of the public client operations never see these; every variant is
/// logged once and collapses to an absent result. The taxonomy exists so the
/// log line carries enough context to diagnose (status code or message).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("launch API returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("launch API returned a non-list payload")]
    InvalidBody,

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}
