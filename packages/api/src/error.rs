use thiserror::Error;

/// Failures surfaced by the Supabase client.
#[derive(Debug, Error)]
pub enum Error {
    /// Human-readable message reported by the hosted service. Shown to the
    /// user verbatim.
    #[error("{0}")]
    Backend(String),

    /// Transport or decoding failure before a service message was available.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
