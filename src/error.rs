//! Error handling types and utilities.

/// A specialized Result type for rankscout operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when the ranked-search collaborator fails.
///
/// Kind-based taxonomy for the one upstream boundary: quota exhaustion, a
/// failed call, or an unparseable payload. The matching engine never inspects
/// the variant — the single-lookup path propagates it unchanged and the batch
/// path logs it and degrades to an all-absent report.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// The provider refused the call because the client is over quota.
    #[error("search provider '{provider}' rate-limited the request")]
    RateLimited { provider: String },
    /// The call itself failed (network, auth, provider outage).
    #[error("search provider '{provider}' failed: {message}")]
    Upstream { provider: String, message: String },
    /// The provider responded, but the payload could not be interpreted.
    #[error("search provider '{provider}' returned a malformed response: {message}")]
    Malformed { provider: String, message: String },
}
