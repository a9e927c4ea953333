//! Core error type for the EduLink client.
//!
//! `PortalError` covers every failure class that can reach a caller:
//! argument validation, configuration mistakes, transport-level failures,
//! and demo fixture lookup misses. An application-level failure
//! (`result.success == false` in a [`ResponseEnvelope`]) is **not** an
//! error — it is a normal return value and is never represented here.
//!
//! [`ResponseEnvelope`]: crate::envelope::ResponseEnvelope

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// A required argument was missing or empty; raised by a handler
    /// before any I/O is performed.
    #[error("{0}")]
    MissingArgument(String),

    /// Misconfiguration: empty URL, duplicate endpoint registration,
    /// unknown method name, invalid demo role.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx HTTP status on a live call.
    #[error("request failed with HTTP status {status}")]
    Http { status: u16 },

    /// Connection-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(String),

    /// Demo fixture lookup failed; the message names the attempted method.
    #[error("Demo fixture error: {0}")]
    Fixture(String),

    /// The response body could not be parsed as an envelope.
    #[error("Decode error: {0}")]
    Decode(String),
}
