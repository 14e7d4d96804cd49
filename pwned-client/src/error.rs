#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport could not complete the range request (DNS, TCP, TLS,
    /// or timeout). Must not be read as "not compromised".
    #[error("breach API connection failed: {detail}")]
    ConnectionFailed { detail: String },

    /// The range API answered with a non-success HTTP status.
    #[error("breach API returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// A response line did not parse as `SELECTOR:COUNT`. The whole lookup
    /// fails; a partial table would silently undercount breaches.
    #[error("malformed range response line: {line:?}")]
    MalformedResponse { line: String },
}
