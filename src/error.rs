use thiserror::Error;

/// Error taxonomy for proxy operations.
///
/// Every call returns exactly one of these kinds; nothing is retried or
/// re-mapped upstream. The `status` fields carry the raw status line
/// (e.g. `507 Insufficient Storage`) so callers can log it without
/// re-deriving state.
#[derive(Debug, Error)]
pub enum MdsError {
    #[error("invalid range: expected at most 2 bounds, got {bounds}")]
    InvalidRange { bounds: usize },

    #[error("upload is prohibited for namespace {namespace}: {status}")]
    NamespaceWriteProhibited { namespace: String, status: String },

    #[error("no space left in storage: {status}")]
    StorageExhausted { status: String },

    #[error("no such key {namespace}/{key}: {status}")]
    KeyNotFound {
        namespace: String,
        key: String,
        status: String,
    },

    #[error("no such namespace {namespace}: {status}")]
    NamespaceNotFound { namespace: String, status: String },

    #[error("direct links are disabled for namespace {namespace}: {status}")]
    DirectLinkDisabled { namespace: String, status: String },

    #[error("unexpected status: {status}")]
    UnexpectedStatus { status: String },

    /// The proxy answered 2xx but the body did not decode as the expected
    /// XML document.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] quick_xml::DeError),

    /// Connection-level failure, surfaced unchanged from the transport.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}
