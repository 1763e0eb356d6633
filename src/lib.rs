//! Client for an MDS object-storage proxy.
//!
//! The proxy exposes two HTTP ports: mutating operations (upload, delete) go
//! to one, reads (get, ping, direct-link lookup) to the other. This crate
//! builds the per-operation URLs, issues exactly one request per call,
//! decodes the XML result documents, and maps HTTP statuses to a typed error
//! taxonomy. There are no retries, no caching, and no background work; a
//! [`MdsClient`] holds only immutable configuration plus a `reqwest::Client`
//! and is safe to share across tasks.

pub mod client;
pub mod config;
pub mod error;
pub mod info;
pub mod range;

pub use client::MdsClient;
pub use config::MdsConfig;
pub use error::MdsError;
pub use info::{DownloadInfo, ReplicaAck, UploadInfo};
pub use range::ByteRange;
