//! The protocol adapter itself: per-operation URL construction, one HTTP
//! request per call, and status classification.

use bytes::Bytes;
use reqwest::{header, Body, Client, Response, StatusCode};
use tracing::debug;

use crate::config::MdsConfig;
use crate::error::MdsError;
use crate::info::{DownloadInfo, UploadInfo};
use crate::range::ByteRange;

/// Client for the MDS proxy.
///
/// Holds only immutable configuration and the HTTP transport, so it is cheap
/// to clone and safe to call concurrently from many tasks. Each operation is
/// one request/response exchange; retries, timeouts and cancellation are the
/// transport's and the caller's business.
#[derive(Clone)]
pub struct MdsClient {
    config: MdsConfig,
    client: Client,
}

impl MdsClient {
    pub fn new(config: MdsConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Build a client around a preconfigured transport. TLS policy,
    /// connection limits and timeouts all belong to the supplied `Client`.
    pub fn with_client(config: MdsConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn upload_url(&self, namespace: &str, key: &str) -> String {
        format!(
            "http://{}:{}/upload-{}/{}",
            self.config.host, self.config.upload_port, namespace, key
        )
    }

    /// URL an object can be read from. Public so callers can hand the link
    /// to other consumers.
    pub fn read_url(&self, namespace: &str, key: &str) -> String {
        format!(
            "http://{}:{}/get-{}/{}",
            self.config.host, self.config.read_port, namespace, key
        )
    }

    fn delete_url(&self, namespace: &str, key: &str) -> String {
        format!(
            "http://{}:{}/delete-{}/{}",
            self.config.host, self.config.upload_port, namespace, key
        )
    }

    fn ping_url(&self) -> String {
        format!("http://{}:{}/ping", self.config.host, self.config.read_port)
    }

    fn downloadinfo_url(&self, namespace: &str, key: &str) -> String {
        format!(
            "http://{}:{}/downloadinfo-{}/{}",
            self.config.host, self.config.read_port, namespace, key
        )
    }

    /// Store `body` under `namespace`/`key`. `size` is sent as the explicit
    /// `Content-Length`, which keeps streaming bodies (whose length reqwest
    /// cannot compute itself) from going out unsized.
    pub async fn upload(
        &self,
        namespace: &str,
        key: &str,
        size: u64,
        body: impl Into<Body>,
    ) -> Result<UploadInfo, MdsError> {
        let resp = self
            .client
            .post(self.upload_url(namespace, key))
            .header(header::AUTHORIZATION, &self.config.auth_header)
            .header(header::CONTENT_LENGTH, size)
            .body(body)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {}
            StatusCode::FORBIDDEN => {
                return Err(MdsError::NamespaceWriteProhibited {
                    namespace: namespace.to_string(),
                    status: status_line(&resp),
                });
            }
            StatusCode::INSUFFICIENT_STORAGE => {
                return Err(MdsError::StorageExhausted {
                    status: status_line(&resp),
                });
            }
            _ => {
                return Err(MdsError::UnexpectedStatus {
                    status: status_line(&resp),
                });
            }
        }

        let text = resp.text().await?;
        let info: UploadInfo = quick_xml::de::from_str(&text)?;
        debug!(
            namespace = %namespace,
            key = %info.key,
            size = info.size,
            written = info.written,
            "upload complete"
        );
        Ok(info)
    }

    /// Read an object, optionally by byte range. On any 2xx (200 or 206
    /// Partial Content) the response is handed to the caller, who owns the
    /// body stream from there and releases it by dropping.
    pub async fn get(
        &self,
        namespace: &str,
        key: &str,
        range: ByteRange,
    ) -> Result<Response, MdsError> {
        let mut req = self
            .client
            .get(self.read_url(namespace, key))
            .header(header::AUTHORIZATION, &self.config.auth_header);
        if let Some(value) = range.header_value() {
            req = req.header(header::RANGE, value);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let line = status.to_string();
        // Release the body before constructing the classified error.
        drop(resp);
        match status {
            StatusCode::NOT_FOUND => Err(MdsError::KeyNotFound {
                namespace: namespace.to_string(),
                key: key.to_string(),
                status: line,
            }),
            StatusCode::GONE | StatusCode::NOT_ACCEPTABLE => Err(MdsError::NamespaceNotFound {
                namespace: namespace.to_string(),
                status: line,
            }),
            _ => Err(MdsError::UnexpectedStatus { status: line }),
        }
    }

    /// Like [`get`](Self::get), but drains the body into memory and releases
    /// it before returning. Same classification path.
    pub async fn get_bytes(
        &self,
        namespace: &str,
        key: &str,
        range: ByteRange,
    ) -> Result<Bytes, MdsError> {
        let resp = self.get(namespace, key, range).await?;
        Ok(resp.bytes().await?)
    }

    /// Delete a key from a namespace. The proxy expects GET on the delete
    /// path, not DELETE.
    pub async fn delete(&self, namespace: &str, key: &str) -> Result<(), MdsError> {
        let resp = self
            .client
            .get(self.delete_url(namespace, key))
            .header(header::AUTHORIZATION, &self.config.auth_header)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {
                debug!(namespace = %namespace, key = %key, "delete complete");
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(MdsError::KeyNotFound {
                namespace: namespace.to_string(),
                key: key.to_string(),
                status: status_line(&resp),
            }),
            _ => Err(MdsError::UnexpectedStatus {
                status: status_line(&resp),
            }),
        }
    }

    /// Check proxy liveness.
    pub async fn ping(&self) -> Result<(), MdsError> {
        let resp = self
            .client
            .get(self.ping_url())
            .header(header::AUTHORIZATION, &self.config.auth_header)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(()),
            _ => Err(MdsError::UnexpectedStatus {
                status: status_line(&resp),
            }),
        }
    }

    /// Fetch the direct-download descriptor for a key, if the namespace has
    /// direct links enabled.
    pub async fn download_info(
        &self,
        namespace: &str,
        key: &str,
    ) -> Result<DownloadInfo, MdsError> {
        let resp = self
            .client
            .get(self.downloadinfo_url(namespace, key))
            .header(header::AUTHORIZATION, &self.config.auth_header)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {}
            StatusCode::GONE => {
                return Err(MdsError::DirectLinkDisabled {
                    namespace: namespace.to_string(),
                    status: status_line(&resp),
                });
            }
            StatusCode::NOT_FOUND => {
                return Err(MdsError::KeyNotFound {
                    namespace: namespace.to_string(),
                    key: key.to_string(),
                    status: status_line(&resp),
                });
            }
            _ => {
                return Err(MdsError::UnexpectedStatus {
                    status: status_line(&resp),
                });
            }
        }

        let text = resp.text().await?;
        let info: DownloadInfo = quick_xml::de::from_str(&text)?;
        debug!(namespace = %namespace, key = %key, host = %info.host, "download info fetched");
        Ok(info)
    }
}

/// Raw status line, e.g. `507 Insufficient Storage`.
fn status_line(resp: &Response) -> String {
    resp.status().to_string()
}
