//! XML result documents returned by the proxy.
//!
//! Uploads are acknowledged with a `post` document; direct-link lookups
//! return a `download-info` document. Unknown elements and attributes are
//! ignored, and missing optional fields stay at their defaults.

use serde::Deserialize;

/// Result of a successful upload, decoded from the proxy's `post` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadInfo {
    /// Caller-visible object alias.
    #[serde(rename = "@obj", default)]
    pub obj: String,
    /// Opaque storage identifier.
    #[serde(rename = "@id", default)]
    pub id: String,
    /// Namespace-relative key; used for subsequent get/delete calls.
    #[serde(rename = "@key", default)]
    pub key: String,
    /// Bytes stored.
    #[serde(rename = "@size", default)]
    pub size: u64,
    /// Replication fan-out factor.
    #[serde(rename = "@groups", default)]
    pub groups: i32,
    /// Per-replica completion records. Informational only; their count is
    /// server-defined and need not match `written`.
    #[serde(rename = "complete", default)]
    pub complete: Vec<ReplicaAck>,
    /// Number of replicas that acknowledged the write. Comes from the
    /// `written` element, never from the length of `complete`.
    #[serde(rename = "written", default)]
    pub written: i32,
}

/// One replica's completion record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplicaAck {
    #[serde(rename = "@addr", default)]
    pub addr: String,
    #[serde(rename = "@path", default)]
    pub path: String,
    #[serde(rename = "@group", default)]
    pub group: i32,
    #[serde(rename = "@status", default)]
    pub status: i32,
}

/// Direct-download descriptor, decoded from the proxy's `download-info`
/// document. Points at the object's underlying storage location so reads
/// can bypass the proxy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadInfo {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub path: String,
    /// Timestamp token for the signed link.
    #[serde(default)]
    pub ts: String,
    /// Storage region; `-1` means unspecified.
    #[serde(default)]
    pub region: i32,
    /// Link signature.
    #[serde(rename = "s", default)]
    pub sign: String,
}

impl DownloadInfo {
    /// Fully-qualified direct link. The query string really is
    /// `?ts=<ts>sign=<sign>` with no separator before `sign`; that is the
    /// shape the storage frontend expects, so it is reproduced verbatim.
    pub fn url(&self) -> String {
        format!(
            "http://{}{}?ts={}sign={}",
            self.host, self.path, self.ts, self.sign
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_upload_info() {
        let body = r#"<?xml version="1.0" encoding="utf-8"?>
<post obj="sandbox-tmp.file1" id="0:48f22774edb9...7727258a3cee" groups="2" size="4" key="3402/file1">
<complete addr="192.168.1.1:1025" path="/srv/storage/47/1/data-0.0" group="4643" status="0"/>
<complete addr="192.168.1.2:1025" path="/srv/storage/60/2/data-0.0" group="3402" status="0"/>
<written>2</written>
</post>"#;
        let info: UploadInfo = quick_xml::de::from_str(body).unwrap();

        assert_eq!(info.obj, "sandbox-tmp.file1");
        assert_eq!(info.id, "0:48f22774edb9...7727258a3cee");
        assert_eq!(info.key, "3402/file1");
        assert_eq!(info.size, 4);
        assert_eq!(info.groups, 2);
        assert_eq!(info.written, 2);

        assert_eq!(info.complete.len(), 2);
        assert_eq!(info.complete[0].addr, "192.168.1.1:1025");
        assert_eq!(info.complete[0].path, "/srv/storage/47/1/data-0.0");
        assert_eq!(info.complete[0].group, 4643);
        assert_eq!(info.complete[0].status, 0);
        assert_eq!(info.complete[1].addr, "192.168.1.2:1025");
        assert_eq!(info.complete[1].path, "/srv/storage/60/2/data-0.0");
        assert_eq!(info.complete[1].group, 3402);
        assert_eq!(info.complete[1].status, 0);
    }

    #[test]
    fn test_written_is_the_element_not_the_ack_count() {
        // The server may report fewer (or more) completion records than
        // acknowledged writes; `written` must come from the element.
        let body = r#"<post key="k" size="1" groups="3">
<complete addr="10.0.0.1:1025" path="/srv/a" group="1" status="0"/>
<written>3</written>
</post>"#;
        let info: UploadInfo = quick_xml::de::from_str(body).unwrap();
        assert_eq!(info.complete.len(), 1);
        assert_eq!(info.written, 3);
    }

    #[test]
    fn test_decode_upload_info_defaults() {
        let info: UploadInfo = quick_xml::de::from_str(r#"<post key="only"/>"#).unwrap();
        assert_eq!(info.key, "only");
        assert_eq!(info.obj, "");
        assert_eq!(info.size, 0);
        assert_eq!(info.groups, 0);
        assert_eq!(info.written, 0);
        assert!(info.complete.is_empty());
    }

    #[test]
    fn test_decode_upload_info_ignores_unknown() {
        let body = r#"<post key="k" size="2" future-attr="x">
<written>1</written>
<audit span="abc"/>
</post>"#;
        let info: UploadInfo = quick_xml::de::from_str(body).unwrap();
        assert_eq!(info.key, "k");
        assert_eq!(info.size, 2);
        assert_eq!(info.written, 1);
    }

    #[test]
    fn test_decode_download_info() {
        let body = r#"<?xml version="1.0" encoding="utf-8"?>
<download-info>
<host>storage.example.net</host>
<path>/get-sandbox-tmp/3402/file1</path>
<ts>515ba0406436d</ts>
<region>-1</region>
<s>a612ac98f3absign</s>
</download-info>"#;
        let info: DownloadInfo = quick_xml::de::from_str(body).unwrap();

        assert_eq!(info.host, "storage.example.net");
        assert_eq!(info.path, "/get-sandbox-tmp/3402/file1");
        assert_eq!(info.ts, "515ba0406436d");
        assert_eq!(info.region, -1);
        assert_eq!(info.sign, "a612ac98f3absign");
    }

    #[test]
    fn test_download_info_url_shape() {
        let info = DownloadInfo {
            host: "storage.example.net".to_string(),
            path: "/get-ns/3402/file1".to_string(),
            ts: "515ba0406436d".to_string(),
            region: -1,
            sign: "a612ac98f3ab".to_string(),
        };
        // No `&` between ts and sign; the frontend's contract, not a typo.
        assert_eq!(
            info.url(),
            "http://storage.example.net/get-ns/3402/file1?ts=515ba0406436dsign=a612ac98f3ab"
        );
    }

    #[test]
    fn test_decode_download_info_defaults() {
        let info: DownloadInfo =
            quick_xml::de::from_str("<download-info><host>h</host></download-info>").unwrap();
        assert_eq!(info.host, "h");
        assert_eq!(info.path, "");
        assert_eq!(info.region, 0);
        assert_eq!(info.sign, "");
    }
}
