use serde::Deserialize;

/// Connection settings for the MDS proxy.
///
/// Mutating operations (upload, delete) go to `upload_port`; reads, ping and
/// direct-link lookups go to `read_port`. The config is immutable for the
/// lifetime of a client.
#[derive(Debug, Clone, Deserialize)]
pub struct MdsConfig {
    pub host: String,
    pub upload_port: u16,
    pub read_port: u16,
    /// Pre-formatted `Authorization` header value, e.g. `Basic <base64>`.
    /// The client never builds or refreshes credentials itself.
    pub auth_header: String,
}

impl MdsConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.is_empty() {
            anyhow::bail!("host must not be empty");
        }
        if self.upload_port == 0 {
            anyhow::bail!("upload_port must not be zero");
        }
        if self.read_port == 0 {
            anyhow::bail!("read_port must not be zero");
        }
        if self.auth_header.is_empty() {
            anyhow::bail!("auth_header must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let toml_str = r#"
host = "storage-int.mds.example.net"
upload_port = 1111
read_port = 80
auth_header = "Basic c2FuZGJveC10bXA6c2VjcmV0"
"#;
        let config: MdsConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.upload_port, 1111);
        assert_eq!(config.read_port, 80);
    }

    #[test]
    fn test_empty_host_rejected() {
        let toml_str = r#"
host = ""
upload_port = 1111
read_port = 80
auth_header = "Basic abc"
"#;
        let config: MdsConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let toml_str = r#"
host = "localhost"
upload_port = 0
read_port = 80
auth_header = "Basic abc"
"#;
        let config: MdsConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_auth_header_rejected() {
        let toml_str = r#"
host = "localhost"
upload_port = 1111
read_port = 80
auth_header = ""
"#;
        let config: MdsConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }
}
