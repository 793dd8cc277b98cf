//! Store configuration: connection settings and the metadata marker name.
//!
//! Configuration is supplied at construction and fixed for the lifetime of a
//! [`crate::BucketFs`]. Nothing here reads the environment; credential and
//! endpoint values are passed in by the caller.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, StoreError};

/// Connection settings for one bucket.
#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Access key ID for authentication.
    pub access_key: String,

    /// Secret access key. Redacted from `Debug` output.
    pub secret_key: String,

    /// Region identifier, as understood by the endpoint.
    pub region: String,

    /// Endpoint URL; also the base for resolved display URLs.
    pub base_endpoint: String,

    /// Bucket name.
    pub bucket: String,

    /// Reserved metadata marker filename, compared by exact string equality
    /// against immediate listing entries.
    pub meta_filename: String,

    /// Use path-style addressing, as required by most S3-compatible
    /// endpoints (MinIO, R2, ...).
    #[serde(default)]
    pub path_style: bool,
}

impl StoreConfig {
    /// Decode a configuration from YAML bytes and validate it.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self> {
        let config: StoreConfig = serde_yaml::from_slice(bytes)
            .map_err(|e| StoreError::Configuration(format!("invalid YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every required field is present and structurally sound.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.is_empty() {
            return Err(StoreError::Configuration(
                "bucket cannot be empty".to_string(),
            ));
        }
        if self.region.is_empty() {
            return Err(StoreError::Configuration(
                "region cannot be empty".to_string(),
            ));
        }
        if self.access_key.is_empty() {
            return Err(StoreError::Configuration(
                "access_key cannot be empty".to_string(),
            ));
        }
        if self.secret_key.is_empty() {
            return Err(StoreError::Configuration(
                "secret_key cannot be empty".to_string(),
            ));
        }
        if self.meta_filename.is_empty() {
            return Err(StoreError::Configuration(
                "meta_filename cannot be empty".to_string(),
            ));
        }
        Url::parse(&self.base_endpoint)
            .map_err(|e| StoreError::Configuration(format!("invalid base_endpoint: {}", e)))?;
        Ok(())
    }
}

// secret_key must not leak through logs or debug output.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field("region", &self.region)
            .field("base_endpoint", &self.base_endpoint)
            .field("bucket", &self.bucket)
            .field("meta_filename", &self.meta_filename)
            .field("path_style", &self.path_style)
            .finish()
    }
}

/// Load and validate a configuration from a YAML file.
pub fn load_config<P: AsRef<std::path::Path>>(path: P) -> Result<StoreConfig> {
    let bytes = std::fs::read(&path).map_err(|e| {
        StoreError::Configuration(format!(
            "failed to read config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    StoreConfig::from_yaml(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        "access_key: AK\n\
         secret_key: SK\n\
         region: us-east-1\n\
         base_endpoint: https://store.example.com\n\
         bucket: pond\n\
         meta_filename: meta.yaml\n"
    }

    #[test]
    fn from_yaml_accepts_complete_config() {
        let config = StoreConfig::from_yaml(sample_yaml().as_bytes()).unwrap();
        assert_eq!(config.bucket, "pond");
        assert_eq!(config.meta_filename, "meta.yaml");
        assert!(!config.path_style);
    }

    #[test]
    fn from_yaml_rejects_malformed_input() {
        let err = StoreConfig::from_yaml(b"bucket: [unclosed").unwrap_err();
        assert!(matches!(err, StoreError::Configuration(_)));
    }

    #[test]
    fn validate_rejects_empty_bucket() {
        let mut config = StoreConfig::from_yaml(sample_yaml().as_bytes()).unwrap();
        config.bucket.clear();
        assert!(matches!(
            config.validate(),
            Err(StoreError::Configuration(_))
        ));
    }

    #[test]
    fn validate_rejects_unparsable_endpoint() {
        let mut config = StoreConfig::from_yaml(sample_yaml().as_bytes()).unwrap();
        config.base_endpoint = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(StoreError::Configuration(_))
        ));
    }

    #[test]
    fn debug_redacts_secret_key() {
        let config = StoreConfig::from_yaml(sample_yaml().as_bytes()).unwrap();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("SK"));
    }
}
