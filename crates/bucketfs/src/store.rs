// SPDX-FileCopyrightText: 2026 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The remote store capability seam.
//!
//! [`BucketFs`](crate::BucketFs) only ever talks to the wire through
//! [`RemoteStore`]: an existence probe, one listing pass, and a streaming
//! body read. [`S3Store`] implements it against any S3-compatible endpoint;
//! [`MemoryStore`](crate::MemoryStore) backs tests.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use futures::stream::StreamExt;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::region::Region;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// A streaming object body: raw chunks in arrival order, no buffering.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// The narrow capability set the accessor needs from a remote store.
///
/// Implementations do not retry and do not interpret keys; each method is a
/// single remote call and every failure is reported to the caller.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Existence/metadata probe for one exact key.
    async fn probe(&self, key: &str) -> Result<()>;

    /// One listing page of keys beginning with `prefix`, in store order.
    ///
    /// Exactly one call: a prefix holding more keys than the store returns
    /// per page yields a truncated view.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;

    /// Open a streaming read of the body stored at `key`.
    async fn open(&self, key: &str) -> Result<ByteStream>;
}

/// [`RemoteStore`] over an S3-compatible bucket.
pub struct S3Store {
    bucket: Bucket,
}

impl S3Store {
    /// Build a client for the configured endpoint. No remote calls are made
    /// here; the first probe or listing surfaces connectivity problems.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.base_endpoint.clone(),
        };
        let creds = Credentials::new(
            Some(config.access_key.as_str()),
            Some(config.secret_key.as_str()),
            None,
            None,
            None,
        )
        .map_err(|e| StoreError::Configuration(format!("credentials: {}", e)))?;

        let mut bucket = Bucket::new(config.bucket.as_str(), region, creds)?;
        if config.path_style {
            bucket = bucket.with_path_style();
        }

        let name = config.bucket.as_str();
        let region_name = config.region.as_str();
        diagnostics::log_info!(
            "S3 store ready: bucket {name}, region {region_name}",
            name: name,
            region_name: region_name
        );

        Ok(S3Store { bucket })
    }
}

#[async_trait]
impl RemoteStore for S3Store {
    async fn probe(&self, key: &str) -> Result<()> {
        let (_, code) = self.bucket.head_object(key).await?;
        if !(200..300).contains(&code) {
            return Err(StoreError::NotFound(key.to_string()));
        }
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let (page, _) = self
            .bucket
            .list_page(prefix.to_string(), None, None, None, None)
            .await?;
        Ok(page.contents.into_iter().map(|entry| entry.key).collect())
    }

    async fn open(&self, key: &str) -> Result<ByteStream> {
        let response = self.bucket.get_object_stream(key).await?;
        if !(200..300).contains(&response.status_code) {
            return Err(StoreError::NotFound(key.to_string()));
        }
        Ok(Box::pin(response.bytes.map(|item| {
            item.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            access_key: "test-access".to_string(),
            secret_key: "test-secret".to_string(),
            region: "us-east-1".to_string(),
            base_endpoint: "https://store.example.com".to_string(),
            bucket: "pond".to_string(),
            meta_filename: "meta.yaml".to_string(),
            path_style: false,
        }
    }

    #[test]
    fn connect_builds_client_without_remote_calls() {
        assert!(S3Store::connect(&config()).is_ok());
    }

    #[test]
    fn connect_accepts_path_style() {
        let mut config = config();
        config.path_style = true;
        assert!(S3Store::connect(&config).is_ok());
    }
}
