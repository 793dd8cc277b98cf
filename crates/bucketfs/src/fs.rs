// SPDX-FileCopyrightText: 2026 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The accessor: path resolution, directory aggregation, body streaming.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use futures::stream::StreamExt;
use tokio_util::io::StreamReader;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::object::Object;
use crate::resolve::object_url;
use crate::store::{RemoteStore, S3Store};

/// A readable object body. The caller owns it; dropping the reader releases
/// the underlying stream.
pub type ObjectBody = Pin<Box<dyn tokio::io::AsyncRead + Send>>;

/// Read-only view of one bucket as a tree of objects and virtual
/// directories.
///
/// A path with no trailing `/` names a single object. An empty path or one
/// ending in `/` names a directory: its [`Object`] is assembled from a
/// key-prefix listing, collecting immediate children and the decoded
/// contents of the reserved metadata marker file, and discarding anything
/// deeper than one level.
///
/// Every operation is an independent `async` call holding no state between
/// invocations; a `BucketFs` is safe to share across tasks. To cancel or
/// bound an in-flight operation, drop the future or race it against a
/// timer.
pub struct BucketFs {
    store: Arc<dyn RemoteStore>,
    base_endpoint: String,
    bucket: String,
    meta_filename: String,
}

impl BucketFs {
    /// Validate `config` and connect through an [`S3Store`].
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        let store = S3Store::connect(config)?;
        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Use any store implementation; `config` supplies addressing and the
    /// metadata marker name only.
    pub fn with_store(store: Arc<dyn RemoteStore>, config: &StoreConfig) -> Self {
        BucketFs {
            store,
            base_endpoint: config.base_endpoint.clone(),
            bucket: config.bucket.clone(),
            meta_filename: config.meta_filename.clone(),
        }
    }

    /// Resolve `path` into an [`Object`].
    ///
    /// Single objects are probed for existence and returned with empty
    /// `meta` and `contains`. Directories perform one listing pass; a child
    /// exactly matching the configured metadata filename is fetched and
    /// decoded into `meta`. Any remote or decode failure fails the whole
    /// call.
    pub async fn get_object(&self, path: &str) -> Result<Object> {
        let url = object_url(&self.base_endpoint, &self.bucket, path)?;

        // single object
        if !path.is_empty() && !path.ends_with('/') {
            diagnostics::log_debug!("probing object {path}", path: path);
            self.store.probe(path).await?;
            return Ok(Object::empty(path, url));
        }

        // directory
        self.assemble_directory(path, url).await
    }

    async fn assemble_directory(&self, prefix: &str, url: String) -> Result<Object> {
        let keys = self.store.list(prefix).await?;
        let count = keys.len();
        diagnostics::log_debug!(
            "listed {count} keys under {prefix}",
            count: count,
            prefix: prefix
        );

        let mut object = Object::empty(prefix, url);

        for key in keys {
            if key.is_empty() {
                continue;
            }

            let Some(name) = key.strip_prefix(prefix) else {
                continue;
            };
            if name.is_empty() {
                // the prefix marker itself
                continue;
            }

            let parts: Vec<&str> = name.split('/').collect();

            // "x/" is an immediate sub-directory marker; checked before the
            // metadata filename match.
            if parts.len() == 2 && parts[1].is_empty() {
                object.contains.push(name.to_string());
                continue;
            }

            // anything else with a separator is below the immediate level
            if parts.len() != 1 {
                continue;
            }

            if name == self.meta_filename {
                object.meta = self.fetch_meta(&key).await?;
                continue;
            }

            object.contains.push(name.to_string());
        }

        Ok(object)
    }

    async fn fetch_meta(&self, key: &str) -> Result<HashMap<String, serde_json::Value>> {
        let mut body = self.store.open(key).await?;
        let mut buf = Vec::new();
        while let Some(chunk) = body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        serde_yaml::from_slice(&buf).map_err(|e| StoreError::MetaDecode {
            key: key.to_string(),
            source: e,
        })
    }

    /// Open a readable stream over a previously resolved object's body.
    ///
    /// Rejects an absent reference and directory-like objects before
    /// touching the remote store. The bytes pass through untransformed.
    pub async fn get_object_body(&self, object: Option<&Object>) -> Result<ObjectBody> {
        let object = object.ok_or(StoreError::NoObject)?;
        if object.is_dir() {
            return Err(StoreError::IsDirectory(object.path.clone()));
        }

        let stream = self.store.open(&object.path).await?;
        Ok(Box::pin(StreamReader::new(stream)))
    }
}
