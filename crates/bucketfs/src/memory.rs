//! In-memory store, primarily for testing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;

use crate::error::{Result, StoreError};
use crate::store::{ByteStream, RemoteStore};

/// [`RemoteStore`](crate::RemoteStore) backed by a map.
///
/// Keys list in lexicographic order, the order a real bucket yields. Absent
/// keys surface [`StoreError::NotFound`]. Populate it before sharing; the
/// store is read-only once handed to a [`BucketFs`](crate::BucketFs).
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: BTreeMap<String, Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` under `key`, replacing any previous body.
    pub fn insert(&mut self, key: impl Into<String>, body: impl Into<Bytes>) -> &mut Self {
        self.objects.insert(key.into(), body.into());
        self
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn probe(&self, key: &str) -> Result<()> {
        if self.objects.contains_key(key) {
            Ok(())
        } else {
            Err(StoreError::NotFound(key.to_string()))
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .objects
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn open(&self, key: &str) -> Result<ByteStream> {
        let body = self
            .objects
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        Ok(Box::pin(stream::once(async move {
            Ok::<Bytes, std::io::Error>(body)
        })))
    }
}
