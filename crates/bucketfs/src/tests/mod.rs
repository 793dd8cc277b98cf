mod accessor;

use std::sync::Arc;

use crate::{BucketFs, MemoryStore, StoreConfig};

pub(crate) fn test_config() -> StoreConfig {
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

pub(crate) fn fs_with(store: MemoryStore) -> BucketFs {
    BucketFs::with_store(Arc::new(store), &test_config())
}
