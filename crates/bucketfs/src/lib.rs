// SPDX-FileCopyrightText: 2026 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! bucketfs - a read-only virtual directory view over S3-compatible object
//! storage.
//!
//! A bucket only stores flat keys; directory structure is a convention of
//! `/`-separated key names. This crate presents both as one addressable
//! entity: [`BucketFs::get_object`] resolves a path into an [`Object`]
//! carrying a display URL, the immediate children of a prefix, and the
//! decoded contents of a reserved metadata marker file, while
//! [`BucketFs::get_object_body`] streams a resolved object's raw bytes.
//!
//! # Architecture
//!
//! - **[`BucketFs`]**: the accessor - mode decision, directory aggregation,
//!   body streaming
//! - **[`RemoteStore`]**: the narrow capability seam to the wire (probe,
//!   one listing pass, streaming read)
//! - **[`S3Store`]** / **[`MemoryStore`]**: the real client and the
//!   test-oriented fake behind that seam
//! - **[`StoreConfig`]**: construction-time settings, fixed for the
//!   instance's lifetime
//!
//! Reads only: nothing here writes, deletes, caches, or retries.
//!
//! # Usage
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use bucketfs::{BucketFs, StoreConfig};
//!
//! let fs = BucketFs::connect(&StoreConfig {
//!     access_key: "minioadmin".to_string(),
//!     secret_key: "minioadmin".to_string(),
//!     region: "us-east-1".to_string(),
//!     base_endpoint: "http://localhost:9000".to_string(),
//!     bucket: "datasets".to_string(),
//!     meta_filename: "meta.yaml".to_string(),
//!     path_style: true,
//! })?;
//!
//! let dir = fs.get_object("reports/2024/").await?;
//! for name in &dir.contains {
//!     println!("{name}");
//! }
//!
//! let file = fs.get_object("reports/2024/summary.csv").await?;
//! let body = fs.get_object_body(Some(&file)).await?;
//! # let _ = body;
//! # Ok(())
//! # }
//! ```
//!
//! Set `BUCKETFS_LOG=debug` (after calling
//! `diagnostics::init_diagnostics()`) for per-key traces.

/// Store configuration and YAML loading
pub mod config;

/// Error types
pub mod error;

/// The accessor over a store
pub mod fs;

/// In-memory store for testing
pub mod memory;

/// The resolved object entity
pub mod object;

/// Display-URL resolution
pub mod resolve;

/// The remote store capability trait and the S3 client
pub mod store;

pub use config::{StoreConfig, load_config};
pub use error::{Result, StoreError};
pub use fs::{BucketFs, ObjectBody};
pub use memory::MemoryStore;
pub use object::Object;
pub use resolve::object_url;
pub use store::{ByteStream, RemoteStore, S3Store};

#[cfg(test)]
mod tests;
