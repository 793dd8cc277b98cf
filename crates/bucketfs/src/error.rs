// Error types for bucketfs operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by [`crate::BucketFs`] and the store implementations.
///
/// Every error is terminal for the call that produced it; no partial
/// [`crate::Object`] is ever returned alongside one.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Any failure from the S3 client (network, auth, missing key),
    /// propagated as-is. Retry policy, if any, lives below this crate.
    #[error("remote store error: {0}")]
    Remote(#[from] s3::error::S3Error),

    /// A key a store implementation could not find, where there is no SDK
    /// error to wrap.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The metadata marker body did not parse as a YAML mapping.
    #[error("metadata decode failed for {key}: {source}")]
    MetaDecode {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// No object reference was supplied to the body streamer.
    #[error("no object given")]
    NoObject,

    /// The body of a directory-like object was requested.
    #[error("object is a directory: {0:?}")]
    IsDirectory(String),

    #[error("invalid endpoint URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("endpoint cannot carry a path: {0}")]
    UrlNotABase(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    /// Byte-stream read failure while draining a body.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
