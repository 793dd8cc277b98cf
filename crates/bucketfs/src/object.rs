//! The resolved object entity.

use std::collections::HashMap;

use serde::Serialize;

/// One addressable entity in the bucket: a flat object, or a virtual
/// directory assembled from a key-prefix listing.
///
/// Objects are built fresh on every accessor call and never mutated after
/// being returned; structural equality between two resolutions of the same
/// path means the remote state did not change in between.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Object {
    /// Key within the bucket. Empty for the store root; a trailing `/` means
    /// directory semantics apply.
    pub path: String,

    /// Decoded contents of the directory's metadata marker file. Empty for
    /// single objects and for directories without a marker. Values carry no
    /// schema; callers project what they need.
    pub meta: HashMap<String, serde_json::Value>,

    /// Immediate children in listing order. Sub-directory markers keep their
    /// trailing `/`; deeper descendants and the metadata marker itself never
    /// appear.
    pub contains: Vec<String>,

    /// Display URL, resolved once at construction.
    pub url: String,
}

impl Object {
    pub(crate) fn empty(path: &str, url: String) -> Self {
        Object {
            path: path.to_string(),
            meta: HashMap::new(),
            contains: Vec::new(),
            url,
        }
    }

    /// Whether directory semantics apply to this object.
    pub fn is_dir(&self) -> bool {
        self.path.is_empty() || self.path.ends_with('/')
    }
}
