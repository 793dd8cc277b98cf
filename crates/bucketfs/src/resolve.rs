//! Display-URL resolution.

use url::Url;

use crate::error::{Result, StoreError};

/// Join base endpoint, bucket name and object path into one display URL.
///
/// Pure string work, no I/O. Separators are normalized at every join point
/// (a trailing `/` on the base or doubled `/` inside the path do not
/// produce empty segments), and a trailing `/` on a directory-like path is
/// preserved. Fails only when the base endpoint does not parse or cannot
/// carry path segments.
pub fn object_url(base: &str, bucket: &str, path: &str) -> Result<String> {
    let mut url = Url::parse(base)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| StoreError::UrlNotABase(base.to_string()))?;
        segments.pop_if_empty();
        segments.push(bucket);
        for part in path.split('/').filter(|part| !part.is_empty()) {
            segments.push(part);
        }
        if path.ends_with('/') {
            segments.push("");
        }
    }
    Ok(url.into())
}
