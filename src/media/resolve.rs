//! URL classification: decides what to fetch for a post URL.

use std::path::Path;

use crate::error::{Error, Result};
use crate::media::item::{Extension, ResolvedTarget};

/// Marker for imgur album links, which are fetched as zip exports.
const IMGUR_ALBUM: &str = "imgur.com/a";

/// Classify a post URL into a downloadable target.
///
/// Direct `.jpg`/`.png` links are fetched as-is, imgur albums as `<url>/zip`.
/// Anything else is rejected with [`Error::UnsupportedUrl`].
pub fn resolve_url(url: &str) -> Result<ResolvedTarget> {
    match extract_extension_from_url(url).as_deref() {
        Some("jpg") => {
            return Ok(ResolvedTarget {
                image_url: url.to_string(),
                extension: Extension::Jpg,
            })
        }
        Some("png") => {
            return Ok(ResolvedTarget {
                image_url: url.to_string(),
                extension: Extension::Png,
            })
        }
        _ => {}
    }

    if url.contains(IMGUR_ALBUM) {
        return Ok(ResolvedTarget {
            image_url: format!("{}/zip", url),
            extension: Extension::Zip,
        });
    }

    Err(Error::UnsupportedUrl(url.to_string()))
}

/// Extract the extension of the URL's path, ignoring query and fragment.
fn extract_extension_from_url(url: &str) -> Option<String> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    };

    Path::new(&path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
}
