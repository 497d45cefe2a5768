//! Image descriptor representation.

use chrono::{DateTime, Utc};

/// One downloadable image derived from a post or a gallery item.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    /// Direct link, or synthesized gallery item link.
    pub url: String,

    /// Creation time of the originating post.
    pub created: DateTime<Utc>,

    pub author: String,

    pub subreddit: String,

    /// Zero-based position within a gallery; `None` for standard posts.
    pub gallery_index: Option<usize>,
}

/// Extension assigned by URL classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Jpg,
    Png,
    /// Album export archive.
    Zip,
}

impl Extension {
    /// Extension including the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Jpg => ".jpg",
            Extension::Png => ".png",
            Extension::Zip => ".zip",
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete URL to fetch for a descriptor and the extension to save it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub image_url: String,
    pub extension: Extension,
}
