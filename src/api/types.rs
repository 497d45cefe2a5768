//! API response type definitions.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Generic Reddit "thing" wrapper (`{"kind": ..., "data": ...}`).
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    #[serde(default)]
    pub kind: String,
    pub data: T,
}

/// Listing payload returned by `/u/<username>/submitted.json`.
#[derive(Debug, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub children: Vec<Thing<PostData>>,
    /// Cursor for the next page. Never followed.
    pub after: Option<String>,
}

/// Raw post fields as they appear in the listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostData {
    pub url: Option<String>,
    pub created_utc: Option<f64>,
    pub author: Option<String>,
    pub subreddit: Option<String>,
    #[serde(default)]
    pub is_gallery: Option<bool>,
    #[serde(default)]
    pub gallery_data: Option<GalleryData>,
}

/// Gallery metadata attached to multi-image posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryData {
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

/// One image inside a gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub media_id: Option<String>,
}

/// Fields common to every post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostMeta {
    pub created: DateTime<Utc>,
    pub author: String,
    pub subreddit: String,
}

/// A submission, classified at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Post {
    /// Single-link post.
    Standard { meta: PostMeta, url: String },
    /// Multi-image post. Each item keeps its position in the gallery;
    /// `items` may be empty for removed galleries.
    Gallery {
        meta: PostMeta,
        items: Vec<(usize, String)>,
    },
}

/// Convert epoch seconds (possibly fractional) into a UTC instant.
pub fn epoch_to_datetime(created_utc: f64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis((created_utc * 1000.0) as i64).unwrap_or_default()
}

impl From<PostData> for Post {
    fn from(data: PostData) -> Self {
        let meta = PostMeta {
            created: epoch_to_datetime(data.created_utc.unwrap_or_default()),
            author: data.author.unwrap_or_default(),
            subreddit: data.subreddit.unwrap_or_default(),
        };

        if data.is_gallery.unwrap_or(false) {
            // Items without a media id are dropped without renumbering the rest.
            let items = data
                .gallery_data
                .map(|g| {
                    g.items
                        .into_iter()
                        .enumerate()
                        .filter_map(|(index, item)| item.media_id.map(|id| (index, id)))
                        .collect()
                })
                .unwrap_or_default();
            Post::Gallery { meta, items }
        } else {
            Post::Standard {
                meta,
                url: data.url.unwrap_or_default(),
            }
        }
    }
}

impl Listing {
    /// Consume the listing into classified posts, preserving order.
    pub fn into_posts(self) -> Vec<Post> {
        self.children
            .into_iter()
            .map(|child| Post::from(child.data))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "kind": "Listing",
        "data": {
            "after": "t3_next",
            "children": [
                {"kind": "t3", "data": {
                    "url": "https://i.redd.it/x.png",
                    "created_utc": 1600000000.0,
                    "author": "u1",
                    "subreddit": "s1",
                    "is_gallery": false,
                    "title": "ignored"
                }},
                {"kind": "t3", "data": {
                    "url": "https://www.reddit.com/gallery/abc",
                    "created_utc": 1600000100,
                    "author": "u1",
                    "subreddit": "s2",
                    "is_gallery": true,
                    "gallery_data": {"items": [{"media_id": "a", "id": 1}, {"id": 9}, {"media_id": "b", "id": 2}]}
                }},
                {"kind": "t3", "data": {
                    "url": "https://www.reddit.com/gallery/gone",
                    "created_utc": 1600000200,
                    "author": "u1",
                    "subreddit": "s3",
                    "is_gallery": true,
                    "gallery_data": null
                }}
            ]
        }
    }"#;

    #[test]
    fn test_parse_listing_into_posts() {
        let listing: Thing<Listing> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(listing.kind, "Listing");
        assert_eq!(listing.data.after.as_deref(), Some("t3_next"));

        let posts = listing.data.into_posts();
        assert_eq!(posts.len(), 3);

        match &posts[0] {
            Post::Standard { meta, url } => {
                assert_eq!(url, "https://i.redd.it/x.png");
                assert_eq!(meta.author, "u1");
                assert_eq!(meta.subreddit, "s1");
                assert_eq!(meta.created.timestamp(), 1_600_000_000);
            }
            other => panic!("expected standard post, got {:?}", other),
        }

        match &posts[1] {
            Post::Gallery { meta, items } => {
                assert_eq!(items, &vec![(0, "a".to_string()), (2, "b".to_string())]);
                assert_eq!(meta.subreddit, "s2");
            }
            other => panic!("expected gallery post, got {:?}", other),
        }

        match &posts[2] {
            Post::Gallery { items, .. } => assert!(items.is_empty()),
            other => panic!("expected gallery post, got {:?}", other),
        }
    }

    #[test]
    fn test_null_fields_default() {
        let data: PostData = serde_json::from_str(
            r#"{"url": null, "created_utc": 1600000000, "author": null, "subreddit": "s"}"#,
        )
        .unwrap();
        match Post::from(data) {
            Post::Standard { meta, url } => {
                assert_eq!(url, "");
                assert_eq!(meta.author, "");
                assert_eq!(meta.subreddit, "s");
            }
            other => panic!("expected standard post, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_gallery_flag_is_standard() {
        let data: PostData = serde_json::from_str(
            r#"{"url": "https://imgur.com/a/xyz", "created_utc": 1, "author": "a", "subreddit": "s"}"#,
        )
        .unwrap();
        assert!(matches!(Post::from(data), Post::Standard { .. }));
    }

    #[test]
    fn test_epoch_to_datetime() {
        assert_eq!(epoch_to_datetime(1_600_000_000.0).timestamp(), 1_600_000_000);
        assert_eq!(
            epoch_to_datetime(1_600_000_000.5).timestamp_subsec_millis(),
            500
        );
    }
}
