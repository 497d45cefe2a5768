//! Image extraction from submission listings.

use crate::api::types::Post;
use crate::media::item::ImageDescriptor;

/// Build the direct image link for a gallery item.
pub fn gallery_item_url(media_base_url: &str, media_id: &str) -> String {
    format!("{}/{}.jpg", media_base_url.trim_end_matches('/'), media_id)
}

/// Flatten posts into image descriptors, preserving order.
///
/// Standard posts yield one descriptor carrying the post URL unchecked.
/// Gallery posts yield one descriptor per item, or nothing if they have no items.
pub fn extract_images(posts: &[Post], media_base_url: &str) -> Vec<ImageDescriptor> {
    let mut images = Vec::new();

    for post in posts {
        match post {
            Post::Standard { meta, url } => images.push(ImageDescriptor {
                url: url.clone(),
                created: meta.created,
                author: meta.author.clone(),
                subreddit: meta.subreddit.clone(),
                gallery_index: None,
            }),
            Post::Gallery { meta, items } => {
                images.extend(items.iter().map(|(index, media_id)| ImageDescriptor {
                    url: gallery_item_url(media_base_url, media_id),
                    created: meta.created,
                    author: meta.author.clone(),
                    subreddit: meta.subreddit.clone(),
                    gallery_index: Some(*index),
                }));
            }
        }
    }

    images
}
