//! Download state tracking.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::media::ImageDescriptor;

/// Result of a single image that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Fetched and written to this path.
    Downloaded(PathBuf),
    /// A file already existed at this path.
    Skipped(PathBuf),
}

/// A per-image failure, kept for reporting.
#[derive(Debug, Clone)]
pub struct ImageFailure {
    pub author: String,
    pub subreddit: String,
    pub created: DateTime<Utc>,
    pub message: String,
}

impl ImageFailure {
    pub fn new(image: &ImageDescriptor, message: impl Into<String>) -> Self {
        Self {
            author: image.author.clone(),
            subreddit: image.subreddit.clone(),
            created: image.created,
            message: message.into(),
        }
    }
}

impl fmt::Display for ImageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.author,
            self.subreddit,
            self.created.to_rfc3339(),
            self.message
        )
    }
}

/// Per-user download state.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub username: Option<String>,

    /// User output folder, set once images were found.
    pub base_path: Option<PathBuf>,

    /// Images extracted from the listing.
    pub image_count: u64,

    // Statistics
    pub downloaded_count: u64,
    pub skipped_count: u64,
    pub failures: Vec<ImageFailure>,
}

impl DownloadState {
    /// Create a new download state for a user.
    pub fn new(username: String) -> Self {
        Self {
            username: Some(username),
            ..Default::default()
        }
    }

    /// Record the result of one image.
    pub fn record(&mut self, image: &ImageDescriptor, result: Result<DownloadOutcome>) {
        match result {
            Ok(DownloadOutcome::Downloaded(_)) => self.downloaded_count += 1,
            Ok(DownloadOutcome::Skipped(_)) => self.skipped_count += 1,
            Err(e) => self.failures.push(ImageFailure::new(image, e.to_string())),
        }
    }

    /// Get failed image count.
    pub fn failed_count(&self) -> u64 {
        self.failures.len() as u64
    }

    /// Whether the listing produced no images.
    pub fn is_empty(&self) -> bool {
        self.image_count == 0
    }
}

/// Global statistics across all users.
#[derive(Debug, Default)]
pub struct GlobalState {
    pub users_processed: u64,
    pub users_failed: u64,
    pub users_without_images: u64,
    pub downloaded_count: u64,
    pub skipped_count: u64,
    pub failed_count: u64,
}

impl GlobalState {
    /// Add statistics from a user's download state.
    pub fn add_user_stats(&mut self, state: &DownloadState) {
        if state.is_empty() {
            self.users_without_images += 1;
        }
        self.downloaded_count += state.downloaded_count;
        self.skipped_count += state.skipped_count;
        self.failed_count += state.failed_count();
        self.users_processed += 1;
    }

    /// Mark a user as failed.
    pub fn mark_user_failed(&mut self) {
        self.users_failed += 1;
    }
}
