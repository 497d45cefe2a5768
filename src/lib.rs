//! Reddit Scraper - downloads images from Reddit users' submission histories.
//!
//! For each configured user the first page of `/u/<username>/submitted.json`
//! is fetched, posts are flattened into image descriptors (gallery posts
//! expand to one descriptor per item), and every image is streamed into
//! `<output>/<username>/`.
//!
//! # Features
//!
//! - Direct `.jpg`/`.png` links, Reddit galleries and imgur album exports
//! - Existing files are skipped, so runs can be repeated
//! - Bounded concurrent downloads per user
//! - Per-image and per-user failures are reported without stopping the run
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reddit_scraper::{download_users, Config, RedditApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = RedditApi::new(&config.client)?;
//!     let stats = download_users(&api, &config).await?;
//!     println!("{} images downloaded", stats.downloaded_count);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{Post, RedditApi};
pub use config::Config;
pub use download::{
    download_image, download_images, download_user, download_users, DownloadOutcome,
    DownloadState, GlobalState,
};
pub use error::{Error, Result};
pub use media::{extract_images, resolve_url, ImageDescriptor};
