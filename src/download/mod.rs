//! Download module for content downloading.
//!
//! This module provides:
//! - Download state tracking
//! - Single image downloading
//! - Bounded concurrent batches per user
//! - The per-user pipeline and the run over all users

pub mod batch;
pub mod media;
pub mod state;
pub mod users;

pub use batch::download_images;
pub use media::download_image;
pub use state::{DownloadOutcome, DownloadState, GlobalState, ImageFailure};
pub use users::{download_user, download_users};
