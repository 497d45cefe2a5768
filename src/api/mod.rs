//! Reddit API module.
//!
//! This module provides:
//! - HTTP client with the identifying User-Agent
//! - Submission listing
//! - API response types

pub mod client;
pub mod types;

pub use client::RedditApi;
pub use types::*;
