//! Configuration module for the reddit-scraper.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{
    ClientConfig, Config, OptionsConfig, TargetsConfig, DEFAULT_BASE_URL, DEFAULT_MEDIA_BASE_URL,
};
pub use validation::{clean_username, validate_config};
