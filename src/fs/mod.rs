//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename generation

pub mod naming;
pub mod paths;

pub use naming::{format_timestamp, image_filename, sanitize_path_component};
pub use paths::{ensure_dir, get_user_folder};
