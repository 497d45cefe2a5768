//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::clean_username;
use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Get the output folder for a user beneath the output root.
pub fn get_user_folder(root: &Path, username: &str) -> Result<PathBuf> {
    let folder = sanitize_path_component(clean_username(username))?;
    Ok(root.join(folder))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}
