//! Per-user pipeline and the run over all configured users.

use std::path::Path;

use crate::api::RedditApi;
use crate::config::{clean_username, Config};
use crate::download::batch::download_images;
use crate::download::state::{DownloadState, GlobalState};
use crate::error::Result;
use crate::fs::{ensure_dir, get_user_folder};
use crate::media::extract_images;
use crate::output::{print_error, print_info, print_user_stats};

/// List, extract and download images for one user.
///
/// No folder is created when the listing yields no images.
pub async fn download_user(
    api: &RedditApi,
    config: &Config,
    root: &Path,
    username: &str,
) -> Result<DownloadState> {
    let username = clean_username(username);
    let mut state = DownloadState::new(username.to_string());

    let posts = api.get_user_posts(username).await?;
    let images = extract_images(&posts, &config.client.media_base_url);
    state.image_count = images.len() as u64;

    tracing::info!(
        "Found {} images in {} posts for {}",
        images.len(),
        posts.len(),
        username
    );

    if images.is_empty() {
        return Ok(state);
    }

    let user_dir = get_user_folder(root, username)?;
    ensure_dir(&user_dir).await?;
    state.base_path = Some(user_dir.clone());

    download_images(api, &images, &user_dir, &config.options, &mut state).await;

    Ok(state)
}

/// Process every configured user in order.
///
/// A failing user is reported and counted; only failure to create the
/// output root is returned as an error.
pub async fn download_users(api: &RedditApi, config: &Config) -> Result<GlobalState> {
    let root = config.output_directory();
    ensure_dir(&root).await?;

    let mut global_state = GlobalState::default();

    for username in &config.targets.usernames {
        print_info(&format!("Processing user: {}", username));

        match download_user(api, config, &root, username).await {
            Ok(state) => {
                print_user_stats(&state);
                global_state.add_user_stats(&state);
            }
            Err(e) => {
                print_error(&format!("Error fetching \"{}\": {}", username, e));
                global_state.mark_user_failed();
            }
        }
    }

    Ok(global_state)
}
