//! Concurrent batch downloading for one user.

use std::path::Path;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::api::RedditApi;
use crate::config::OptionsConfig;
use crate::download::media::download_image;
use crate::download::state::{DownloadState, ImageFailure};
use crate::media::ImageDescriptor;
use crate::output::{create_item_bar, print_warning};

/// Download every image into `target_dir`, at most `options.concurrency` at a time.
///
/// Individual failures are logged and recorded in `state`; they never stop
/// the batch.
pub async fn download_images(
    api: &RedditApi,
    images: &[ImageDescriptor],
    target_dir: &Path,
    options: &OptionsConfig,
    state: &mut DownloadState,
) {
    if images.is_empty() {
        return;
    }

    let progress = if options.show_progress {
        create_item_bar(images.len() as u64, "Downloading")
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<_> = stream::iter(images)
        .map(|image| {
            let progress = progress.clone();
            async move {
                let result = download_image(api, image, target_dir).await;
                if let Err(ref e) = result {
                    let failure = ImageFailure::new(image, e.to_string());
                    progress.suspend(|| print_warning(&failure.to_string()));
                }
                progress.inc(1);
                (image, result)
            }
        })
        .buffer_unordered(options.concurrency.max(1))
        .collect()
        .await;

    progress.finish_and_clear();

    for (image, result) in results {
        state.record(image, result);
    }
}
