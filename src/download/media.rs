//! Single image downloading.

use std::io::ErrorKind;
use std::path::Path;

use futures::StreamExt;
use reqwest::Response;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::api::RedditApi;
use crate::download::state::DownloadOutcome;
use crate::error::Result;
use crate::fs::image_filename;
use crate::media::{resolve_url, ImageDescriptor};

/// Download an image into the specified directory.
///
/// An existing file at the target path is left untouched and reported as skipped.
pub async fn download_image(
    api: &RedditApi,
    image: &ImageDescriptor,
    target_dir: &Path,
) -> Result<DownloadOutcome> {
    let target = resolve_url(&image.url)?;

    let filename = image_filename(image, target.extension)?;
    let output_path = target_dir.join(&filename);

    if output_path.exists() {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return Ok(DownloadOutcome::Skipped(output_path));
    }

    let response = api.fetch(&target.image_url, None).await?;

    // A sibling download may have claimed the same name since the check above.
    let Some(file) = create_new_file(&output_path).await? else {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return Ok(DownloadOutcome::Skipped(output_path));
    };

    stream_to_file(response, file).await?;

    tracing::info!("Downloaded: {}", output_path.display());

    Ok(DownloadOutcome::Downloaded(output_path))
}

/// Create a file that must not exist yet. `None` if it already does.
async fn create_new_file(path: &Path) -> Result<Option<File>> {
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Stream a response body into a file.
async fn stream_to_file(response: Response, mut file: File) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
    }

    file.flush().await?;

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_new_file_leaves_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("pics_2020-09-13_12-26-40.jpg");

        let mut file = create_new_file(&path).await.unwrap().unwrap();
        file.write_all(b"first").await.unwrap();
        file.flush().await.unwrap();

        assert!(create_new_file(&path).await.unwrap().is_none());
        assert_eq!(std::fs::read(&path).unwrap(), b"first");
    }

    #[tokio::test]
    async fn test_create_new_file_missing_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing").join("a.jpg");

        assert!(matches!(
            create_new_file(&path).await,
            Err(crate::error::Error::Io(_))
        ));
    }
}
