//! Filename generation.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::{Error, Result};
use crate::media::{Extension, ImageDescriptor};

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// Format a timestamp as a filesystem-safe, sortable token.
///
/// Seconds precision, `_` between date and time, every other run of
/// non-alphanumeric characters collapsed to `-`: `2020-09-13_12-26-40`.
pub fn format_timestamp(created: &DateTime<Utc>) -> String {
    let iso = created.format("%Y-%m-%d_%H:%M:%S").to_string();
    NON_ALPHANUMERIC_RUN.replace_all(&iso, "-").into_owned()
}

/// Sanitize a path component (folder or file name part).
///
/// Used for usernames and subreddit names coming from config or the API.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Build the output filename for an image:
/// `<subreddit>_<timestamp>[_gallery-<index>]<ext>`.
pub fn image_filename(image: &ImageDescriptor, extension: Extension) -> Result<String> {
    let subreddit = sanitize_path_component(&image.subreddit)?;
    let timestamp = format_timestamp(&image.created);

    Ok(match image.gallery_index {
        Some(index) => format!("{}_{}_gallery-{}{}", subreddit, timestamp, index, extension),
        None => format!("{}_{}{}", subreddit, timestamp, extension),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn image(gallery_index: Option<usize>) -> ImageDescriptor {
        ImageDescriptor {
            url: "https://i.redd.it/a.jpg".to_string(),
            created: Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
            author: "u1".to_string(),
            subreddit: "pics".to_string(),
            gallery_index,
        }
    }

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "2020-09-13_12-26-40");
    }

    #[test]
    fn test_format_timestamp_drops_subseconds() {
        let whole = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        let fractional = Utc.timestamp_millis_opt(1_600_000_000_999).unwrap();
        assert_eq!(format_timestamp(&whole), format_timestamp(&fractional));
    }

    #[test]
    fn test_format_timestamp_charset_and_stability() {
        let samples = [
            DateTime::<Utc>::default(),
            Utc.timestamp_opt(1_600_000_001, 0).unwrap(),
            Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(12345, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(-50, 6, 15, 8, 30, 0).unwrap(),
        ];

        for dt in samples {
            let token = format_timestamp(&dt);
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
                "unexpected character in {}",
                token
            );
            assert_eq!(token, format_timestamp(&dt));
        }
    }

    #[test]
    fn test_distinct_seconds_distinct_tokens() {
        let a = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        let b = Utc.timestamp_opt(1_600_000_001, 0).unwrap();
        assert_ne!(format_timestamp(&a), format_timestamp(&b));
    }

    #[test]
    fn test_image_filename() {
        assert_eq!(
            image_filename(&image(None), Extension::Png).unwrap(),
            "pics_2020-09-13_12-26-40.png"
        );
        assert_eq!(
            image_filename(&image(Some(1)), Extension::Jpg).unwrap(),
            "pics_2020-09-13_12-26-40_gallery-1.jpg"
        );
        assert_eq!(
            image_filename(&image(None), Extension::Zip).unwrap(),
            "pics_2020-09-13_12-26-40.zip"
        );
    }

    #[test]
    fn test_image_filename_rejects_traversal() {
        let mut bad = image(None);
        bad.subreddit = "../escape".to_string();
        assert!(image_filename(&bad, Extension::Jpg).is_err());
    }

    #[test]
    fn test_sanitize_path_component_valid() {
        assert_eq!(sanitize_path_component("some_user").unwrap(), "some_user");
        assert_eq!(
            sanitize_path_component("path/to/name").unwrap(),
            "path_to_name"
        );
    }

    #[test]
    fn test_sanitize_path_component_invalid() {
        assert!(sanitize_path_component("../evil").is_err());
        assert!(sanitize_path_component("foo/../bar").is_err());
        assert!(sanitize_path_component("nul\0byte").is_err());
        assert!(sanitize_path_component("   ").is_err());
        assert!(sanitize_path_component("").is_err());
    }
}
