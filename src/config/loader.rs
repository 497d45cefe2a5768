//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default listing host.
pub const DEFAULT_BASE_URL: &str = "https://reddit.com";

/// Default host for gallery item images.
pub const DEFAULT_MEDIA_BASE_URL: &str = "https://i.redd.it";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

/// Users whose submissions are scraped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetsConfig {
    /// Usernames to process, in order.
    #[serde(default)]
    pub usernames: Vec<String>,
}

/// Download options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Root directory; one subdirectory per user is created beneath it.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Maximum number of images downloaded at once for a single user.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Whether to show a progress bar per user.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            concurrency: default_concurrency(),
            show_progress: true,
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Host serving `/u/<username>/submitted.json`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Host serving gallery item images.
    #[serde(default = "default_media_base_url")]
    pub media_base_url: String,

    /// Reddit username of whoever runs this tool, named in the User-Agent.
    #[serde(default = "default_maintainer")]
    pub maintainer: String,

    /// Full User-Agent override.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            media_base_url: default_media_base_url(),
            maintainer: default_maintainer(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// The identifying User-Agent sent with every request.
    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!(
                "{}:{} (by /u/{})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                self.maintainer
            )
        })
    }
}

fn default_concurrency() -> usize {
    8
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_media_base_url() -> String {
    DEFAULT_MEDIA_BASE_URL.to_string()
}

fn default_maintainer() -> String {
    "atkinchris".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective output root.
    pub fn output_directory(&self) -> PathBuf {
        self.options.output_directory.clone().unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("images")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [targets]
            usernames = ["second", "first"]

            [options]
            output_directory = "/tmp/images"
            concurrency = 2
            show_progress = false

            [client]
            maintainer = "someone"
            "#,
        )
        .unwrap();

        assert_eq!(config.targets.usernames, vec!["second", "first"]);
        assert_eq!(config.output_directory(), PathBuf::from("/tmp/images"));
        assert_eq!(config.options.concurrency, 2);
        assert!(!config.options.show_progress);
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.client.user_agent(),
            format!("reddit-scraper:{} (by /u/someone)", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.targets.usernames.is_empty());
        assert_eq!(config.options.concurrency, 8);
        assert!(config.options.show_progress);
        assert_eq!(config.client.media_base_url, DEFAULT_MEDIA_BASE_URL);
        assert!(config.output_directory().ends_with("images"));
    }

    #[test]
    fn test_user_agent_override() {
        let client = ClientConfig {
            user_agent: Some("custom/1.0".to_string()),
            ..Default::default()
        };
        assert_eq!(client.user_agent(), "custom/1.0");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
