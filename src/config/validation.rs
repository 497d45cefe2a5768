//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Minimum username length.
const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length.
const MAX_USERNAME_LENGTH: usize = 20;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_usernames(&config.targets.usernames)?;
    validate_concurrency(config.options.concurrency)?;
    validate_maintainer(&config.client.maintainer)?;
    validate_url("base_url", &config.client.base_url)?;
    validate_url("media_base_url", &config.client.media_base_url)?;

    Ok(())
}

/// Strip a leading `u/` or `/u/` from a username.
pub fn clean_username(username: &str) -> &str {
    let trimmed = username.trim();
    trimmed
        .strip_prefix("/u/")
        .or_else(|| trimmed.strip_prefix("u/"))
        .unwrap_or(trimmed)
}

/// Validate target usernames.
pub fn validate_usernames<S: AsRef<str>, I: IntoIterator<Item = S>>(usernames: I) -> Result<()> {
    let usernames: Vec<_> = usernames.into_iter().collect();

    if usernames.is_empty() {
        return Err(Error::MissingConfig(
            "usernames (at least one username required)".to_string(),
        ));
    }

    let username_pattern = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();

    for username in usernames {
        let username = username.as_ref();
        let clean = clean_username(username);

        if clean.len() < MIN_USERNAME_LENGTH {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: format!(
                    "Username '{}' is too short (minimum {} characters)",
                    username, MIN_USERNAME_LENGTH
                ),
            });
        }

        if clean.len() > MAX_USERNAME_LENGTH {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: format!(
                    "Username '{}' is too long (maximum {} characters)",
                    username, MAX_USERNAME_LENGTH
                ),
            });
        }

        if !username_pattern.is_match(clean) {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: format!(
                    "Username '{}' contains invalid characters. Only alphanumeric, hyphens, and underscores allowed.",
                    username
                ),
            });
        }
    }

    Ok(())
}

/// Validate the download concurrency.
pub fn validate_concurrency(concurrency: usize) -> Result<()> {
    if concurrency == 0 {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: "Concurrency must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the maintainer named in the User-Agent.
pub fn validate_maintainer(maintainer: &str) -> Result<()> {
    if maintainer.trim().is_empty() {
        return Err(Error::MissingConfig("maintainer".to_string()));
    }

    Ok(())
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    url::Url::parse(value).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("'{}' is not a valid URL: {}", value, e),
    })?;

    Ok(())
}
