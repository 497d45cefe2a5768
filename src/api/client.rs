//! Reddit HTTP client.

use reqwest::{header, Client, Response};

use crate::api::types::*;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Reddit API client. Every request carries the identifying User-Agent.
pub struct RedditApi {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl RedditApi {
    /// Create a new API client.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent(),
        })
    }

    /// The User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Build the fixed headers merged with caller overrides. Caller values win.
    fn build_headers(&self, overrides: Option<&header::HeaderMap>) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let user_agent = header::HeaderValue::from_str(&self.user_agent)
            .map_err(|e| Error::Config(format!("Invalid user agent: {}", e)))?;
        headers.insert(header::USER_AGENT, user_agent);

        if let Some(overrides) = overrides {
            for (name, value) in overrides {
                headers.insert(name.clone(), value.clone());
            }
        }

        Ok(headers)
    }

    /// Make a GET request, failing on any non-success status.
    pub async fn fetch(&self, url: &str, headers: Option<&header::HeaderMap>) -> Result<Response> {
        let headers = self.build_headers(headers)?;

        tracing::debug!("GET {}", url);

        let response = self.client.get(url).headers(headers).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Http {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Get the first page of a user's submissions.
    pub async fn get_user_posts(&self, username: &str) -> Result<Vec<Post>> {
        let url = format!("{}/u/{}/submitted.json", self.base_url, username);

        let response = self.fetch(&url, None).await?;
        let text = response.text().await?;
        tracing::debug!("Submissions response length: {} bytes", text.len());

        let listing: Thing<Listing> = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(
                "Failed to parse submissions: {} - Response: {}",
                e,
                text.chars().take(500).collect::<String>()
            );
            e
        })?;

        if listing.data.after.is_some() {
            tracing::debug!(
                "More submissions available for {}; only the first page is read",
                username
            );
        }

        Ok(listing.data.into_posts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> RedditApi {
        RedditApi::new(&ClientConfig {
            maintainer: "tester".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_user_agent_names_tool_and_maintainer() {
        let api = api();
        assert!(api.user_agent().starts_with("reddit-scraper:"));
        assert!(api.user_agent().ends_with("(by /u/tester)"));
    }

    #[test]
    fn test_build_headers_caller_wins() {
        let api = api();

        let mut overrides = header::HeaderMap::new();
        overrides.insert(header::USER_AGENT, "override/1.0".parse().unwrap());
        overrides.insert(header::ACCEPT, "application/json".parse().unwrap());

        let headers = api.build_headers(Some(&overrides)).unwrap();
        assert_eq!(headers.get(header::USER_AGENT).unwrap(), "override/1.0");
        assert_eq!(headers.get(header::ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get_all(header::USER_AGENT).iter().count(), 1);

        let defaults = api.build_headers(None).unwrap();
        assert_eq!(defaults.get(header::USER_AGENT).unwrap(), api.user_agent());
    }
}
