//! HTTP transport for the two pipeline hops.
//!
//! Requests are issued through a shared [`reqwest::Client`] built from
//! [`FetchSettings`]. Redirects are followed with reqwest's default policy,
//! so a listing URL that redirects behaves the way it would in a browser;
//! the post-redirect URL is reported back so relative article links resolve
//! against the page that was actually served.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{FetchFailure, ScrapeError};

/// Transport configuration shared by both hops.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Deadline for establishing a connection.
    pub connect_timeout: Duration,
    /// Deadline for the whole request, including the body read.
    pub request_timeout: Duration,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("lede_scraper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// One fetched page. Produced per request, never retained.
#[derive(Debug)]
pub(crate) struct FetchedPage {
    pub status: u16,
    /// The URL the response was served from, after redirects.
    pub final_url: Url,
    pub body: String,
}

pub(crate) fn build_client(settings: &FetchSettings) -> Result<Client, ScrapeError> {
    Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .user_agent(settings.user_agent.clone())
        .build()
        .map_err(|e| ScrapeError::fetch(String::new(), FetchFailure::Transport(e)))
}

/// GET a page and return its decoded body.
///
/// Any non-2xx status is an error; the body is not parsed in that case.
#[instrument(level = "debug", skip_all, fields(%url))]
pub(crate) async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, ScrapeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| ScrapeError::fetch(url.as_str(), classify(e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::fetch(
            url.as_str(),
            FetchFailure::Status(status.as_u16()),
        ));
    }

    let final_url = response.url().clone();
    let body = response
        .text()
        .await
        .map_err(|e| ScrapeError::fetch(url.as_str(), classify(e)))?;

    debug!(
        status = status.as_u16(),
        bytes = body.len(),
        %final_url,
        "Fetched page"
    );

    Ok(FetchedPage {
        status: status.as_u16(),
        final_url,
        body,
    })
}

fn classify(err: reqwest::Error) -> FetchFailure {
    if err.is_timeout() {
        FetchFailure::Timeout
    } else {
        FetchFailure::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FetchSettings::default();
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert!(settings.user_agent.starts_with("lede_scraper/"));
    }

    #[test]
    fn test_build_client_from_defaults() {
        assert!(build_client(&FetchSettings::default()).is_ok());
    }
}
