// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::settings::HttpSettings;

/// Fetch error type
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request failed, or the server answered with an error status
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Fetch engine
///
/// One shared reqwest client; every call is a plain GET with the
/// configured user agent and timeout.
pub struct FetchEngine {
    client: Client,
}

impl FetchEngine {
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `url` and return the response body as text. Non-2xx
    /// statuses surface as errors.
    pub async fn fetch_page(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// The underlying client, for callers that stream bodies themselves.
    pub fn client(&self) -> &Client {
        &self.client
    }
}
