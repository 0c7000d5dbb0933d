// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Announcement page listing one anchor per province.
const DEFAULT_ENTRY_URL: &str = "https://www.nfz.gov.pl/aktualnosci/aktualnosci-centrali/wykazy-placowek-udzielajacych-swiadczen-w-zwiazku-z-przeciwdzialaniem-rozprzestrzenianiu-koronawirusa,7624.html";

/// Application configuration settings
///
/// Contains crawl, HTTP client and storage configuration
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Crawl configuration
    pub crawl: CrawlSettings,
    /// HTTP client configuration
    pub http: HttpSettings,
    /// Storage configuration
    pub storage: StorageSettings,
}

/// Crawl configuration settings
#[derive(Debug, Deserialize)]
pub struct CrawlSettings {
    /// Entry page listing the region anchors
    pub entry_url: String,
    /// Base URL relative hrefs are resolved against
    pub base_url: String,
    /// Selector for the section containing the region anchors
    pub region_container: String,
    /// Selector for region anchors inside that section
    pub region_anchor: String,
    /// Selector for document anchors on a region page
    pub document_anchor: String,
}

/// HTTP client configuration settings
#[derive(Debug, Deserialize)]
pub struct HttpSettings {
    /// User agent sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Storage configuration settings
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// Destination bucket name
    pub bucket: String,
    /// Optional endpoint, for MinIO and other S3-compatible services
    pub endpoint: Option<String>,
}

/// The storage region must come from the environment; its absence is a
/// fatal startup condition, checked before any network activity.
pub fn require_aws_region() -> Result<(), ConfigError> {
    if std::env::var_os("AWS_REGION").is_none() {
        return Err(ConfigError::Message(
            "AWS_REGION environment variable must be set".to_string(),
        ));
    }
    Ok(())
}

impl Settings {
    /// Load configuration from defaults, optional config files and
    /// `NFZ__`-prefixed environment variables, in that order.
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default crawl settings
            .set_default("crawl.entry_url", DEFAULT_ENTRY_URL)?
            .set_default("crawl.base_url", "https://www.nfz.gov.pl")?
            .set_default("crawl.region_container", "div.news-module")?
            .set_default("crawl.region_anchor", "a.ckeditor-style-5")?
            .set_default("crawl.document_anchor", "a.ckeditor-style-4")?
            // Default HTTP settings
            .set_default("http.user_agent", "Mozilla/5.0 (compatible; nfz-downloader/0.1)")?
            .set_default("http.timeout_secs", 30)?
            // Default storage settings
            .set_default("storage.bucket", "coronavirus.institutions.data")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("NFZ").separator("__"));

        builder.build()?.try_deserialize()
    }
}
