// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use nfz_downloader::application::crawler::Crawler;
use nfz_downloader::config::settings::{self, Settings};
use nfz_downloader::infrastructure::storage::S3Storage;
use nfz_downloader::utils::telemetry;
use tracing::info;

/// Application entry point: crawl the announcement page and move every
/// discovered PDF into object storage.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting nfz-downloader...");

    // The region must be present before any network activity happens
    settings::require_aws_region()?;

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build the storage client
    let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let storage = Arc::new(S3Storage::new(&sdk_config, &settings.storage));
    info!(bucket = %settings.storage.bucket, "Storage client initialized");

    // 4. Run the crawl; entry-page failure is the only fatal crawl error
    let crawler = Crawler::new(&settings.crawl, &settings.http, storage)?;
    let summary = crawler.run().await?;
    info!(
        regions = summary.regions,
        transferred = summary.transferred,
        failed = summary.failed,
        skipped = summary.skipped,
        "Crawl finished"
    );

    Ok(())
}
