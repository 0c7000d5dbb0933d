// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, info_span, Instrument};
use url::Url;

use crate::config::settings::{CrawlSettings, HttpSettings};
use crate::domain::models::task::{CrawlTarget, DownloadTask};
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::extraction_service::{
    extract_links, AnchorLink, ExtractionError, LinkSelector,
};
use crate::engines::fetch_engine::{FetchEngine, FetchError};
use crate::workers::transfer_worker::TransferWorker;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid selector in configuration: {0}")]
    Selector(#[from] ExtractionError),
    #[error("invalid URL in configuration: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] FetchError),
    #[error("failed to fetch entry page: {0}")]
    EntryFetch(#[source] FetchError),
}

/// Counters for one complete run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Region pages visited
    pub regions: usize,
    /// Uploads that completed
    pub transferred: usize,
    /// Region fetches or transfers that failed
    pub failed: usize,
    /// Anchors skipped over missing text or link target
    pub skipped: usize,
}

/// The depth-2 walk: entry page → region pages → document transfers.
///
/// Strictly sequential; every fetch and upload completes before the next
/// begins.
pub struct Crawler {
    engine: FetchEngine,
    worker: TransferWorker,
    entry_url: Url,
    base_url: Url,
    region_selector: LinkSelector,
    document_selector: LinkSelector,
}

impl Crawler {
    pub fn new(
        crawl: &CrawlSettings,
        http: &HttpSettings,
        storage: Arc<dyn StorageRepository>,
    ) -> Result<Self, CrawlError> {
        let engine = FetchEngine::new(http).map_err(CrawlError::Client)?;
        let worker = TransferWorker::new(engine.client().clone(), storage);
        Ok(Self {
            worker,
            entry_url: Url::parse(&crawl.entry_url)?,
            base_url: Url::parse(&crawl.base_url)?,
            region_selector: LinkSelector::new(
                Some(&crawl.region_container),
                &crawl.region_anchor,
            )?,
            document_selector: LinkSelector::new(None, &crawl.document_anchor)?,
            engine,
        })
    }

    /// Run the walk to completion.
    ///
    /// Only the entry fetch is fatal; every other failure is logged and
    /// the walk moves on to the next sibling item.
    pub async fn run(&self) -> Result<CrawlSummary, CrawlError> {
        let page = self
            .engine
            .fetch_page(&self.entry_url)
            .await
            .map_err(CrawlError::EntryFetch)?;

        let mut summary = CrawlSummary::default();
        for anchor in extract_links(&page, &self.region_selector) {
            match self.region_target(&anchor) {
                Some(target) => {
                    let span = info_span!("region", label = %target.label);
                    self.visit_region(&target, &mut summary).instrument(span).await;
                }
                None => {
                    error!("failed to acquire region data");
                    summary.skipped += 1;
                }
            }
        }
        Ok(summary)
    }

    /// A region anchor with empty text or an unusable link target is a
    /// data-quality error; no fetch is attempted for it.
    fn region_target(&self, anchor: &AnchorLink) -> Option<CrawlTarget> {
        if anchor.label.is_empty() || anchor.href.is_empty() {
            return None;
        }
        let url = self.base_url.join(&anchor.href).ok()?;
        Some(CrawlTarget {
            label: anchor.label.clone(),
            url,
        })
    }

    async fn visit_region(&self, target: &CrawlTarget, summary: &mut CrawlSummary) {
        summary.regions += 1;
        let page = match self.engine.fetch_page(&target.url).await {
            Ok(page) => page,
            Err(err) => {
                error!(error = %err, "failed to enter region page");
                summary.failed += 1;
                return;
            }
        };

        // The index advances for skipped anchors too, so keys may have gaps
        for (index, anchor) in extract_links(&page, &self.document_selector)
            .iter()
            .enumerate()
        {
            if anchor.href.is_empty() {
                error!(index, "failed to acquire document url");
                summary.skipped += 1;
                continue;
            }
            let source = match self.base_url.join(&anchor.href) {
                Ok(url) => url,
                Err(err) => {
                    error!(index, href = %anchor.href, error = %err, "unusable document url");
                    summary.skipped += 1;
                    continue;
                }
            };

            let task = DownloadTask::new(&target.label, index, source);
            match self.worker.transfer(&task).await {
                Ok(result) => {
                    info!(key = %task.key, location = %result.location, "document uploaded");
                    summary.transferred += 1;
                }
                Err(err) => {
                    error!(key = %task.key, error = %err, "failed to download document");
                    summary.failed += 1;
                }
            }
        }
    }
}
