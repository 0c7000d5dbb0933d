// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// A region page discovered on the entry page. Consumed immediately by
/// the next-level fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    /// Human-readable region label, taken from the anchor text
    pub label: String,
    /// Resolved region page URL
    pub url: Url,
}

/// One PDF to move into object storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    /// Destination object key
    pub key: String,
    /// Fully-qualified source URL
    pub source: Url,
}

impl DownloadTask {
    pub fn new(label: &str, index: usize, source: Url) -> Self {
        Self {
            key: object_key(label, index),
            source,
        }
    }
}

/// Remote location reported by a completed upload. Used for a log line,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub location: String,
}

/// Object key for the `index`-th document anchor on `label`'s page.
///
/// The index advances for every anchor encountered, including skipped
/// ones, so generated keys can have gaps. Uniqueness holds only within
/// one run.
pub fn object_key(label: &str, index: usize) -> String {
    format!("{}_{}.pdf", label, index)
}
