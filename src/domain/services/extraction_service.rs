// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Extraction error type
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Selector string could not be parsed
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}

/// An anchor pulled out of a page: its visible text and link target,
/// both exactly as found in the markup. Either may be empty; callers
/// decide what a missing value means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLink {
    pub label: String,
    pub href: String,
}

/// Precompiled anchor selector, optionally scoped to a container section.
#[derive(Debug, Clone)]
pub struct LinkSelector {
    container: Option<Selector>,
    anchor: Selector,
}

impl LinkSelector {
    pub fn new(container: Option<&str>, anchor: &str) -> Result<Self, ExtractionError> {
        let container = container
            .map(|c| {
                Selector::parse(c).map_err(|_| ExtractionError::InvalidSelector(c.to_string()))
            })
            .transpose()?;
        let anchor = Selector::parse(anchor)
            .map_err(|_| ExtractionError::InvalidSelector(anchor.to_string()))?;
        Ok(Self { container, anchor })
    }
}

/// Extract matching anchors from `html` in document order.
///
/// The document is parsed locally; `Html` is not Send, so it must never
/// be held across an await point in the callers.
pub fn extract_links(html: &str, selector: &LinkSelector) -> Vec<AnchorLink> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    match &selector.container {
        Some(container) => {
            for scope in document.select(container) {
                for element in scope.select(&selector.anchor) {
                    links.push(anchor_link(element));
                }
            }
        }
        None => {
            for element in document.select(&selector.anchor) {
                links.push(anchor_link(element));
            }
        }
    }
    links
}

fn anchor_link(element: ElementRef<'_>) -> AnchorLink {
    let label = element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();
    let href = element.value().attr("href").unwrap_or_default().to_string();
    AnchorLink { label, href }
}
