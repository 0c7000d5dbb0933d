// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use nfz_downloader::config::settings::{CrawlSettings, HttpSettings};

/// Entry page fixture: one `(label, href)` region anchor per entry,
/// inside the container section the crawler is configured for.
pub fn entry_page(regions: &[(&str, &str)]) -> String {
    let anchors: String = regions
        .iter()
        .map(|(label, href)| {
            format!(r#"<a class="ckeditor-style-5" href="{href}">{label}</a>"#)
        })
        .collect();
    format!(
        r#"<html><body><div class="news-module">{anchors}</div><a class="ckeditor-style-5" href="/decoy.html">Decoy</a></body></html>"#
    )
}

/// Region page fixture: one document anchor per href.
pub fn region_page(hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a class="ckeditor-style-4" href="{href}">Wykaz placówek</a>"#))
        .collect();
    format!(r#"<html><body>{anchors}</body></html>"#)
}

/// Crawl settings pointed at a mock server, with the production
/// selectors.
pub fn crawl_settings(server_uri: &str) -> CrawlSettings {
    CrawlSettings {
        entry_url: format!("{server_uri}/entry.html"),
        base_url: server_uri.to_string(),
        region_container: "div.news-module".to_string(),
        region_anchor: "a.ckeditor-style-5".to_string(),
        document_anchor: "a.ckeditor-style-4".to_string(),
    }
}

pub fn http_settings() -> HttpSettings {
    HttpSettings {
        user_agent: "nfz-downloader-tests".to_string(),
        timeout_secs: 10,
    }
}
