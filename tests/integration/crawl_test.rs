// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nfz_downloader::application::crawler::{CrawlError, CrawlSummary, Crawler};
use nfz_downloader::infrastructure::storage::InMemoryStorage;

use crate::helpers;

const PDF_BYTES: &[u8] = b"%PDF-1.4 fake body";

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

fn pdf_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(PDF_BYTES.to_vec(), "application/pdf")
}

async fn run_crawler(server: &MockServer, storage: InMemoryStorage) -> Result<CrawlSummary, CrawlError> {
    let crawler = Crawler::new(
        &helpers::crawl_settings(&server.uri()),
        &helpers::http_settings(),
        Arc::new(storage),
    )?;
    crawler.run().await
}

#[tokio::test]
async fn walks_regions_and_uploads_each_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entry.html"))
        .respond_with(html_response(helpers::entry_page(&[
            ("Mazowieckie", "/regionA.html"),
            ("Śląskie", "/regionB.html"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regionA.html"))
        .respond_with(html_response(helpers::region_page(&["/docs/x.pdf"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regionB.html"))
        .respond_with(html_response(helpers::region_page(&[])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/x.pdf"))
        .respond_with(pdf_response())
        .expect(1)
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let summary = run_crawler(&server, storage.clone()).await.unwrap();

    assert_eq!(summary.regions, 2);
    assert_eq!(summary.transferred, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 0);

    assert_eq!(storage.keys().await, vec!["Mazowieckie_0.pdf".to_string()]);
    assert_eq!(storage.get("Mazowieckie_0.pdf").await.unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn bad_region_anchors_are_skipped_without_a_fetch() {
    let server = MockServer::start().await;

    // One anchor without text, one without a target, one well-formed
    Mock::given(method("GET"))
        .and(path("/entry.html"))
        .respond_with(html_response(helpers::entry_page(&[
            ("", "/ghost.html"),
            ("Lubelskie", ""),
            ("Mazowieckie", "/regionA.html"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regionA.html"))
        .respond_with(html_response(helpers::region_page(&[])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ghost.html"))
        .respond_with(html_response(String::new()))
        .expect(0)
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let summary = run_crawler(&server, storage.clone()).await.unwrap();

    assert_eq!(summary.regions, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);
    assert!(storage.keys().await.is_empty());
}

#[tokio::test]
async fn skipped_document_anchor_still_advances_the_key_index() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entry.html"))
        .respond_with(html_response(helpers::entry_page(&[(
            "Mazowieckie",
            "/regionA.html",
        )])))
        .mount(&server)
        .await;
    // First anchor has no target, second is fine
    Mock::given(method("GET"))
        .and(path("/regionA.html"))
        .respond_with(html_response(helpers::region_page(&["", "/docs/y.pdf"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/y.pdf"))
        .respond_with(pdf_response())
        .expect(1)
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let summary = run_crawler(&server, storage.clone()).await.unwrap();

    assert_eq!(summary.transferred, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(storage.keys().await, vec!["Mazowieckie_1.pdf".to_string()]);
}

#[tokio::test]
async fn failed_transfer_does_not_abort_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entry.html"))
        .respond_with(html_response(helpers::entry_page(&[(
            "Mazowieckie",
            "/regionA.html",
        )])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regionA.html"))
        .respond_with(html_response(helpers::region_page(&[
            "/docs/a.pdf",
            "/docs/b.pdf",
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/a.pdf"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/b.pdf"))
        .respond_with(pdf_response())
        .expect(1)
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let summary = run_crawler(&server, storage.clone()).await.unwrap();

    assert_eq!(summary.transferred, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(storage.keys().await, vec!["Mazowieckie_1.pdf".to_string()]);
}

#[tokio::test]
async fn failed_region_fetch_does_not_abort_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entry.html"))
        .respond_with(html_response(helpers::entry_page(&[
            ("Mazowieckie", "/regionA.html"),
            ("Śląskie", "/regionB.html"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regionA.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regionB.html"))
        .respond_with(html_response(helpers::region_page(&["/docs/z.pdf"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/z.pdf"))
        .respond_with(pdf_response())
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let summary = run_crawler(&server, storage.clone()).await.unwrap();

    assert_eq!(summary.regions, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.transferred, 1);
    assert_eq!(storage.keys().await, vec!["Śląskie_0.pdf".to_string()]);
}

#[tokio::test]
async fn entry_fetch_failure_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entry.html"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let storage = InMemoryStorage::new();
    let err = run_crawler(&server, storage.clone()).await.unwrap_err();

    assert!(matches!(err, CrawlError::EntryFetch(_)));
    assert!(storage.keys().await.is_empty());
}
