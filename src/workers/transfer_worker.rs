// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use reqwest::{Body, Client};
use thiserror::Error;
use tracing::debug;

use crate::domain::models::task::{DownloadTask, UploadResult};
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// Transfer error type
#[derive(Error, Debug)]
pub enum TransferError {
    /// Source fetch failed
    #[error("failed to fetch source: {0}")]
    Fetch(#[from] reqwest::Error),
    /// Remote write failed
    #[error("failed to write to storage: {0}")]
    Storage(#[from] StorageError),
}

/// Transfer worker
///
/// Moves one document from its source URL into object storage. The
/// response body is piped into the storage write; the payload is only
/// buffered when the source does not declare a content length, because
/// the S3 put needs a known size to stream.
pub struct TransferWorker {
    client: Client,
    storage: Arc<dyn StorageRepository>,
}

impl TransferWorker {
    pub fn new(client: Client, storage: Arc<dyn StorageRepository>) -> Self {
        Self { client, storage }
    }

    pub async fn transfer(&self, task: &DownloadTask) -> Result<UploadResult, TransferError> {
        let response = self
            .client
            .get(task.source.clone())
            .send()
            .await?
            .error_for_status()?;

        let content_length = response.content_length();
        let body = match content_length {
            Some(_) => ByteStream::from_body_1_x(Body::wrap_stream(response.bytes_stream())),
            None => ByteStream::from(response.bytes().await?.to_vec()),
        };

        let location = self
            .storage
            .put_stream(&task.key, content_length, body)
            .await?;
        debug!(key = %task.key, %location, "transfer complete");
        Ok(UploadResult { location })
    }
}
