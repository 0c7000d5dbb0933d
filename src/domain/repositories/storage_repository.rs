// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;

/// Storage error type
#[derive(Error, Debug)]
pub enum StorageError {
    /// Storage error
    #[error("Storage error: {0}")]
    Other(String),
}

/// Write-side interface to the destination namespace.
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Store `body` under `key`, returning the remote location.
    ///
    /// The body is handed over as a stream so a transfer never buffers
    /// the whole payload; `content_length` is forwarded when the source
    /// declared one.
    async fn put_stream(
        &self,
        key: &str,
        content_length: Option<u64>,
        body: ByteStream,
    ) -> Result<String, StorageError>;
}
