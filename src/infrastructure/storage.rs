// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::ByteStream;
use tokio::sync::RwLock;

use crate::config::settings::StorageSettings;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// S3 object storage implementation
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    /// Build the client from the shared AWS config. An explicit endpoint
    /// switches to path-style addressing for S3-compatible services.
    pub fn new(sdk_config: &SdkConfig, settings: &StorageSettings) -> Self {
        let mut config_builder = aws_sdk_s3::config::Builder::from(sdk_config);

        if let Some(ep) = &settings.endpoint {
            config_builder = config_builder.endpoint_url(ep).force_path_style(true);
        }

        let client = aws_sdk_s3::Client::from_conf(config_builder.build());

        Self {
            client,
            bucket: settings.bucket.clone(),
        }
    }
}

#[async_trait]
impl StorageRepository for S3Storage {
    async fn put_stream(
        &self,
        key: &str,
        content_length: Option<u64>,
        body: ByteStream,
    ) -> Result<String, StorageError> {
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body);
        if let Some(length) = content_length {
            let length = i64::try_from(length).map_err(|_| {
                StorageError::Other(format!("content length {} out of range", length))
            })?;
            request = request.content_length(length);
        }
        request
            .send()
            .await
            .map_err(|e| StorageError::Other(e.to_string()))?;

        Ok(format!("s3://{}/{}", self.bucket, key))
    }
}

/// In-memory storage implementation (for tests)
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.data.read().await.get(key).cloned()
    }

    /// Stored keys, sorted for stable assertions.
    pub async fn keys(&self) -> Vec<String> {
        let map = self.data.read().await;
        let mut keys: Vec<_> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn put_stream(
        &self,
        key: &str,
        _content_length: Option<u64>,
        body: ByteStream,
    ) -> Result<String, StorageError> {
        let data = body
            .collect()
            .await
            .map_err(|e| StorageError::Other(e.to_string()))?
            .into_bytes();
        self.data.write().await.insert(key.to_string(), data.to_vec());
        Ok(format!("memory://{}", key))
    }
}
