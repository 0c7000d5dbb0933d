// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application layer
///
/// Orchestrates one complete crawl run
pub mod application;

/// Configuration module
///
/// Handles application settings and environment variables
pub mod config;

/// Domain module
///
/// Core entities, link extraction and the storage interface
pub mod domain;

/// Engine module
///
/// HTTP page fetching
pub mod engines;

/// Infrastructure module
///
/// Object storage implementations
pub mod infrastructure;

/// Utility module
///
/// Telemetry setup
pub mod utils;

/// Worker module
///
/// Moves documents from their source URLs into storage
pub mod workers;
