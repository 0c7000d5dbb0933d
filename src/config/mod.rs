// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module
///
/// Handles crawl, HTTP and storage settings
pub mod settings;
