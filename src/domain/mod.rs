// Copyright (c) 2025 nfz-downloader contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain layer module
///
/// Core business logic of the downloader:
/// - models: the transient entities one run works with
/// - repositories: the storage abstraction
/// - services: link extraction from fetched markup
pub mod models;
pub mod repositories;
pub mod services;
