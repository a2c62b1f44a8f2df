// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides transport-agnostic services shared by the JSON API, pages, and tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Domain service layer
//!
//! Route handlers and page generators call into these services so the same
//! validation and error mapping applies regardless of the entry point.

/// Recipe repository: create, delete by slug, and read paths
pub mod recipes;
