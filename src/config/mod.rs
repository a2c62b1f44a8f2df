// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration, parsed once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Configuration module for the Recipe Catalog
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;
