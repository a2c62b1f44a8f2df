// ABOUTME: Core types for the Recipe Catalog
// ABOUTME: Foundation crate with error handling, the recipe record and text-area parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing the shared types of the Recipe Catalog. This
//! crate is designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: The `Recipe` record, its transport shape and request payloads
//! - **input**: One-entry-per-line text-area encoding for ingredients and steps

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Recipe record, transport shape and request/response payloads
pub mod models;

/// Text-area line parsing shared by the creation form and the CLI
pub mod input;
