// ABOUTME: Unified error types re-exported from recipe-core
// ABOUTME: Keeps `crate::errors::*` paths stable for handlers, services and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

pub use recipe_core::errors::*;
