// ABOUTME: Route module organization for the Recipe Catalog HTTP endpoints
// ABOUTME: Groups routes by surface: JSON API, server-rendered pages, and health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Route module for the Recipe Catalog
//!
//! Each module contains route definitions and thin handlers that delegate to
//! the recipe service and page generators.

/// Health check and readiness routes
pub mod health;
/// Server-rendered pages and page-data JSON
pub mod pages;
/// Recipe JSON API (create, delete)
pub mod recipes;

pub use health::HealthRoutes;
pub use pages::PageRoutes;
pub use recipes::RecipeApiRoutes;
