// ABOUTME: Main library entry point for the Recipe Catalog
// ABOUTME: Store-backed recipe list and detail pages, creation form, and create/delete JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![deny(unsafe_code)]

//! # Recipe Catalog
//!
//! A small recipe catalog served over HTTP: a list page, a detail page per
//! recipe, a creation form, and two JSON endpoints (create, delete by slug).
//!
//! ## Architecture
//!
//! - **Store**: [`database_plugins::RecipeStore`] with a `SQLite` implementation
//! - **Service**: [`services::recipes::RecipeService`] maps store failures to HTTP-facing errors
//! - **Pages**: props generation with a revalidating snapshot cache ([`pages`])
//! - **Routes**: axum handlers for the API, pages, and health checks ([`routes`])
//! - **Client**: reqwest client plus local list state for delete reconciliation ([`client`])
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use recipe_catalog::config::environment::ServerConfig;
//! use recipe_catalog::database_plugins::SqliteRecipeStore;
//! use recipe_catalog::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = SqliteRecipeStore::connect(&config.database_url).await?;
//!     let addr = config.bind_address().parse()?;
//!     let resources = Arc::new(ServerResources::new(Arc::new(store), Arc::new(config)));
//!     recipe_catalog::server::run(resources, addr).await
//! }
//! ```

/// HTTP client, list state, and delete confirmation
pub mod client;

/// Environment-based configuration
pub mod config;

/// Application constants: defaults, env var names, routes, messages
pub mod constants;

/// Recipe store trait and `SQLite` implementation
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// Logging setup
pub mod logging;

/// Page props generation, snapshot cache, and HTML rendering
pub mod pages;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Domain services
pub mod services;
