// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory stores, server resources, sample payloads, and a failing store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_catalog`

use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use recipe_catalog::{
    config::environment::{DatabaseUrl, PagesConfig, ServerConfig},
    database_plugins::{RecipeStore, SqliteRecipeStore, StoreError, StoreResult},
    resources::ServerResources,
    services::recipes::RecipeService,
};
use recipe_core::models::{CreateRecipeRequest, Recipe};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh in-memory store with the schema applied
pub async fn create_test_store() -> Arc<SqliteRecipeStore> {
    init_test_logging();
    Arc::new(
        SqliteRecipeStore::connect(&DatabaseUrl::Memory)
            .await
            .expect("Failed to open in-memory store"),
    )
}

/// Service over a fresh in-memory store
pub async fn create_test_service() -> RecipeService {
    RecipeService::new(create_test_store().await)
}

/// Configuration for tests: in-memory store, no startup generation
pub fn test_config(revalidate: Duration) -> ServerConfig {
    ServerConfig {
        database_url: DatabaseUrl::Memory,
        pages: PagesConfig {
            revalidate_secs: revalidate.as_secs(),
            prerender_on_startup: false,
            ..PagesConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Server resources over `store` with the default 60 second window
pub fn create_resources_with_store(store: Arc<dyn RecipeStore>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        store,
        Arc::new(test_config(Duration::from_secs(60))),
    ))
}

/// Server resources over a fresh in-memory store
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_resources_with_store(create_test_store().await)
}

/// A valid creation payload for `slug`
pub fn sample_request(slug: &str) -> CreateRecipeRequest {
    CreateRecipeRequest {
        slug: slug.to_owned(),
        title: "Soup".to_owned(),
        description: Some("毎日の食卓に".to_owned()),
        ingredients: vec!["tofu".to_owned(), "wakame".to_owned()],
        instructions: vec!["boil".to_owned(), "add miso".to_owned()],
    }
}

/// How a [`FailingStore`] misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Every operation fails with `StoreError::Other`
    Unavailable,
    /// Lookups find the record but the delete removes nothing
    VanishesBeforeDelete,
    /// Lookups succeed, the delete itself fails
    DeleteFails,
    /// Creates report a unique-constraint conflict
    Conflict,
}

/// Store double that fails in a scripted way
pub struct FailingStore {
    pub mode: FailureMode,
}

impl FailingStore {
    pub fn new(mode: FailureMode) -> Arc<Self> {
        Arc::new(Self { mode })
    }

    fn unavailable() -> StoreError {
        StoreError::Other("database is locked".to_owned())
    }

    fn phantom(slug: &str) -> Recipe {
        let now = Utc::now();
        Recipe {
            id: Uuid::new_v4(),
            slug: slug.to_owned(),
            title: "Phantom".to_owned(),
            description: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl RecipeStore for FailingStore {
    async fn create(&self, _request: &CreateRecipeRequest) -> StoreResult<Recipe> {
        match self.mode {
            FailureMode::Conflict => Err(StoreError::Conflict {
                field: "slug".to_owned(),
            }),
            _ => Err(Self::unavailable()),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Recipe>> {
        match self.mode {
            FailureMode::Unavailable => Err(Self::unavailable()),
            _ => Ok(Some(Self::phantom(slug))),
        }
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<Recipe>> {
        Err(Self::unavailable())
    }

    async fn list_slugs(&self) -> StoreResult<Vec<String>> {
        Err(Self::unavailable())
    }

    async fn delete_by_slug(&self, _slug: &str) -> StoreResult<Uuid> {
        match self.mode {
            FailureMode::VanishesBeforeDelete => Err(StoreError::NotFound),
            _ => Err(Self::unavailable()),
        }
    }

    async fn count(&self) -> StoreResult<u64> {
        Err(Self::unavailable())
    }
}
