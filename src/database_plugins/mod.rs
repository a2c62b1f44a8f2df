// ABOUTME: Store abstraction for recipe persistence with a typed error taxonomy
// ABOUTME: Classifies sqlx failures once at the store boundary into NotFound, Conflict, or Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use async_trait::async_trait;
use recipe_core::models::{CreateRecipeRequest, Recipe};
use thiserror::Error;
use uuid::Uuid;

pub mod sqlite;

pub use sqlite::SqliteRecipeStore;

/// Failure reported by a [`RecipeStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the key at the time of the operation
    #[error("record not found")]
    NotFound,
    /// A unique constraint rejected the write
    #[error("unique constraint violated on {field}")]
    Conflict {
        /// Column (or constraint) that rejected the write
        field: String,
    },
    /// Any other store failure (connection, decode, migration)
    #[error("store error: {0}")]
    Other(String),
}

impl StoreError {
    /// Classify a sqlx error
    #[must_use]
    pub fn from_sqlx(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict {
                field: conflicting_field(db.message()),
            },
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::from_sqlx(&error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Other(format!("Failed to (de)serialize column: {error}"))
    }
}

/// Extract the column name from a `SQLite` "UNIQUE constraint failed: table.column" message
fn conflicting_field(message: &str) -> String {
    message
        .rsplit_once(": ")
        .map(|(_, target)| target)
        .and_then(|target| target.rsplit('.').next())
        .unwrap_or("unknown")
        .to_owned()
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for recipes
///
/// Implementations own id and timestamp assignment and enforce slug uniqueness.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a new recipe; the store assigns `id`, `created_at` and `updated_at`
    async fn create(&self, request: &CreateRecipeRequest) -> StoreResult<Recipe>;

    /// Look up a recipe by slug
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Recipe>>;

    /// All recipes, newest first
    async fn list_newest_first(&self) -> StoreResult<Vec<Recipe>>;

    /// All slugs currently stored
    async fn list_slugs(&self) -> StoreResult<Vec<String>>;

    /// Delete by slug, returning the removed record's id
    ///
    /// Returns [`StoreError::NotFound`] when no row was removed.
    async fn delete_by_slug(&self, slug: &str) -> StoreResult<Uuid>;

    /// Number of stored recipes
    async fn count(&self) -> StoreResult<u64>;
}
