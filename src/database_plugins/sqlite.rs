// ABOUTME: SQLite implementation of the recipe store using a sqlx connection pool
// ABOUTME: Owns schema migration, id/timestamp assignment, and JSON encoding of ordered sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! `SQLite` recipe store

use super::{RecipeStore, StoreError, StoreResult};
use crate::config::environment::DatabaseUrl;
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use recipe_core::models::{format_timestamp, CreateRecipeRequest, Recipe};
use sqlx::{
    sqlite::{SqlitePoolOptions, SqliteRow},
    Row, SqlitePool,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Recipe store backed by a `SQLite` database
#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

impl SqliteRecipeStore {
    /// Wrap an existing pool (schema is not touched)
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database, creating the file and its directory if needed, and migrate
    ///
    /// In-memory databases use a single long-lived connection so every caller sees the same data.
    pub async fn connect(database_url: &DatabaseUrl) -> StoreResult<Self> {
        let pool = match database_url {
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(&database_url.to_connection_string())
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        StoreError::Other(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                SqlitePool::connect(&format!("{}?mode=rwc", database_url.to_connection_string()))
                    .await?
            }
        };

        let store = Self::new(pool);
        store.migrate().await?;
        info!(database = %database_url, "Recipe store ready");
        Ok(store)
    }

    /// Create the schema if it does not exist
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                slug TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                description TEXT,
                ingredients TEXT NOT NULL DEFAULT '[]',
                instructions TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn create(&self, request: &CreateRecipeRequest) -> StoreResult<Recipe> {
        let id = Uuid::new_v4();
        // Millisecond precision so the stored text and the returned record agree
        let now = Utc::now().trunc_subsecs(3);
        let timestamp = format_timestamp(&now);
        let ingredients_json = serde_json::to_string(&request.ingredients)?;
        let instructions_json = serde_json::to_string(&request.instructions)?;

        sqlx::query(
            r"
            INSERT INTO recipes (
                id, slug, title, description, ingredients, instructions, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            ",
        )
        .bind(id.to_string())
        .bind(&request.slug)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&ingredients_json)
        .bind(&instructions_json)
        .bind(&timestamp)
        .execute(&self.pool)
        .await?;

        debug!(%id, slug = %request.slug, "Inserted recipe");

        Ok(Recipe {
            id,
            slug: request.slug.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            ingredients: request.ingredients.clone(),
            instructions: request.instructions.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, slug, title, description, ingredients, instructions, created_at, updated_at
            FROM recipes
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<Recipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, slug, title, description, ingredients, instructions, created_at, updated_at
            FROM recipes
            ORDER BY created_at DESC, rowid DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_recipe).collect()
    }

    async fn list_slugs(&self) -> StoreResult<Vec<String>> {
        let rows = sqlx::query("SELECT slug FROM recipes ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|r| r.get("slug")).collect())
    }

    async fn delete_by_slug(&self, slug: &str) -> StoreResult<Uuid> {
        let row = sqlx::query("DELETE FROM recipes WHERE slug = $1 RETURNING id")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        let row = row.ok_or(StoreError::NotFound)?;
        let id: String = row.get("id");
        parse_id(&id)
    }

    async fn count(&self) -> StoreResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.get("count");
        u64::try_from(count).map_err(|e| StoreError::Other(format!("Invalid row count: {e}")))
    }
}

fn parse_id(value: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| StoreError::Other(format!("Invalid UUID: {e}")))
}

fn parse_timestamp(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Other(format!("Invalid timestamp '{value}': {e}")))
}

fn row_to_recipe(row: &SqliteRow) -> StoreResult<Recipe> {
    let id: String = row.get("id");
    let ingredients_json: String = row.get("ingredients");
    let instructions_json: String = row.get("instructions");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(Recipe {
        id: parse_id(&id)?,
        slug: row.get("slug"),
        title: row.get("title"),
        description: row.get("description"),
        ingredients: serde_json::from_str(&ingredients_json)?,
        instructions: serde_json::from_str(&instructions_json)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
