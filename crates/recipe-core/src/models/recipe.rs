// ABOUTME: Recipe record and its JSON transport representation
// ABOUTME: Timestamps cross every rendering/JSON boundary as ISO-8601 strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format a store timestamp for transport (`2025-01-01T00:00:00.000Z`)
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A persisted recipe as returned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Store-generated identifier, immutable
    pub id: Uuid,
    /// Client-supplied unique key used for every external lookup
    pub slug: String,
    /// Display title
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Ingredients in display order
    pub ingredients: Vec<String>,
    /// Steps in execution order
    pub instructions: Vec<String>,
    /// Assigned by the store on insert
    pub created_at: DateTime<Utc>,
    /// Assigned by the store on insert/update
    pub updated_at: DateTime<Utc>,
}

/// Transport shape of a recipe (API responses and page props)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedRecipe {
    /// Store-generated identifier
    pub id: String,
    /// Unique key
    pub slug: String,
    /// Display title
    pub title: String,
    /// Optional description, `null` when absent
    pub description: Option<String>,
    /// Ingredients in display order
    pub ingredients: Vec<String>,
    /// Steps in execution order
    pub instructions: Vec<String>,
    /// ISO-8601 creation timestamp
    pub created_at: String,
    /// ISO-8601 update timestamp
    pub updated_at: String,
}

impl From<&Recipe> for SerializedRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            slug: recipe.slug.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            created_at: format_timestamp(&recipe.created_at),
            updated_at: format_timestamp(&recipe.updated_at),
        }
    }
}

impl From<Recipe> for SerializedRecipe {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            created_at: format_timestamp(&recipe.created_at),
            updated_at: format_timestamp(&recipe.updated_at),
            slug: recipe.slug,
            title: recipe.title,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

/// Creation payload (`POST /api/recipes`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    /// Unique key supplied by the creator
    pub slug: String,
    /// Display title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Steps in execution order
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Body of a successful `DELETE /api/recipes/{slug}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecipeResponse {
    /// Confirmation message
    pub message: String,
    /// Identifier of the removed record
    pub deleted_id: String,
}
