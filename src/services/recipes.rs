// ABOUTME: Recipe repository service translating requests into store calls
// ABOUTME: Maps typed store failures to localized AppError values and logs the underlying cause
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::constants::messages;
use crate::database_plugins::{RecipeStore, StoreError};
use crate::errors::{AppError, AppResult};
use recipe_core::models::{CreateRecipeRequest, Recipe};

/// Recipe operations over an injected store
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    /// Create a service over the given store
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Persist a new recipe
    ///
    /// Only presence of `slug` and `title` is checked. A missing field and
    /// every store failure, duplicate slug included, are reported with the
    /// same generic message.
    pub async fn create(&self, request: CreateRecipeRequest) -> AppResult<Recipe> {
        let missing = if request.slug.trim().is_empty() {
            Some("slug")
        } else if request.title.trim().is_empty() {
            Some("title")
        } else {
            None
        };
        if let Some(field) = missing {
            warn!(field, "Recipe create rejected: required field is blank");
            return Err(AppError::database(messages::CREATE_FAILED));
        }

        match self.store.create(&request).await {
            Ok(recipe) => {
                info!(id = %recipe.id, slug = %recipe.slug, "Recipe created");
                Ok(recipe)
            }
            Err(e @ StoreError::Conflict { .. }) => {
                warn!(slug = %request.slug, error = %e, "Recipe create rejected by store");
                Err(AppError::database(messages::CREATE_FAILED).with_source(e))
            }
            Err(e) => {
                error!(slug = %request.slug, error = %e, "Recipe create failed");
                Err(AppError::database(messages::CREATE_FAILED).with_source(e))
            }
        }
    }

    /// Delete the recipe with `slug`, returning its id
    ///
    /// Checks existence first so a missing record is reported as not found
    /// rather than as a failure. A record removed between the check and the
    /// delete is also reported as not found.
    pub async fn delete_by_slug(&self, slug: &str) -> AppResult<Uuid> {
        info!(slug, "Delete requested");

        if slug.trim().is_empty() {
            warn!("Delete rejected: blank slug");
            return Err(AppError::invalid_input(messages::INVALID_SLUG));
        }

        let existing = self.store.find_by_slug(slug).await.map_err(|e| {
            error!(slug, error = %e, "Existence check before delete failed");
            AppError::database(messages::DELETE_FAILED).with_source(e)
        })?;

        let Some(existing) = existing else {
            warn!(slug, "Delete target not found");
            return Err(AppError::not_found(messages::RECIPE_NOT_FOUND));
        };
        debug!(slug, id = %existing.id, "Delete target found");

        match self.store.delete_by_slug(slug).await {
            Ok(id) => {
                info!(slug, %id, "Recipe deleted");
                Ok(id)
            }
            Err(StoreError::NotFound) => {
                warn!(slug, "Recipe disappeared before delete");
                Err(AppError::not_found(messages::RECIPE_NOT_FOUND))
            }
            Err(e) => {
                error!(slug, error = %e, "Recipe delete failed");
                Err(AppError::database(messages::DELETE_FAILED).with_source(e))
            }
        }
    }

    /// All recipes, newest first
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        self.store.list_newest_first().await.map_err(|e| {
            error!(error = %e, "Failed to list recipes");
            AppError::database(messages::FETCH_FAILED).with_source(e)
        })
    }

    /// Recipe by slug, `None` when absent
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Recipe>> {
        self.store.find_by_slug(slug).await.map_err(|e| {
            error!(slug, error = %e, "Failed to fetch recipe");
            AppError::database(messages::FETCH_FAILED).with_source(e)
        })
    }

    /// Every slug currently stored
    pub async fn slugs(&self) -> AppResult<Vec<String>> {
        self.store.list_slugs().await.map_err(|e| {
            error!(error = %e, "Failed to enumerate recipe slugs");
            AppError::database(messages::FETCH_FAILED).with_source(e)
        })
    }

    /// Number of stored recipes
    pub async fn count(&self) -> AppResult<u64> {
        self.store
            .count()
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))
    }
}
