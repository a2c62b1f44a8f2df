// ABOUTME: Local copy of the recipe list with per-row deleting flags and an inline error message
// ABOUTME: A row cannot be deleted twice concurrently; failures leave the row in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use recipe_core::models::{DeleteRecipeResponse, SerializedRecipe};

use super::ClientError;
use crate::constants::messages;

/// One displayed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    /// The recipe as fetched at load time
    pub recipe: SerializedRecipe,
    /// A delete request for this row is in flight (its button is disabled)
    pub deleting: bool,
}

/// Token for an in-flight delete, returned by [`RecipeListState::begin_delete`]
#[derive(Debug, PartialEq, Eq)]
#[must_use = "pass the pending delete to finish_delete once the call completes"]
pub struct PendingDelete {
    slug: String,
}

impl PendingDelete {
    /// Slug being deleted
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Client-side list state
#[derive(Debug, Clone, Default)]
pub struct RecipeListState {
    rows: Vec<RecipeRow>,
    error: Option<String>,
}

impl RecipeListState {
    /// Start from the list fetched at page load
    #[must_use]
    pub fn new(recipes: Vec<SerializedRecipe>) -> Self {
        Self {
            rows: recipes
                .into_iter()
                .map(|recipe| RecipeRow {
                    recipe,
                    deleting: false,
                })
                .collect(),
            error: None,
        }
    }

    /// Rows in display order
    #[must_use]
    pub fn rows(&self) -> &[RecipeRow] {
        &self.rows
    }

    /// Slugs in display order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.recipe.slug.as_str())
    }

    /// Inline error from the most recent failed delete
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Title of the listed recipe with `slug`
    #[must_use]
    pub fn title_of(&self, slug: &str) -> Option<&str> {
        self.row(slug).map(|row| row.recipe.title.as_str())
    }

    /// Whether a delete for `slug` is in flight
    #[must_use]
    pub fn is_deleting(&self, slug: &str) -> bool {
        self.row(slug).is_some_and(|row| row.deleting)
    }

    fn row(&self, slug: &str) -> Option<&RecipeRow> {
        self.rows.iter().find(|row| row.recipe.slug == slug)
    }

    /// Mark `slug` as deleting
    ///
    /// Returns `None` when the row is not listed or already has a delete in flight.
    pub fn begin_delete(&mut self, slug: &str) -> Option<PendingDelete> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.recipe.slug == slug && !row.deleting)?;
        row.deleting = true;
        self.error = None;
        Some(PendingDelete {
            slug: slug.to_owned(),
        })
    }

    /// Apply the outcome of the delete call started by `pending`
    ///
    /// Success removes the row. Failure clears its deleting flag and sets the inline error.
    pub fn finish_delete(
        &mut self,
        pending: PendingDelete,
        outcome: Result<DeleteRecipeResponse, ClientError>,
    ) {
        match outcome {
            Ok(_) => self.rows.retain(|row| row.recipe.slug != pending.slug),
            Err(e) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.recipe.slug == pending.slug) {
                    row.deleting = false;
                }
                self.error = Some(messages::delete_row_failed(&e.to_string()));
            }
        }
    }
}
