// ABOUTME: Client side of the recipe catalog: HTTP API client, list state, and delete confirmation
// ABOUTME: Keeps a local copy of the list in sync with the server after delete calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Recipe Client
//!
//! [`api::RecipeApiClient`] talks to a running server. [`list_state::RecipeListState`]
//! holds the list fetched at load time and reconciles it after each delete;
//! [`delete_with_confirmation`] runs the full confirm, mark, call, reconcile sequence.

/// HTTP client for the recipe API and page-data routes
pub mod api;
/// Yes/no confirmation prompts
pub mod confirm;
/// Local list state with per-row delete tracking
pub mod list_state;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::constants::messages;
use confirm::Confirm;
use list_state::RecipeListState;
use recipe_core::models::DeleteRecipeResponse;

/// Failure of a client call
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout)
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the response body, or the status reason
        message: String,
    },
    /// The response body could not be decoded
    #[error("failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded
        context: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// HTTP status of an API error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode { .. } => None,
        }
    }
}

/// Anything that can delete a recipe by slug
#[async_trait]
pub trait RecipeDeleter: Send + Sync {
    /// Delete the recipe with `slug`
    async fn delete_recipe(&self, slug: &str) -> Result<DeleteRecipeResponse, ClientError>;
}

/// Result of [`delete_with_confirmation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFlowOutcome {
    /// The user declined the prompt; nothing was sent
    Cancelled,
    /// The row is unknown or already being deleted
    Busy,
    /// The server deleted the recipe and the row was removed
    Deleted {
        /// Id reported by the server
        deleted_id: String,
    },
    /// The call failed; the row stays and the inline error is set
    Failed {
        /// Inline error message shown to the user
        message: String,
    },
}

/// Confirm, mark the row deleting, call the server, and reconcile the list
///
/// Failures are recorded on `state` and returned, never retried.
pub async fn delete_with_confirmation<C, D>(
    state: &mut RecipeListState,
    slug: &str,
    confirm: &C,
    deleter: &D,
) -> DeleteFlowOutcome
where
    C: Confirm + ?Sized,
    D: RecipeDeleter + ?Sized,
{
    let Some(title) = state.title_of(slug).map(str::to_owned) else {
        debug!(slug, "Delete requested for a row that is not listed");
        return DeleteFlowOutcome::Busy;
    };

    if !confirm.confirm(&messages::confirm_delete(&title)) {
        debug!(slug, "Delete cancelled by user");
        return DeleteFlowOutcome::Cancelled;
    }

    let Some(pending) = state.begin_delete(slug) else {
        return DeleteFlowOutcome::Busy;
    };

    let result = deleter.delete_recipe(slug).await;
    match &result {
        Ok(response) => info!(slug, deleted_id = %response.deleted_id, "Recipe deleted"),
        Err(e) => warn!(slug, error = %e, "Recipe delete failed"),
    }

    let deleted_id = result.as_ref().ok().map(|r| r.deleted_id.clone());
    state.finish_delete(pending, result);

    match deleted_id {
        Some(deleted_id) => DeleteFlowOutcome::Deleted { deleted_id },
        None => DeleteFlowOutcome::Failed {
            message: state.error().unwrap_or_default().to_owned(),
        },
    }
}
