// ABOUTME: Route handlers for the recipe JSON API (create and delete by slug)
// ABOUTME: Each route accepts one method; others get 405 with an Allow header and plain-text body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Recipe API routes
//!
//! `POST /api/recipes` creates a recipe; `DELETE /api/recipes/:slug` removes one.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, post},
    Json, Router,
};
use tracing::{debug, warn};

use crate::constants::{messages, routes};
use crate::errors::AppError;
use crate::resources::ServerResources;
use recipe_core::models::{CreateRecipeRequest, DeleteRecipeResponse, SerializedRecipe};

/// Build the 405 response naming the accepted method
fn method_not_allowed(method: &Method, allow: &'static str) -> Response {
    debug!(%method, allow, "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [
            (header::ALLOW, allow),
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
        ],
        format!("Method {method} Not Allowed"),
    )
        .into_response()
}

/// Recipe API routes
pub struct RecipeApiRoutes;

impl RecipeApiRoutes {
    /// Create the recipe API routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::API_RECIPES,
                post(Self::handle_create).fallback(Self::handle_collection_method),
            )
            .route(
                &format!("{}/:slug", routes::API_RECIPES),
                delete(Self::handle_delete).fallback(Self::handle_item_method),
            )
            .with_state(resources)
    }

    /// Handle POST /api/recipes
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<CreateRecipeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "Rejected recipe create body");
            AppError::database(messages::CREATE_FAILED)
        })?;

        let recipe = resources.service.create(request).await?;
        Ok((StatusCode::CREATED, Json(SerializedRecipe::from(recipe))).into_response())
    }

    /// Handle DELETE /api/recipes/:slug
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        slug: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(slug) = slug.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "Rejected recipe slug");
            AppError::invalid_input(messages::INVALID_SLUG)
        })?;

        let deleted_id = resources.service.delete_by_slug(&slug).await?;
        let response = DeleteRecipeResponse {
            message: messages::deleted(&slug),
            deleted_id: deleted_id.to_string(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_collection_method(method: Method) -> Response {
        method_not_allowed(&method, "POST")
    }

    async fn handle_item_method(method: Method) -> Response {
        method_not_allowed(&method, "DELETE")
    }
}
