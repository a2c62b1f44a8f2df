// ABOUTME: Route handlers for server-rendered pages and their page-data JSON
// ABOUTME: Serves list/detail pages from the revalidating snapshot cache and handles the creation form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Page routes
//!
//! HTML pages and the `/_data` routes share one snapshot cache per page kind,
//! so the rendered page and its data always come from the same generation.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use tracing::{info, warn};

use crate::constants::{messages, routes};
use crate::errors::{AppError, AppResult};
use crate::pages::{
    self, detail_page_key, render, DetailPageProps, ListPageProps, NewRecipeForm, PageResult,
    SlugParam, StaticProps,
};
use crate::resources::ServerResources;

fn status_of(error: &AppError) -> StatusCode {
    StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Page routes
pub struct PageRoutes;

impl PageRoutes {
    /// Create the page and page-data routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_home))
            .route(routes::RECIPES_PAGE, get(Self::handle_list))
            .route(
                routes::NEW_RECIPE_PAGE,
                get(Self::handle_new_form).post(Self::handle_create_form),
            )
            .route(
                &format!("{}/:slug", routes::RECIPES_PAGE),
                get(Self::handle_detail),
            )
            .route(routes::RECIPES_DATA, get(Self::handle_list_data))
            .route(
                &format!("{}/:slug", routes::RECIPES_DATA),
                get(Self::handle_detail_data),
            )
            .with_state(resources)
    }

    async fn list_page(resources: &ServerResources) -> AppResult<StaticProps<ListPageProps>> {
        let revalidate = resources.revalidate();
        let result = resources
            .list_pages
            .get_or_generate(routes::LIST_PAGE_KEY, || {
                pages::list_props(&resources.service, revalidate)
            })
            .await?;
        match result {
            PageResult::Found(props) => Ok(props),
            PageResult::NotFound => Err(AppError::internal("List page produced no props")),
        }
    }

    async fn detail_page(
        resources: &ServerResources,
        slug: SlugParam,
    ) -> AppResult<PageResult<DetailPageProps>> {
        let revalidate = resources.revalidate();
        let key = match &slug {
            SlugParam::Single(value) => Some(detail_page_key(value)),
            SlugParam::Missing | SlugParam::Multiple(_) => None,
        };
        // Only single-slug pages are cacheable; everything else is not found
        let Some(key) = key else {
            return pages::detail_props(&resources.service, slug, revalidate).await;
        };
        resources
            .detail_pages
            .get_or_generate(&key, || {
                pages::detail_props(&resources.service, slug, revalidate)
            })
            .await
    }

    fn slug_param(slug: Result<Path<String>, PathRejection>) -> SlugParam {
        match slug {
            Ok(Path(slug)) => SlugParam::from_value(slug),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "Unusable slug path parameter");
                SlugParam::Missing
            }
        }
    }

    /// Handle GET /
    async fn handle_home() -> Html<String> {
        Html(render::home())
    }

    /// Handle GET /recipes
    async fn handle_list(State(resources): State<Arc<ServerResources>>) -> Response {
        match Self::list_page(&resources).await {
            Ok(page) => Html(render::list(&page.props)).into_response(),
            Err(e) => (status_of(&e), Html(render::error(&e.message))).into_response(),
        }
    }

    /// Handle GET /recipes/:slug
    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        slug: Result<Path<String>, PathRejection>,
    ) -> Response {
        match Self::detail_page(&resources, Self::slug_param(slug)).await {
            Ok(PageResult::Found(page)) if page.props.recipe.is_some() => {
                Html(render::detail(&page.props)).into_response()
            }
            Ok(_) => (StatusCode::NOT_FOUND, Html(render::not_found())).into_response(),
            Err(e) => (status_of(&e), Html(render::error(&e.message))).into_response(),
        }
    }

    /// Handle GET /recipes/new
    async fn handle_new_form() -> Html<String> {
        Html(render::new_recipe_form(&NewRecipeForm::default(), None))
    }

    /// Handle POST /recipes/new (url-encoded form submission)
    async fn handle_create_form(
        State(resources): State<Arc<ServerResources>>,
        Form(form): Form<NewRecipeForm>,
    ) -> Response {
        match resources.service.create(form.to_request()).await {
            Ok(recipe) => {
                info!(slug = %recipe.slug, "Recipe created from form");
                Redirect::to(routes::RECIPES_PAGE).into_response()
            }
            Err(e) => {
                let status = messages::create_form_failed(&e.message);
                (
                    status_of(&e),
                    Html(render::new_recipe_form(&form, Some(&status))),
                )
                    .into_response()
            }
        }
    }

    /// Handle GET /_data/recipes
    async fn handle_list_data(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<ListPageProps>, AppError> {
        let page = Self::list_page(&resources).await?;
        Ok(Json(page.props))
    }

    /// Handle GET /_data/recipes/:slug
    async fn handle_detail_data(
        State(resources): State<Arc<ServerResources>>,
        slug: Result<Path<String>, PathRejection>,
    ) -> Result<Json<DetailPageProps>, AppError> {
        match Self::detail_page(&resources, Self::slug_param(slug)).await? {
            PageResult::Found(page) => Ok(Json(page.props)),
            PageResult::NotFound => Err(AppError::not_found(messages::RECIPE_NOT_FOUND)),
        }
    }
}
