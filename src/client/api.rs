// ABOUTME: HTTP client for the recipe catalog using reqwest
// ABOUTME: Reads through the page-data routes, writes through the JSON API, decodes error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::{ClientError, RecipeDeleter};
use crate::constants::routes;
use crate::pages::{DetailPageProps, ListPageProps};
use recipe_core::models::{CreateRecipeRequest, DeleteRecipeResponse, SerializedRecipe};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for a running recipe catalog server
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    base_url: String,
    client: Client,
}

impl RecipeApiClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, client }
    }

    /// Server base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// All recipes, newest first (as served to the list page)
    pub async fn list(&self) -> Result<Vec<SerializedRecipe>, ClientError> {
        let response = send(self.client.get(self.url(routes::RECIPES_DATA))).await?;
        let props: ListPageProps = decode(response, "recipe list").await?;
        Ok(props.recipes)
    }

    /// Recipe by slug, `None` when the server has no such recipe
    pub async fn get(&self, slug: &str) -> Result<Option<SerializedRecipe>, ClientError> {
        let path = format!("{}/{}", routes::RECIPES_DATA, urlencoding::encode(slug));
        match send(self.client.get(self.url(&path))).await {
            Ok(response) => {
                let props: DetailPageProps = decode(response, "recipe detail").await?;
                Ok(props.recipe)
            }
            Err(ClientError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Create a recipe
    pub async fn create(
        &self,
        request: &CreateRecipeRequest,
    ) -> Result<SerializedRecipe, ClientError> {
        let response = send(self.client.post(self.url(routes::API_RECIPES)).json(request)).await?;
        decode(response, "created recipe").await
    }

    /// Delete a recipe by slug
    pub async fn delete(&self, slug: &str) -> Result<DeleteRecipeResponse, ClientError> {
        let path = format!("{}/{}", routes::API_RECIPES, urlencoding::encode(slug));
        let response = send(self.client.delete(self.url(&path))).await?;
        decode(response, "delete response").await
    }
}

#[async_trait]
impl RecipeDeleter for RecipeApiClient {
    async fn delete_recipe(&self, slug: &str) -> Result<DeleteRecipeResponse, ClientError> {
        self.delete(slug).await
    }
}

/// Send a request and turn non-success statuses into [`ClientError::Api`]
async fn send(request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let status = response.status();
    debug!(status = status.as_u16(), url = %response.url(), "Recipe API response");
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(status, &text),
    })
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T, ClientError> {
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|source| ClientError::Decode { context, source })
}

/// `{"message"}` from a JSON error body, else the raw text, else the status reason
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return message;
    }
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_owned()
    } else {
        body.to_owned()
    }
}
