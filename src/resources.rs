// ABOUTME: Shared server resources constructed once at startup and injected into every handler
// ABOUTME: Holds the recipe service, page snapshot caches, and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Server Resources
//!
//! Dependency injection container for the HTTP server. The store is created
//! explicitly by the caller and owned here for the life of the process;
//! handlers receive it through `State<Arc<ServerResources>>`.

use std::sync::Arc;
use std::time::Duration;

use crate::config::environment::ServerConfig;
use crate::database_plugins::RecipeStore;
use crate::errors::AppResult;
use crate::pages::cache::PageCache;
use crate::pages::{self, DetailPageProps, ListPageProps};
use crate::services::recipes::RecipeService;

/// Resources shared by all route handlers
pub struct ServerResources {
    /// Recipe repository
    pub service: RecipeService,
    /// Generated list page
    pub list_pages: PageCache<ListPageProps>,
    /// Generated detail pages keyed by path
    pub detail_pages: PageCache<DetailPageProps>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Build resources around an already-connected store
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>, config: Arc<ServerConfig>) -> Self {
        let max_pages = config.pages.max_cached_pages;
        Self {
            service: RecipeService::new(store),
            list_pages: PageCache::with_capacity(max_pages),
            detail_pages: PageCache::with_capacity(max_pages),
            config,
        }
    }

    /// Revalidation window applied to every generated page
    #[must_use]
    pub fn revalidate(&self) -> Duration {
        self.config.pages.revalidate()
    }

    /// Generate the list page and every known detail page ahead of the first request
    pub async fn prerender(&self) -> AppResult<usize> {
        pages::prerender(
            &self.service,
            &self.list_pages,
            &self.detail_pages,
            self.revalidate(),
        )
        .await
    }
}
