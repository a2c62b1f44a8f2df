// ABOUTME: System-wide constants and configuration defaults for the Recipe Catalog
// ABOUTME: Contains user-facing messages, route paths, and environment defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Constants Module
//!
//! Application constants and default values for environment configuration.

/// Service identification for logs and health responses
pub mod service_names {
    /// Name of the HTTP server binary
    pub const RECIPE_CATALOG_SERVER: &str = "recipe-catalog-server";
}

/// Defaults used when an environment variable is absent
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 3000;
    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Seconds after which a generated page is eligible for regeneration
    pub const PAGE_REVALIDATE_SECS: u64 = 60;
    /// Maximum generated pages kept per cache
    pub const PAGE_CACHE_MAX_ENTRIES: usize = 1000;
    /// Base URL used by the CLI client
    pub const API_BASE_URL: &str = "http://127.0.0.1:3000";
}

/// Environment variable names
pub mod env_config {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind host
    pub const HOST: &str = "HOST";
    /// Store connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Page revalidation window in seconds
    pub const PAGE_REVALIDATE_SECS: &str = "PAGE_REVALIDATE_SECS";
    /// Page cache capacity
    pub const PAGE_CACHE_MAX_ENTRIES: &str = "PAGE_CACHE_MAX_ENTRIES";
    /// Whether to pre-generate pages at startup
    pub const PRERENDER_ON_STARTUP: &str = "PRERENDER_ON_STARTUP";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Base URL for the CLI client
    pub const RECIPE_API_URL: &str = "RECIPE_API_URL";
}

/// Route paths shared by the server, renderer and client
pub mod routes {
    /// Collection API route
    pub const API_RECIPES: &str = "/api/recipes";
    /// List page
    pub const RECIPES_PAGE: &str = "/recipes";
    /// Creation form page
    pub const NEW_RECIPE_PAGE: &str = "/recipes/new";
    /// List page data (serialized props)
    pub const RECIPES_DATA: &str = "/_data/recipes";

    /// Cache key of the list page
    pub const LIST_PAGE_KEY: &str = "/recipes";
}

/// User-facing messages returned by the API and rendered by pages
pub mod messages {
    /// Create failed (undecodable body, blank slug or title, any store failure)
    pub const CREATE_FAILED: &str = "レシピの作成に失敗しました。";
    /// Slug missing or malformed
    pub const INVALID_SLUG: &str = "無効なレシピスラッグです。";
    /// No recipe with the requested slug
    pub const RECIPE_NOT_FOUND: &str = "指定されたスラッグのレシピは見つかりませんでした。";
    /// Delete failed for a reason other than not-found
    pub const DELETE_FAILED: &str = "レシピの削除に失敗しました。";
    /// List or detail fetch failed
    pub const FETCH_FAILED: &str = "レシピの取得に失敗しました。";

    /// Confirmation message for a successful delete
    #[must_use]
    pub fn deleted(slug: &str) -> String {
        format!("レシピ (スラッグ: {slug}) が正常に削除されました。")
    }

    /// Inline status shown when creation from the form fails
    #[must_use]
    pub fn create_form_failed(reason: &str) -> String {
        format!("登録に失敗しました: {reason}")
    }

    /// Yes/no prompt shown before deleting a recipe
    #[must_use]
    pub fn confirm_delete(title: &str) -> String {
        format!("レシピ「{title}」を削除しますか？")
    }

    /// Inline error shown next to the list when a delete fails
    #[must_use]
    pub fn delete_row_failed(reason: &str) -> String {
        format!("削除に失敗しました: {reason}")
    }
}
