// ABOUTME: Read paths producing serializable page props for the list and detail pages
// ABOUTME: Mirrors static generation with revalidation: props, not-found results, and path enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Page Generation
//!
//! Each page is generated from the store into a props value that carries its
//! revalidation window. Generated props are kept in a [`cache::PageCache`] and
//! served until the window elapses, after which the next request regenerates
//! them. Slugs that were not generated ahead of time are generated on first
//! request while the caller waits ([`Fallback::Blocking`]).

/// Snapshot cache with per-entry revalidation
pub mod cache;
/// HTML rendering of generated props
pub mod render;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::routes;
use crate::errors::AppResult;
use crate::services::recipes::RecipeService;
use cache::PageCache;
use recipe_core::input::parse_lines;
use recipe_core::models::{CreateRecipeRequest, SerializedRecipe};

/// Generated props together with their revalidation window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProps<P> {
    /// Props passed to the renderer
    pub props: P,
    /// Age after which the props are regenerated
    pub revalidate: Duration,
}

/// Outcome of generating a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult<P> {
    /// Page generated
    Found(StaticProps<P>),
    /// The route parameters cannot name a page (never cached)
    NotFound,
}

/// Props of the list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPageProps {
    /// Recipes, newest first
    pub recipes: Vec<SerializedRecipe>,
}

/// Props of the detail page; `recipe` is `null` when the slug has no record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPageProps {
    /// The recipe, if one exists
    pub recipe: Option<SerializedRecipe>,
}

/// Slug route parameter as it arrives from the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugParam {
    /// No parameter supplied
    Missing,
    /// Exactly one value
    Single(String),
    /// More than one value (catch-all style segments)
    Multiple(Vec<String>),
}

impl SlugParam {
    /// Build from the decoded `:slug` path value
    ///
    /// The value is taken verbatim, so an encoded `/` stays part of the slug.
    /// Only an empty value is [`SlugParam::Missing`].
    #[must_use]
    pub fn from_value(slug: String) -> Self {
        if slug.is_empty() {
            Self::Missing
        } else {
            Self::Single(slug)
        }
    }
}

/// Strategy for paths not generated ahead of time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Generate on first request while the requester waits
    Blocking,
}

/// Paths to generate ahead of time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPaths {
    /// Slugs known to the store at enumeration time
    pub paths: Vec<String>,
    /// Behaviour for any other slug
    pub fallback: Fallback,
}

/// Raw fields of the creation form, as submitted
///
/// Ingredients and instructions are text areas with one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipeForm {
    /// Slug input
    #[serde(default)]
    pub slug: String,
    /// Title input
    #[serde(default)]
    pub title: String,
    /// Description text area
    #[serde(default)]
    pub description: String,
    /// Ingredients text area
    #[serde(default)]
    pub ingredients: String,
    /// Instructions text area
    #[serde(default)]
    pub instructions: String,
}

impl NewRecipeForm {
    /// Build the creation payload: one entry per non-blank line, each trimmed
    #[must_use]
    pub fn to_request(&self) -> CreateRecipeRequest {
        let description = self.description.trim();
        CreateRecipeRequest {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: (!description.is_empty()).then(|| self.description.clone()),
            ingredients: parse_lines(&self.ingredients),
            instructions: parse_lines(&self.instructions),
        }
    }
}

/// Cache key of a detail page
#[must_use]
pub fn detail_page_key(slug: &str) -> String {
    format!("{}/{slug}", routes::RECIPES_PAGE)
}

/// Generate list page props
pub async fn list_props(
    service: &RecipeService,
    revalidate: Duration,
) -> AppResult<PageResult<ListPageProps>> {
    let recipes = service.list().await?;
    debug!(count = recipes.len(), "Generated list page props");
    Ok(PageResult::Found(StaticProps {
        props: ListPageProps {
            recipes: recipes.into_iter().map(SerializedRecipe::from).collect(),
        },
        revalidate,
    }))
}

/// Generate detail page props
///
/// Anything but a single slug value is not found. A slug with no record
/// still yields props (with `recipe: None`) so the page renders its
/// not-found state.
pub async fn detail_props(
    service: &RecipeService,
    slug: SlugParam,
    revalidate: Duration,
) -> AppResult<PageResult<DetailPageProps>> {
    let SlugParam::Single(slug) = slug else {
        debug!(?slug, "Detail page requested without a single slug");
        return Ok(PageResult::NotFound);
    };

    let recipe = service.find_by_slug(&slug).await?;
    debug!(slug = %slug, found = recipe.is_some(), "Generated detail page props");
    Ok(PageResult::Found(StaticProps {
        props: DetailPageProps {
            recipe: recipe.map(SerializedRecipe::from),
        },
        revalidate,
    }))
}

/// Enumerate detail paths to generate ahead of time
pub async fn static_paths(service: &RecipeService) -> AppResult<StaticPaths> {
    Ok(StaticPaths {
        paths: service.slugs().await?,
        fallback: Fallback::Blocking,
    })
}

/// Generate the list page and every enumerated detail page into the caches
///
/// Returns the number of pages generated.
pub async fn prerender(
    service: &RecipeService,
    list_pages: &PageCache<ListPageProps>,
    detail_pages: &PageCache<DetailPageProps>,
    revalidate: Duration,
) -> AppResult<usize> {
    let mut generated = 0;

    if let PageResult::Found(props) = list_props(service, revalidate).await? {
        list_pages.insert(routes::LIST_PAGE_KEY, props).await;
        generated += 1;
    }

    let StaticPaths { paths, .. } = static_paths(service).await?;
    for slug in paths {
        let key = detail_page_key(&slug);
        if let PageResult::Found(props) =
            detail_props(service, SlugParam::Single(slug), revalidate).await?
        {
            detail_pages.insert(&key, props).await;
            generated += 1;
        }
    }

    info!(pages = generated, "Pre-generated pages");
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_param_keeps_decoded_value() {
        assert_eq!(SlugParam::from_value(String::new()), SlugParam::Missing);
        assert_eq!(
            SlugParam::from_value("curry-rice".into()),
            SlugParam::Single("curry-rice".into())
        );
        assert_eq!(SlugParam::from_value("a/b".into()), SlugParam::Single("a/b".into()));
        assert_eq!(SlugParam::from_value("x/".into()), SlugParam::Single("x/".into()));
    }

    #[test]
    fn test_form_text_areas_become_ordered_entries() {
        let form = NewRecipeForm {
            slug: "miso-soup".into(),
            title: "味噌汁".into(),
            description: "  ".into(),
            ingredients: "豆腐\n\n わかめ \n".into(),
            instructions: "a\n\nb \n  \nc".into(),
        };
        let request = form.to_request();
        assert_eq!(request.description, None);
        assert_eq!(request.ingredients, vec!["豆腐", "わかめ"]);
        assert_eq!(request.instructions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_detail_page_key() {
        assert_eq!(detail_page_key("miso-soup"), "/recipes/miso-soup");
    }
}
