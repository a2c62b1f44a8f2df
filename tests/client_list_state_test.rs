// ABOUTME: Tests for client list state reconciliation and the confirm-then-delete flow
// ABOUTME: Uses a counting mock deleter and fixed confirmation answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use recipe_catalog::client::confirm::FixedConfirm;
use recipe_catalog::client::list_state::RecipeListState;
use recipe_catalog::client::{
    delete_with_confirmation, ClientError, DeleteFlowOutcome, RecipeDeleter,
};
use recipe_catalog::constants::messages;
use recipe_core::models::{DeleteRecipeResponse, SerializedRecipe};

fn recipe(slug: &str, title: &str) -> SerializedRecipe {
    SerializedRecipe {
        id: format!("id-{slug}"),
        slug: slug.to_owned(),
        title: title.to_owned(),
        description: None,
        ingredients: vec![],
        instructions: vec![],
        created_at: "2025-04-01T09:30:00.000Z".to_owned(),
        updated_at: "2025-04-01T09:30:00.000Z".to_owned(),
    }
}

fn loaded_state() -> RecipeListState {
    RecipeListState::new(vec![
        recipe("miso-soup", "簡単味噌汁"),
        recipe("curry-rice", "美味しいカレーライス"),
    ])
}

fn deleted(slug: &str) -> Result<DeleteRecipeResponse, ClientError> {
    Ok(DeleteRecipeResponse {
        message: messages::deleted(slug),
        deleted_id: format!("id-{slug}"),
    })
}

fn not_found() -> Result<DeleteRecipeResponse, ClientError> {
    Err(ClientError::Api {
        status: 404,
        message: messages::RECIPE_NOT_FOUND.to_owned(),
    })
}

/// Deleter that counts calls and either succeeds or answers 404
struct MockDeleter {
    calls: AtomicUsize,
    succeed: bool,
}

impl MockDeleter {
    const fn new(succeed: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            succeed,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeDeleter for MockDeleter {
    async fn delete_recipe(&self, slug: &str) -> Result<DeleteRecipeResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            deleted(slug)
        } else {
            not_found()
        }
    }
}

// ============================================================================
// List state transitions
// ============================================================================

#[test]
fn test_successful_delete_removes_only_that_row() {
    let mut state = loaded_state();

    let pending = state.begin_delete("miso-soup").unwrap();
    assert!(state.is_deleting("miso-soup"));
    state.finish_delete(pending, deleted("miso-soup"));

    assert_eq!(state.slugs().collect::<Vec<_>>(), vec!["curry-rice"]);
    assert_eq!(state.error(), None);
}

#[test]
fn test_failed_delete_keeps_row_and_sets_error() {
    let mut state = loaded_state();

    let pending = state.begin_delete("curry-rice").unwrap();
    state.finish_delete(pending, not_found());

    assert_eq!(state.rows().len(), 2);
    assert!(!state.is_deleting("curry-rice"));
    assert_eq!(
        state.error(),
        Some(messages::delete_row_failed(messages::RECIPE_NOT_FOUND).as_str())
    );
}

#[test]
fn test_row_cannot_be_deleted_twice_concurrently() {
    let mut state = loaded_state();

    let first = state.begin_delete("miso-soup");
    let second = state.begin_delete("miso-soup");

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(first.unwrap().slug(), "miso-soup");
}

#[test]
fn test_other_rows_stay_deletable_while_one_is_in_flight() {
    let mut state = loaded_state();

    let miso = state.begin_delete("miso-soup").unwrap();
    let curry = state.begin_delete("curry-rice").unwrap();
    state.finish_delete(curry, deleted("curry-rice"));

    assert!(state.is_deleting("miso-soup"));
    assert_eq!(state.slugs().collect::<Vec<_>>(), vec!["miso-soup"]);
    state.finish_delete(miso, deleted("miso-soup"));
    assert!(state.rows().is_empty());
}

#[test]
fn test_new_attempt_clears_previous_error() {
    let mut state = loaded_state();
    let pending = state.begin_delete("curry-rice").unwrap();
    state.finish_delete(pending, not_found());
    assert!(state.error().is_some());

    let _retry = state.begin_delete("curry-rice").unwrap();

    assert_eq!(state.error(), None);
}

#[test]
fn test_unknown_row_cannot_begin_delete() {
    let mut state = loaded_state();
    assert!(state.begin_delete("ramen").is_none());
}

// ============================================================================
// Confirm-then-delete flow
// ============================================================================

#[tokio::test]
async fn test_declined_prompt_sends_nothing() {
    let mut state = loaded_state();
    let deleter = MockDeleter::new(true);

    let outcome =
        delete_with_confirmation(&mut state, "miso-soup", &FixedConfirm(false), &deleter).await;

    assert_eq!(outcome, DeleteFlowOutcome::Cancelled);
    assert_eq!(deleter.calls(), 0);
    assert_eq!(state.rows().len(), 2);
}

#[tokio::test]
async fn test_confirmed_delete_removes_row() {
    let mut state = loaded_state();
    let deleter = MockDeleter::new(true);

    let outcome =
        delete_with_confirmation(&mut state, "miso-soup", &FixedConfirm(true), &deleter).await;

    assert_eq!(
        outcome,
        DeleteFlowOutcome::Deleted {
            deleted_id: "id-miso-soup".to_owned()
        }
    );
    assert_eq!(deleter.calls(), 1);
    assert_eq!(state.slugs().collect::<Vec<_>>(), vec!["curry-rice"]);
}

#[tokio::test]
async fn test_failed_delete_reports_inline_error() {
    let mut state = loaded_state();
    let deleter = MockDeleter::new(false);

    let outcome =
        delete_with_confirmation(&mut state, "curry-rice", &FixedConfirm(true), &deleter).await;

    let expected = messages::delete_row_failed(messages::RECIPE_NOT_FOUND);
    assert_eq!(
        outcome,
        DeleteFlowOutcome::Failed {
            message: expected.clone()
        }
    );
    assert_eq!(state.error(), Some(expected.as_str()));
    assert_eq!(state.rows().len(), 2);
    assert!(!state.is_deleting("curry-rice"));
}

#[tokio::test]
async fn test_in_flight_row_is_busy() {
    let mut state = loaded_state();
    let deleter = MockDeleter::new(true);
    let _pending = state.begin_delete("miso-soup").unwrap();

    let outcome =
        delete_with_confirmation(&mut state, "miso-soup", &FixedConfirm(true), &deleter).await;

    assert_eq!(outcome, DeleteFlowOutcome::Busy);
    assert_eq!(deleter.calls(), 0);
}

#[tokio::test]
async fn test_unlisted_slug_is_busy() {
    let mut state = loaded_state();
    let deleter = MockDeleter::new(true);

    let outcome =
        delete_with_confirmation(&mut state, "ramen", &FixedConfirm(true), &deleter).await;

    assert_eq!(outcome, DeleteFlowOutcome::Busy);
    assert_eq!(deleter.calls(), 0);
}
