// ABOUTME: Integration tests for the recipe repository service
// ABOUTME: Validates create/delete error mapping, existence checks, and the delete race path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_service, sample_request, FailingStore, FailureMode};
use recipe_catalog::constants::messages;
use recipe_catalog::errors::ErrorCode;
use recipe_catalog::services::recipes::RecipeService;
use recipe_core::models::SerializedRecipe;

#[tokio::test]
async fn test_create_then_find_matches_input() {
    let service = create_test_service().await;
    let request = sample_request("miso-soup");

    let created = service.create(request.clone()).await.unwrap();
    let found = service.find_by_slug("miso-soup").await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.title, request.title);
    assert_eq!(found.description, request.description);
    assert_eq!(found.ingredients, request.ingredients);
    assert_eq!(found.instructions, request.instructions);
    assert!(found.updated_at >= found.created_at);

    let serialized = SerializedRecipe::from(&found);
    assert!(!serialized.id.is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(&serialized.created_at).is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(&serialized.updated_at).is_ok());
}

#[tokio::test]
async fn test_create_without_slug_or_title_fails_generically() {
    let service = create_test_service().await;

    let mut blank_slug = sample_request("x");
    blank_slug.slug = "  ".to_owned();
    let err = service.create(blank_slug).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert_eq!(err.message, messages::CREATE_FAILED);

    let mut blank_title = sample_request("x");
    blank_title.title = String::new();
    let err = service.create(blank_title).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert_eq!(err.message, messages::CREATE_FAILED);

    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_slug_fails_with_generic_message() {
    let service = create_test_service().await;
    service.create(sample_request("curry-rice")).await.unwrap();

    let err = service
        .create(sample_request("curry-rice"))
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), 500);
    assert_eq!(err.message, messages::CREATE_FAILED);
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_slug_is_not_found_and_changes_nothing() {
    let service = create_test_service().await;
    service.create(sample_request("keep")).await.unwrap();

    let err = service.delete_by_slug("nope").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.message, messages::RECIPE_NOT_FOUND);
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_record_then_not_found() {
    let service = create_test_service().await;
    let target = service.create(sample_request("target")).await.unwrap();
    service.create(sample_request("other")).await.unwrap();

    let deleted = service.delete_by_slug("target").await.unwrap();
    assert_eq!(deleted, target.id);
    assert_eq!(service.slugs().await.unwrap(), vec!["other"]);

    let err = service.delete_by_slug("target").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_blank_slug_is_invalid_input() {
    let service = create_test_service().await;

    let err = service.delete_by_slug(" ").await.unwrap_err();

    assert_eq!(err.http_status(), 400);
    assert_eq!(err.message, messages::INVALID_SLUG);
}

#[tokio::test]
async fn test_record_removed_between_check_and_delete_is_not_found() {
    let service = RecipeService::new(FailingStore::new(FailureMode::VanishesBeforeDelete));

    let err = service.delete_by_slug("raced").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.message, messages::RECIPE_NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_during_delete_is_internal() {
    let service = RecipeService::new(FailingStore::new(FailureMode::DeleteFails));

    let err = service.delete_by_slug("curry-rice").await.unwrap_err();

    assert_eq!(err.http_status(), 500);
    assert_eq!(err.message, messages::DELETE_FAILED);
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_store_failure_during_existence_check_is_internal() {
    let service = RecipeService::new(FailingStore::new(FailureMode::Unavailable));

    let err = service.delete_by_slug("curry-rice").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert_eq!(err.message, messages::DELETE_FAILED);
}

#[tokio::test]
async fn test_store_conflict_and_outage_share_create_message() {
    for mode in [FailureMode::Conflict, FailureMode::Unavailable] {
        let service = RecipeService::new(FailingStore::new(mode));
        let err = service.create(sample_request("x")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError, "{mode:?}");
        assert_eq!(err.message, messages::CREATE_FAILED, "{mode:?}");
    }
}
