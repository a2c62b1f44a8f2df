// ABOUTME: Core data models for the Recipe Catalog
// ABOUTME: Re-exports the Recipe record, its transport shape and request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Data Models
//!
//! - `Recipe`: the store-native record with `chrono` timestamps
//! - `SerializedRecipe`: the JSON/rendering shape with ISO-8601 string timestamps
//! - `CreateRecipeRequest`: creation payload accepted by the API
//! - `DeleteRecipeResponse`: confirmation returned by a successful delete

mod recipe;

pub use recipe::{
    format_timestamp, CreateRecipeRequest, DeleteRecipeResponse, Recipe, SerializedRecipe,
};
