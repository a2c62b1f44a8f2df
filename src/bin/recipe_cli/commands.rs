// ABOUTME: Recipe CLI command implementations
// ABOUTME: Prints recipes and drives the confirm-then-delete flow against the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use recipe_catalog::client::{
    api::RecipeApiClient,
    confirm::{Confirm, FixedConfirm, StdinConfirm},
    delete_with_confirmation,
    list_state::RecipeListState,
    DeleteFlowOutcome,
};
use recipe_catalog::constants::messages;
use recipe_core::input::parse_lines;
use recipe_core::models::{CreateRecipeRequest, SerializedRecipe};

use crate::CreateArgs;

fn print_recipe(recipe: &SerializedRecipe) {
    println!("{} ({})", recipe.title, recipe.slug);
    if let Some(description) = &recipe.description {
        println!("  {description}");
    }
    println!("  材料:");
    for ingredient in &recipe.ingredients {
        println!("    - {ingredient}");
    }
    println!("  作り方:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("    {}. {instruction}", step + 1);
    }
    println!("  id: {}  created: {}", recipe.id, recipe.created_at);
}

async fn text_area(inline: Option<String>, file: Option<&Path>) -> Result<Vec<String>> {
    let text = match (inline, file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };
    Ok(parse_lines(&text))
}

/// `recipe-cli list`
pub async fn list(client: &RecipeApiClient) -> Result<()> {
    let recipes = client.list().await?;
    if recipes.is_empty() {
        println!("No recipes.");
    }
    for recipe in &recipes {
        println!("{}\t{}\t{}", recipe.slug, recipe.title, recipe.created_at);
    }
    Ok(())
}

/// `recipe-cli show <slug>`
pub async fn show(client: &RecipeApiClient, slug: &str) -> Result<()> {
    match client.get(slug).await? {
        Some(recipe) => {
            print_recipe(&recipe);
            Ok(())
        }
        None => bail!("Recipe '{slug}' not found"),
    }
}

/// `recipe-cli create ...`
pub async fn create(client: &RecipeApiClient, args: CreateArgs) -> Result<()> {
    let ingredients = text_area(args.ingredients, args.ingredients_file.as_deref()).await?;
    let instructions = text_area(args.instructions, args.instructions_file.as_deref()).await?;
    let request = CreateRecipeRequest {
        slug: args.slug,
        title: args.title,
        description: args.description,
        ingredients,
        instructions,
    };

    let recipe = client
        .create(&request)
        .await
        .map_err(|e| anyhow!(messages::create_form_failed(&e.to_string())))?;
    println!("Created:");
    print_recipe(&recipe);
    Ok(())
}

/// `recipe-cli delete <slug>`
pub async fn delete(client: &RecipeApiClient, slug: &str, yes: bool) -> Result<()> {
    let mut state = RecipeListState::new(client.list().await?);
    let confirm: Box<dyn Confirm> = if yes {
        Box::new(FixedConfirm(true))
    } else {
        Box::new(StdinConfirm)
    };

    match delete_with_confirmation(&mut state, slug, confirm.as_ref(), client).await {
        DeleteFlowOutcome::Deleted { deleted_id } => {
            println!("Deleted {slug} (id {deleted_id})");
            println!("{} recipe(s) remain", state.rows().len());
            Ok(())
        }
        DeleteFlowOutcome::Cancelled => {
            println!("Cancelled");
            Ok(())
        }
        DeleteFlowOutcome::Busy => bail!("Recipe '{slug}' is not in the list"),
        DeleteFlowOutcome::Failed { message } => Err(anyhow!(message)),
    }
}
