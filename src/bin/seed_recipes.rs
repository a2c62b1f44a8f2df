// ABOUTME: Sample data seeding utility for the Recipe Catalog
// ABOUTME: Inserts the curry-rice and miso-soup sample recipes when they are absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Sample recipe seeder.
//!
//! Usage:
//! ```bash
//! # Seed sample recipes (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/recipes.db
//! ```

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_catalog::{
    config::environment::DatabaseUrl,
    constants::{defaults, env_config},
    database_plugins::{RecipeStore, SqliteRecipeStore},
    logging::LoggingConfig,
};
use recipe_core::models::CreateRecipeRequest;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Recipe Catalog sample data seeder",
    long_about = "Insert the sample recipes (curry-rice, miso-soup) if they are not stored yet"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Sample recipe definition
struct SampleRecipe {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
}

const SAMPLE_RECIPES: &[SampleRecipe] = &[
    SampleRecipe {
        slug: "curry-rice",
        title: "美味しいカレーライス",
        description: "家庭で作れる定番カレー",
        ingredients: &["ごはん", "カレールー", "玉ねぎ", "人参", "じゃがいも", "肉"],
        instructions: &["材料を切る", "炒める", "煮込む", "ルーを入れる"],
    },
    SampleRecipe {
        slug: "miso-soup",
        title: "簡単味噌汁",
        description: "毎日の食卓に",
        ingredients: &["豆腐", "わかめ", "味噌", "だし"],
        instructions: &["だしを煮出す", "具材を入れる", "味噌を溶く"],
    },
];

impl SampleRecipe {
    fn to_request(&self) -> CreateRecipeRequest {
        CreateRecipeRequest {
            slug: self.slug.to_owned(),
            title: self.title.to_owned(),
            description: Some(self.description.to_owned()),
            ingredients: self.ingredients.iter().map(|s| (*s).to_owned()).collect(),
            instructions: self.instructions.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    LoggingConfig {
        level: if args.verbose { "debug" } else { "info" }.to_owned(),
        ..LoggingConfig::for_cli()
    }
    .init()?;

    let database_url = args
        .database_url
        .or_else(|| env::var(env_config::DATABASE_URL).ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());
    let database_url = DatabaseUrl::parse_url(&database_url);

    info!("Connecting to database: {database_url}");
    let store = SqliteRecipeStore::connect(&database_url)
        .await
        .context("Failed to open recipe store")?;

    let mut created = 0;
    for sample in SAMPLE_RECIPES {
        if store.find_by_slug(sample.slug).await?.is_some() {
            info!(slug = sample.slug, "Already present, skipping");
            continue;
        }
        let recipe = store.create(&sample.to_request()).await?;
        info!(slug = %recipe.slug, id = %recipe.id, "Seeded recipe");
        created += 1;
    }

    info!(
        "Seeding complete: {created} created, {} total",
        store.count().await?
    );
    Ok(())
}
