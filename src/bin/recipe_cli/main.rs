// ABOUTME: Recipe CLI - terminal client for a running Recipe Catalog server
// ABOUTME: Lists, shows, creates, and deletes recipes; deletes ask for confirmation first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors
//!
//! Usage:
//! ```bash
//! # List recipes, newest first
//! recipe-cli list
//!
//! # Show one recipe
//! recipe-cli show miso-soup
//!
//! # Create from text-area style files (one entry per line)
//! recipe-cli create --slug miso-soup --title "簡単味噌汁" \
//!     --ingredients-file ingredients.txt --instructions-file steps.txt
//!
//! # Delete (asks y/N unless --yes)
//! recipe-cli delete miso-soup
//! ```

mod commands;

use std::env;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use recipe_catalog::{
    client::api::RecipeApiClient,
    constants::{defaults, env_config},
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe Catalog command-line client",
    long_about = "List, show, create, and delete recipes on a running Recipe Catalog server."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Server base URL (defaults to RECIPE_API_URL or http://127.0.0.1:3000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List recipes, newest first
    List,
    /// Show one recipe
    Show {
        /// Recipe slug
        slug: String,
    },
    /// Create a recipe
    Create(CreateArgs),
    /// Delete a recipe
    Delete {
        /// Recipe slug
        slug: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Fields of a new recipe; list fields use the text-area convention (one entry per line)
#[derive(Args)]
pub struct CreateArgs {
    /// Unique slug
    #[arg(long)]
    pub slug: String,
    /// Title
    #[arg(long)]
    pub title: String,
    /// Description
    #[arg(long)]
    pub description: Option<String>,
    /// Ingredients, one per line
    #[arg(long, conflicts_with = "ingredients_file")]
    pub ingredients: Option<String>,
    /// File with one ingredient per line
    #[arg(long)]
    pub ingredients_file: Option<std::path::PathBuf>,
    /// Instructions, one step per line
    #[arg(long, conflicts_with = "instructions_file")]
    pub instructions: Option<String>,
    /// File with one step per line
    #[arg(long)]
    pub instructions_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let api_url = cli
        .api_url
        .or_else(|| env::var(env_config::RECIPE_API_URL).ok())
        .unwrap_or_else(|| defaults::API_BASE_URL.to_owned());
    let client = RecipeApiClient::new(api_url);

    match cli.command {
        Command::List => commands::list(&client).await,
        Command::Show { slug } => commands::show(&client, &slug).await,
        Command::Create(args) => commands::create(&client, args).await,
        Command::Delete { slug, yes } => commands::delete(&client, &slug, yes).await,
    }
}
