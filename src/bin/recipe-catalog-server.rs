// ABOUTME: HTTP server binary for the Recipe Catalog
// ABOUTME: Loads environment configuration, opens the recipe store, and serves pages and API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Recipe Catalog Server Binary
//!
//! Starts the HTTP server. Configuration comes from the environment; the
//! flags below override individual values.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_catalog::{
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::SqliteRecipeStore,
    logging::LoggingConfig,
    resources::ServerResources,
    server,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Recipe Catalog - recipe pages and create/delete API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override database URL (e.g. `sqlite:./data/recipes.db`, `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,

    /// Skip page generation at startup
    #[arg(long)]
    no_prerender: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = DatabaseUrl::parse_url(&database_url);
    }
    if args.no_prerender {
        config.pages.prerender_on_startup = false;
    }

    LoggingConfig::for_server(&config).init()?;
    info!("Starting Recipe Catalog");
    info!("{}", config.summary());

    let store = SqliteRecipeStore::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open recipe store at {}", config.database_url))?;

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    let resources = Arc::new(ServerResources::new(Arc::new(store), Arc::new(config)));
    server::run(resources, addr).await
}
