// ABOUTME: HTTP server assembly: merges route groups, adds tracing and request-id layers, serves
// ABOUTME: Binds a tokio listener and shuts down gracefully on Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{http::StatusCode, response::Html, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::pages::render;
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, PageRoutes, RecipeApiRoutes};

/// Build the application router with every route group and the HTTP middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http());

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeApiRoutes::routes(Arc::clone(&resources)))
        .merge(PageRoutes::routes(resources))
        .fallback(handle_unknown_route)
        .layer(middleware)
}

async fn handle_unknown_route() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render::not_found()))
}

/// Serve on an already-bound listener until a shutdown signal arrives
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let app = build_router(resources);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

/// Pre-generate pages if configured, bind `addr`, and serve
pub async fn run(resources: Arc<ServerResources>, addr: SocketAddr) -> Result<()> {
    if resources.config.pages.prerender_on_startup {
        match resources.prerender().await {
            Ok(pages) => info!(pages, "Pages generated at startup"),
            // Pages are generated on first request instead
            Err(e) => warn!(error = %e, "Startup page generation failed"),
        }
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Recipe catalog listening on http://{addr}");
    serve(listener, resources).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
