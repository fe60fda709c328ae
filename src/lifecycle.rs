// ABOUTME: Server lifecycle for both portfolio services: bind, serve, and graceful shutdown
// ABOUTME: Stops accepting on Ctrl+C or SIGTERM and lets in-flight requests finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! Server lifecycle
//!
//! Binding is the last startup step: anything that can fail fatally (config,
//! template parsing) must have succeeded before [`bind`] is called.

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Bind a TCP listener, failing with the address in the error context
///
/// # Errors
///
/// Returns an error if the address is unavailable
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))
}

/// Serve `router` on `listener` until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server loop fails
pub async fn serve(listener: TcpListener, router: Router, service_name: &str) -> Result<()> {
    let local_addr = listener.local_addr()?;
    info!(service = service_name, address = %local_addr, "Server running on {local_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| format!("{service_name} server failed"))?;

    info!(service = service_name, "Server shut down");
    Ok(())
}

/// Resolve once Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
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
}
