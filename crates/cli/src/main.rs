// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `envpoold`: starts the worker pool, binds the HTTP listener, and serves
//! until a shutdown signal arrives.
//!
//! Startup order matters: the `Router` (and therefore every worker's
//! readiness handshake) completes *before* the HTTP listener binds, so a
//! successful bind already implies a healthy pool — `/health` reports `ok`
//! the moment the listener is live, with no separate warm-up race.

mod config;

use std::net::SocketAddr;

use clap::Parser;
use config::Args;
use envpool_router::{Router, RouterConfig};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args);

    if !envpool_adapters::registered_kinds().contains(&args.adapter.as_str()) {
        tracing::error!(adapter = %args.adapter, "unknown adapter kind");
        std::process::exit(1);
    }

    let router_config = RouterConfig::new(args.adapter.clone())
        .with_parallel_actor(args.parallel_actor)
        .with_ipc_timeout(args.ipc_timeout());

    tracing::info!(
        parallel_actor = args.parallel_actor,
        adapter = %args.adapter,
        ipc_timeout = args.ipc_timeout,
        "starting pool"
    );

    let router = match Router::start(router_config).await {
        Ok(router) => router,
        Err(e) => {
            tracing::error!(error = %e, "pool startup failed");
            std::process::exit(1);
        }
    };

    let app = envpool_transport::app(router.clone());
    let addr = SocketAddr::new(args.host, args.port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind listener");
            router.shutdown().await;
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "listening");

    let serve_result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = serve_result {
        tracing::error!(error = %e, "server error");
    }

    tracing::info!("draining pool");
    router.shutdown().await;
    tracing::info!("shutdown complete");
}

/// Waits for Ctrl-C or SIGTERM, whichever arrives first.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        let Ok(mut sigterm) = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        else {
            return;
        };
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c"),
        _ = terminate => tracing::info!("received sigterm"),
    }
}

fn init_tracing(args: &Args) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
