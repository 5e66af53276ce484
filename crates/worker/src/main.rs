// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry point for a single Worker subprocess.
//!
//! Spawned by the Router with stdin/stdout piped back to it. On startup,
//! resolves its adapter by name and sends an `__init__` acknowledgement over
//! stdout before entering the serve loop (mirrors the handshake the Router
//! waits on before considering the worker ready).

use clap::Parser;
use envpool_core::EnvError;
use envpool_wire::{write_response, Response};
use tokio::io::{AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(name = "envpool-workerd")]
struct Args {
    /// Dense index of this worker within the pool, `0..pool_width`.
    #[arg(long)]
    worker_id: u32,

    /// Total number of workers in the pool (for log context only; routing
    /// is entirely the Router's responsibility).
    #[arg(long)]
    pool_width: u32,

    /// Adapter kind to construct, e.g. "counter" or "echo".
    #[arg(long)]
    adapter: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let wrapper = match envpool_adapters::lookup(&args.adapter) {
        Some(wrapper) => wrapper,
        None => {
            let error = EnvError::config_missing(format!("unknown adapter kind '{}'", args.adapter));
            let _ = write_response(&mut stdout, &Response::err("__init__", &error)).await;
            std::process::exit(1);
        }
    };

    tracing::info!(worker_id = args.worker_id, pool_width = args.pool_width, adapter = %args.adapter, "worker starting");

    if let Err(e) =
        write_response(&mut stdout, &Response::Ready { request_id: "__init__".to_string() }).await
    {
        tracing::error!(error = %e, "failed to send init handshake");
        std::process::exit(1);
    }
    let _ = stdout.flush().await;

    match envpool_worker::serve(wrapper, stdin, stdout).await {
        Ok(()) => tracing::info!(worker_id = args.worker_id, "worker exited"),
        Err(e) => {
            tracing::error!(worker_id = args.worker_id, error = %e, "worker exited with I/O error");
            std::process::exit(1);
        }
    }
}
