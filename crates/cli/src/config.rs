// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI flags and environment-variable configuration for `envpoold`.
//!
//! Layering, in increasing precedence: built-in defaults → environment
//! variables (`ENVPOOL_*`) → CLI flags. `clap`'s `env` feature handles the
//! first two layers for us; explicit flags always win because `clap` only
//! falls back to the environment variable when the flag is absent.

use std::net::IpAddr;
use std::time::Duration;

use clap::Parser;
use envpool_router::{DEFAULT_IPC_TIMEOUT_SECS, DEFAULT_PARALLEL_ACTOR};

#[derive(Debug, Parser)]
#[command(name = "envpoold", about = "Multi-tenant agent-environment pool server")]
pub struct Args {
    /// Host to bind the HTTP listener on.
    #[arg(long, env = "ENVPOOL_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind the HTTP listener on.
    #[arg(long, env = "ENVPOOL_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Pool width `P`: number of worker subprocesses to spawn.
    #[arg(long, env = "ENVPOOL_PARALLEL_ACTOR", default_value_t = DEFAULT_PARALLEL_ACTOR)]
    pub parallel_actor: u32,

    /// Seconds to wait for a worker round-trip before raising `ENV_NOT_READY`.
    #[arg(long, env = "ENVPOOL_IPC_TIMEOUT", default_value_t = DEFAULT_IPC_TIMEOUT_SECS)]
    pub ipc_timeout: f64,

    /// Adapter kind every worker resolves by name (see `envpool-adapters::registry`).
    #[arg(long, env = "ENVPOOL_ADAPTER", default_value = "counter")]
    pub adapter: String,

    /// Raise the default tracing filter; repeatable (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn ipc_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.ipc_timeout)
    }

    /// Default tracing filter for this verbosity level, used only when
    /// `RUST_LOG` is unset.
    pub fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
