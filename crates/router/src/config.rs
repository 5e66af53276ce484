// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Router configuration: pool width, timeouts, and the adapter kind every
//! spawned worker resolves by name.

use std::time::Duration;

/// Default worker-count, matching the source's smaller default (the larger
/// default of 64 is reserved for hosts wide enough to afford it; callers
/// that want it set `parallel_actor` explicitly).
pub const DEFAULT_PARALLEL_ACTOR: u32 = 8;

/// Default IPC timeout, in seconds.
pub const DEFAULT_IPC_TIMEOUT_SECS: f64 = 120.0;

/// Default bound readiness timeout at Router startup.
pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 120;

/// Pool-wide configuration, fixed for the lifetime of a `Router`.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Pool width `P`: the fixed number of worker subprocesses.
    pub parallel_actor: u32,
    /// Bound on every worker round-trip (send request, await response).
    pub ipc_timeout: Duration,
    /// Bound on waiting for each worker's startup readiness handshake.
    pub ready_timeout: Duration,
    /// Adapter-kind name resolved by each worker through the registry.
    pub adapter: String,
}

impl RouterConfig {
    pub fn new(adapter: impl Into<String>) -> Self {
        Self {
            parallel_actor: DEFAULT_PARALLEL_ACTOR,
            ipc_timeout: Duration::from_secs_f64(DEFAULT_IPC_TIMEOUT_SECS),
            ready_timeout: Duration::from_secs(DEFAULT_READY_TIMEOUT_SECS),
            adapter: adapter.into(),
        }
    }

    pub fn with_parallel_actor(mut self, parallel_actor: u32) -> Self {
        self.parallel_actor = parallel_actor;
        self
    }

    pub fn with_ipc_timeout(mut self, ipc_timeout: Duration) -> Self {
        self.ipc_timeout = ipc_timeout;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
