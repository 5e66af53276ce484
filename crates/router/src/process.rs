// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstraction over "the thing the Router spawned for a worker slot".
//!
//! Production spawns a real `tokio::process::Child`; tests substitute an
//! in-process task driving [`envpool_worker::serve`] over an in-memory
//! duplex pipe, so the Router's liveness/shutdown logic exercises the same
//! code path without forking a real subprocess per test.

use async_trait::async_trait;
use tokio::process::Child;

/// What the Router needs to know about a spawned worker, independent of
/// whether it is a real OS process or an in-process stand-in.
#[async_trait]
pub trait WorkerProcess: Send {
    /// Non-blocking liveness check. `false` once the process/task has exited.
    fn is_alive(&mut self) -> bool;

    /// Send a termination signal (best-effort; a stand-in may no-op).
    fn kill(&mut self);

    /// Wait for the process/task to exit.
    async fn wait(&mut self);
}

/// Real subprocess, as spawned by [`crate::spawn::spawn_worker`].
pub struct ChildProcess {
    child: Child,
}

impl ChildProcess {
    pub fn new(child: Child) -> Self {
        Self { child }
    }
}

#[async_trait]
impl WorkerProcess for ChildProcess {
    fn is_alive(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    fn kill(&mut self) {
        let _ = self.child.start_kill();
    }

    async fn wait(&mut self) {
        let _ = self.child.wait().await;
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
