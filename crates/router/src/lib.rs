// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The pool supervisor: spawns `P` `envpool-workerd` subprocesses, assigns
//! `EnvId`s by the `id mod P` routing invariant, and multiplexes external
//! requests onto the worker each id belongs to.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod handle;
mod process;
mod router;
mod spawn;

pub use config::{RouterConfig, DEFAULT_IPC_TIMEOUT_SECS, DEFAULT_PARALLEL_ACTOR, DEFAULT_READY_TIMEOUT_SECS};
pub use handle::{WorkerChannel, WorkerHandle};
pub use process::{ChildProcess, WorkerProcess};
pub use router::Router;
pub use spawn::{locate_worker_binary, spawn_worker};
