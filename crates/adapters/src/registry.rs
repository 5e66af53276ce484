// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The named adapter registry.
//!
//! A Worker never receives a closure across its process boundary — it
//! receives the adapter kind's name as a CLI argument and resolves its own
//! factory here. Each entry is a plain `fn() -> Box<dyn EnvWrapper>`, so
//! adding an adapter means adding one match arm, not wiring a new crate
//! through every layer between the CLI and the Worker.

use envpool_core::EnvWrapper;

use crate::{CounterWrapper, EchoWrapper};

/// Construct a fresh adapter instance for `kind`, or `None` if unknown.
pub fn lookup(kind: &str) -> Option<Box<dyn EnvWrapper>> {
    match kind {
        "counter" => Some(Box::new(CounterWrapper::new())),
        "echo" => Some(Box::new(EchoWrapper::new())),
        _ => None,
    }
}

/// The full set of adapter kinds known to this binary, for `--help` and
/// startup validation.
pub fn registered_kinds() -> &'static [&'static str] {
    &["counter", "echo"]
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
