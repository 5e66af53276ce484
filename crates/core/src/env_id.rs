// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment identifier.

use crate::worker::WorkerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External identifier of a single simulator instance.
///
/// Assigned by the Router at `create()` time from a monotonically
/// increasing counter; unique for the lifetime of the Router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvId(pub u64);

impl EnvId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Routing invariant: the worker that owns this id is `id mod pool_width`.
    pub fn route(self, pool_width: u32) -> WorkerId {
        debug_assert!(pool_width > 0, "pool width must be positive");
        WorkerId::new((self.0 % pool_width as u64) as u32)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EnvId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[path = "env_id_tests.rs"]
mod tests;
