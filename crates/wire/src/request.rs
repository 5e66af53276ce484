// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use envpool_core::{EnvId, ResetOptions};
use serde::{Deserialize, Serialize};

/// A single IPC command sent from the Router to a Worker over its pipe.
///
/// `request_id` is an opaque token the Worker echoes back unchanged in its
/// [`crate::Response`] — the Router matches responses to in-flight calls by
/// this id, not by pipe ordering, even though in practice one worker only
/// ever has one request in flight at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Request {
    Create {
        request_id: String,
        env_id: EnvId,
    },
    Step {
        request_id: String,
        env_id: EnvId,
        action: String,
    },
    Reset {
        request_id: String,
        env_id: EnvId,
        #[serde(default)]
        options: ResetOptions,
    },
    Close {
        request_id: String,
        env_id: EnvId,
    },
    /// Drain every live environment and exit the serve loop.
    Shutdown {
        request_id: String,
    },
    Ping {
        request_id: String,
    },
}

impl Request {
    pub fn request_id(&self) -> &str {
        match self {
            Self::Create { request_id, .. }
            | Self::Step { request_id, .. }
            | Self::Reset { request_id, .. }
            | Self::Close { request_id, .. }
            | Self::Shutdown { request_id }
            | Self::Ping { request_id } => request_id,
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
