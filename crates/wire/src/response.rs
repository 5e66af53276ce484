// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use envpool_core::{EnvError, StepPayload};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single IPC reply sent from a Worker back to the Router.
///
/// `Err` carries the closed error taxonomy's wire vocabulary directly
/// (`code`, `message`, `retryable`) rather than a nested [`EnvError`] so that
/// an unrecognized future code still deserializes; the Router reconstructs
/// an `EnvError` via [`envpool_core::EnvErrorKind::from_code`] on receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum Response {
    Created {
        request_id: String,
        observation: Value,
    },
    Stepped {
        request_id: String,
        payload: StepPayload,
    },
    Reset {
        request_id: String,
        observation: Value,
    },
    Closed {
        request_id: String,
        closed: bool,
    },
    Pong {
        request_id: String,
    },
    ShutdownAck {
        request_id: String,
    },
    /// Sent once over stdout immediately after a Worker's adapter
    /// constructs successfully, before it enters the serve loop.
    Ready {
        request_id: String,
    },
    Err {
        request_id: String,
        code: String,
        message: String,
        retryable: bool,
    },
}

impl Response {
    pub fn request_id(&self) -> &str {
        match self {
            Self::Created { request_id, .. }
            | Self::Stepped { request_id, .. }
            | Self::Reset { request_id, .. }
            | Self::Closed { request_id, .. }
            | Self::Pong { request_id }
            | Self::ShutdownAck { request_id }
            | Self::Ready { request_id }
            | Self::Err { request_id, .. } => request_id,
        }
    }

    pub fn err(request_id: impl Into<String>, error: &EnvError) -> Self {
        Self::Err {
            request_id: request_id.into(),
            code: error.code().to_string(),
            message: error.message.clone(),
            retryable: error.retryable(),
        }
    }

    /// Reconstruct the typed [`EnvError`] from an `Err` response.
    ///
    /// Panics if called on a non-`Err` variant; callers are expected to
    /// check `is_err()` first (mirrors `Result::unwrap_err`).
    pub fn into_env_error(self) -> EnvError {
        match self {
            Self::Err { code, message, .. } => {
                EnvError::new(envpool_core::EnvErrorKind::from_code(&code), message)
            }
            other => unreachable!("into_env_error called on {other:?}"),
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err { .. })
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
