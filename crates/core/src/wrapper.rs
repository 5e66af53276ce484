// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Wrapper Contract: the abstract interface every simulator adapter
//! implements. A Worker owns exactly one `Box<dyn EnvWrapper>` and dispatches
//! every request to it serially — adapters never need to be `Sync`, only
//! constructible by a zero-argument factory (see `envpool-adapters::registry`)
//! and usable from the single task that owns them.

use crate::env_id::EnvId;
use crate::error::EnvError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Adapter-specific keyed options passed through to `reset` verbatim.
///
/// The protocol only guarantees pass-through; each adapter validates its own
/// recognized keys and raises `TaskOutOfRange` / `InvalidAction` as needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResetOptions(pub Map<String, Value>);

impl ResetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Fetch `key` as an `i64`, raising `INVALID_ACTION` if present but not
    /// an integer, or `None` if absent.
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, EnvError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| EnvError::invalid_action(format!("option '{key}' is not an integer"))),
            Some(_) => Err(EnvError::invalid_action(format!("option '{key}' must be an integer"))),
        }
    }

    pub fn get_str(&self, key: &str) -> Result<Option<&str>, EnvError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(EnvError::invalid_action(format!("option '{key}' must be a string"))),
        }
    }

    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

/// The result of a single `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepPayload {
    pub observation: String,
    pub reward: f64,
    pub done: bool,
    /// Adapter-scoped bag, e.g. `available_actions`, `task_type`.
    #[serde(default)]
    pub info: Value,
}

/// The abstract interface every simulator adapter implements.
///
/// Concurrent calls into one adapter instance are undefined; the Worker
/// guarantees serial access by construction (one task, one owned instance).
#[async_trait]
pub trait EnvWrapper: Send {
    /// Construct a fresh instance keyed by `id`. Callers never repeat a
    /// `create_with_id` for the same id, so idempotence is not required.
    async fn create_with_id(&mut self, id: EnvId) -> Result<Value, EnvError>;

    /// Advance one simulation step.
    async fn step(&mut self, id: EnvId, action: &str) -> Result<StepPayload, EnvError>;

    /// (Re)initialize instance `id`. Always legal unless the instance is
    /// deleted; returns the environment to the *active* state.
    async fn reset(&mut self, id: EnvId, options: ResetOptions) -> Result<Value, EnvError>;

    /// Release resources and mark the instance deleted. Must tolerate an
    /// instance that was created but never reset, and must never leak
    /// resources even if internal cleanup fails.
    async fn close(&mut self, id: EnvId) -> Result<bool, EnvError>;

    /// Currently-live (non-deleted) environment ids, used at SHUTDOWN to drain.
    fn ls(&self) -> Vec<EnvId>;
}

#[cfg(test)]
#[path = "wrapper_tests.rs"]
mod tests;
