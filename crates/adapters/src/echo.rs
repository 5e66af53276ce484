// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The simplest possible adapter: `step` reflects the action back as the
//! observation and never finishes on its own. Exists mainly for protocol
//! smoke tests where the episode semantics don't matter.

use std::collections::HashMap;

use async_trait::async_trait;
use envpool_core::{EnvError, EnvId, EnvWrapper, ResetOptions, StepPayload};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct Instance {
    active: bool,
    deleted: bool,
}

/// Reference [`EnvWrapper`] that echoes every action as its observation.
#[derive(Debug, Default)]
pub struct EchoWrapper {
    instances: HashMap<EnvId, Instance>,
}

impl EchoWrapper {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_id(&self, id: EnvId) -> Result<(), EnvError> {
        let inst = self
            .instances
            .get(&id)
            .ok_or_else(|| EnvError::env_not_found(format!("environment {id} is not valid")))?;
        if inst.deleted {
            return Err(EnvError::env_closed(format!("environment {id} has been deleted")));
        }
        Ok(())
    }
}

#[async_trait]
impl EnvWrapper for EchoWrapper {
    async fn create_with_id(&mut self, id: EnvId) -> Result<Value, EnvError> {
        self.instances.insert(id, Instance { active: false, deleted: false });
        Ok(json!({ "env_id": id.get() }))
    }

    async fn step(&mut self, id: EnvId, action: &str) -> Result<StepPayload, EnvError> {
        self.check_id(id)?;
        let inst = self.instances.get(&id).expect("checked above");
        if !inst.active {
            return Err(EnvError::invalid_action(format!("environment {id} has not been reset")));
        }
        Ok(StepPayload {
            observation: action.to_string(),
            reward: 0.0,
            done: false,
            info: Value::Null,
        })
    }

    async fn reset(&mut self, id: EnvId, _options: ResetOptions) -> Result<Value, EnvError> {
        self.check_id(id)?;
        let inst = self.instances.get_mut(&id).expect("checked above");
        inst.active = true;
        Ok(json!({ "env_id": id.get(), "observation": "" }))
    }

    async fn close(&mut self, id: EnvId) -> Result<bool, EnvError> {
        self.check_id(id)?;
        let inst = self.instances.get_mut(&id).expect("checked above");
        inst.deleted = true;
        Ok(true)
    }

    fn ls(&self) -> Vec<EnvId> {
        self.instances.iter().filter(|(_, inst)| !inst.deleted).map(|(id, _)| *id).collect()
    }
}

#[cfg(test)]
#[path = "echo_tests.rs"]
mod tests;
