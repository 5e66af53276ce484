// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A deterministic, dependency-free adapter: the "task" is a target count,
//! `step` increments a counter by the action's value, and the episode is
//! `done` once `max_steps` increments have happened. Useful for exercising
//! the Router/Worker plumbing without a real simulator.

use std::collections::HashMap;

use async_trait::async_trait;
use envpool_core::{EnvError, EnvId, EnvWrapper, ResetOptions, StepPayload};
use serde_json::{json, Value};

/// Number of distinct task ids this adapter recognizes; `reset`'s `task_id`
/// option must fall in `[0, NUM_TASKS)`.
const NUM_TASKS: i64 = 16;
const DEFAULT_MAX_STEPS: u64 = 10;

#[derive(Debug, Clone)]
struct Instance {
    task_id: Option<i64>,
    count: u64,
    max_steps: u64,
    done: bool,
    deleted: bool,
}

impl Instance {
    fn fresh() -> Self {
        Self { task_id: None, count: 0, max_steps: DEFAULT_MAX_STEPS, done: false, deleted: false }
    }
}

/// Reference [`EnvWrapper`] built around an in-memory counter per instance.
#[derive(Debug, Default)]
pub struct CounterWrapper {
    instances: HashMap<EnvId, Instance>,
}

impl CounterWrapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate instance state the way a reference adapter must: unknown,
    /// deleted, and (for non-reset calls) finished instances all raise.
    fn check_id(&self, id: EnvId, is_reset: bool) -> Result<(), EnvError> {
        let inst = self
            .instances
            .get(&id)
            .ok_or_else(|| EnvError::env_not_found(format!("environment {id} is not valid")))?;
        if inst.deleted {
            return Err(EnvError::env_closed(format!("environment {id} has been deleted")));
        }
        if !is_reset && inst.done {
            return Err(EnvError::episode_finished(format!("environment {id} has finished")));
        }
        Ok(())
    }
}

#[async_trait]
impl EnvWrapper for CounterWrapper {
    async fn create_with_id(&mut self, id: EnvId) -> Result<Value, EnvError> {
        self.instances.insert(id, Instance::fresh());
        Ok(json!({ "env_id": id.get() }))
    }

    async fn step(&mut self, id: EnvId, action: &str) -> Result<StepPayload, EnvError> {
        self.check_id(id, false)?;
        let delta: i64 = action
            .trim()
            .parse()
            .map_err(|_| EnvError::invalid_action(format!("action '{action}' is not an integer")))?;

        let inst = self.instances.get_mut(&id).expect("checked above");
        if inst.task_id.is_none() {
            return Err(EnvError::invalid_action(format!("environment {id} has not been reset")));
        }

        inst.count = inst.count.saturating_add(delta.unsigned_abs());
        inst.done = inst.count >= inst.max_steps;

        Ok(StepPayload {
            observation: inst.count.to_string(),
            reward: if inst.done { 1.0 } else { 0.0 },
            done: inst.done,
            info: json!({ "count": inst.count, "max_steps": inst.max_steps }),
        })
    }

    async fn reset(&mut self, id: EnvId, options: ResetOptions) -> Result<Value, EnvError> {
        self.check_id(id, true)?;

        let task_id = options.get_i64("task_id")?.unwrap_or(0);
        if !(0..NUM_TASKS).contains(&task_id) {
            return Err(EnvError::task_out_of_range(format!(
                "task_id {task_id} out of range [0, {NUM_TASKS})"
            )));
        }
        let max_steps = options
            .get_i64("max_steps")?
            .map(|n| n.max(1) as u64)
            .unwrap_or(DEFAULT_MAX_STEPS);

        let inst = self.instances.get_mut(&id).expect("checked above");
        inst.task_id = Some(task_id);
        inst.count = 0;
        inst.max_steps = max_steps;
        inst.done = false;

        Ok(json!({ "env_id": id.get(), "observation": "0", "task_id": task_id }))
    }

    async fn close(&mut self, id: EnvId) -> Result<bool, EnvError> {
        self.check_id(id, true)?;
        let inst = self.instances.get_mut(&id).expect("checked above");
        inst.deleted = true;
        Ok(true)
    }

    fn ls(&self) -> Vec<EnvId> {
        self.instances.iter().filter(|(_, inst)| !inst.deleted).map(|(id, _)| *id).collect()
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
