// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The pool supervisor: spawns workers, assigns `EnvId`s, routes requests to
//! the worker the routing invariant names, enforces IPC timeouts, and joins
//! everything on shutdown.

use std::sync::Arc;
use std::time::Duration;

use envpool_core::{EnvError, EnvId, ResetOptions, StepPayload, WorkerId};
use envpool_wire::{Request, Response};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::io::BufReader;
use uuid::Uuid;

use crate::config::RouterConfig;
use crate::handle::{WorkerChannel, WorkerHandle};
use crate::process::ChildProcess;
use crate::spawn::spawn_worker;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);
const SHUTDOWN_KILL_GRACE: Duration = Duration::from_secs(5);

/// Pool supervisor. Cheap to clone (an `Arc` around the worker table);
/// every external request handler holds one.
#[derive(Clone)]
pub struct Router {
    workers: Arc<[WorkerHandle]>,
    next_id: Arc<Mutex<u64>>,
    config: Arc<RouterConfig>,
}

impl Router {
    /// Spawn `P` `envpool-workerd` subprocesses and wait for each to send
    /// its readiness handshake. If any worker fails to start or ready up,
    /// every already-started worker is killed and the error propagates —
    /// a failed `start` leaves no orphan processes.
    pub async fn start(config: RouterConfig) -> Result<Self, EnvError> {
        let mut handles = Vec::with_capacity(config.parallel_actor as usize);

        for i in 0..config.parallel_actor {
            match spawn_and_ready(i, &config).await {
                Ok(handle) => {
                    tracing::info!(worker_id = i, "worker ready");
                    handles.push(handle);
                }
                Err(e) => {
                    tracing::error!(worker_id = i, error = %e, "worker failed to start; tearing down pool");
                    for handle in &handles {
                        handle.shutdown(Duration::from_secs(1), Duration::from_secs(1)).await;
                    }
                    return Err(e);
                }
            }
        }

        Ok(Self::from_workers(handles, config))
    }

    /// Build a `Router` around already-constructed worker handles. Used by
    /// `start` and by test harnesses that inject their own worker stand-ins
    /// instead of spawning real subprocesses.
    pub fn from_workers(workers: Vec<WorkerHandle>, config: RouterConfig) -> Self {
        Self { workers: workers.into(), next_id: Arc::new(Mutex::new(0)), config: Arc::new(config) }
    }

    pub fn pool_width(&self) -> u32 {
        self.workers.len() as u32
    }

    /// Allocate the next `EnvId`, route it to `id mod P`, and send `Create`.
    /// The id is consumed even if the worker errors — it is never recycled.
    pub async fn create(&self) -> Result<EnvId, EnvError> {
        let id = {
            let mut next_id = self.next_id.lock();
            let id = EnvId::new(*next_id);
            *next_id += 1;
            id
        };

        let worker = self.worker_for(id)?;
        let request = Request::Create { request_id: new_request_id(), env_id: id };
        let response = worker.send(request, self.config.ipc_timeout).await?;
        expect_response(response, |r| matches!(r, Response::Created { .. }))?;
        Ok(id)
    }

    pub async fn step(&self, env_id: EnvId, action: String) -> Result<StepPayload, EnvError> {
        let worker = self.worker_for(env_id)?;
        let request = Request::Step { request_id: new_request_id(), env_id, action };
        let response = worker.send(request, self.config.ipc_timeout).await?;
        match response {
            Response::Stepped { payload, .. } => Ok(payload),
            Response::Err { .. } => Err(response.into_env_error()),
            other => Err(unexpected_response(other)),
        }
    }

    pub async fn reset(&self, env_id: EnvId, options: ResetOptions) -> Result<Value, EnvError> {
        let worker = self.worker_for(env_id)?;
        let request = Request::Reset { request_id: new_request_id(), env_id, options };
        let response = worker.send(request, self.config.ipc_timeout).await?;
        match response {
            Response::Reset { observation, .. } => Ok(observation),
            Response::Err { .. } => Err(response.into_env_error()),
            other => Err(unexpected_response(other)),
        }
    }

    pub async fn close(&self, env_id: EnvId) -> Result<bool, EnvError> {
        let worker = self.worker_for(env_id)?;
        let request = Request::Close { request_id: new_request_id(), env_id };
        let response = worker.send(request, self.config.ipc_timeout).await?;
        match response {
            Response::Closed { closed, .. } => Ok(closed),
            Response::Err { .. } => Err(response.into_env_error()),
            other => Err(unexpected_response(other)),
        }
    }

    /// `true` once the listener is live; independent of per-worker liveness
    /// (already enforced synchronously during `start`).
    pub fn health(&self) -> Value {
        serde_json::json!({ "status": "ok" })
    }

    /// Send `Shutdown` to every worker (best-effort), then join each with a
    /// grace period, killing stragglers. Consumes the Router.
    pub async fn shutdown(self) {
        let joins = self.workers.iter().map(|handle| handle.shutdown(SHUTDOWN_GRACE, SHUTDOWN_KILL_GRACE));
        futures::future::join_all(joins).await;
    }

    fn worker_for(&self, env_id: EnvId) -> Result<&WorkerHandle, EnvError> {
        let worker_id = env_id.route(self.pool_width());
        self.workers
            .get(worker_id.index())
            .ok_or_else(|| EnvError::env_not_found(format!("no worker for env {env_id}")))
    }
}

async fn spawn_and_ready(worker_id: u32, config: &RouterConfig) -> Result<WorkerHandle, EnvError> {
    let child = spawn_worker(worker_id, config.parallel_actor, &config.adapter)?;
    let mut child = child;
    let stdin = child.stdin.take().ok_or_else(|| EnvError::internal("worker has no stdin"))?;
    let stdout = child.stdout.take().ok_or_else(|| EnvError::internal("worker has no stdout"))?;

    let mut reader = BufReader::new(stdout);
    let ready = envpool_wire::read_response_timeout(&mut reader, config.ready_timeout)
        .await
        .map_err(|e| EnvError::env_not_ready(format!("worker {worker_id} failed to ready: {e}")))?;

    match ready {
        Response::Ready { .. } => {}
        Response::Err { code, message, .. } => {
            return Err(EnvError::env_not_ready(format!(
                "worker {worker_id} failed to start: {code}: {message}"
            )));
        }
        other => return Err(unexpected_response(other)),
    }

    let channel = WorkerChannel::new(reader, stdin);
    Ok(WorkerHandle::new(WorkerId::new(worker_id), Box::new(ChildProcess::new(child)), channel))
}

fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

fn expect_response(response: Response, matches_ok: impl Fn(&Response) -> bool) -> Result<(), EnvError> {
    if matches_ok(&response) {
        Ok(())
    } else if response.is_err() {
        Err(response.into_env_error())
    } else {
        Err(unexpected_response(response))
    }
}

fn unexpected_response(response: Response) -> EnvError {
    EnvError::internal(format!("unexpected response from worker: {response:?}"))
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
