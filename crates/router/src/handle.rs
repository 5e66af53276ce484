// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Router-side handle for a single worker slot: the spawned process (or
//! stand-in), and the pipe mutex that enforces the 1:1 FIFO contract.

use std::time::Duration;

use envpool_core::{EnvError, WorkerId};
use envpool_wire::{read_response_timeout, write_message, encode, ProtocolError, Request, Response};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::Mutex;

use crate::process::WorkerProcess;

/// The two stdio halves of a worker's pipe, boxed so the Router doesn't
/// care whether they came from a real subprocess or an in-memory duplex.
pub struct WorkerChannel {
    reader: Box<dyn AsyncRead + Send + Unpin>,
    writer: Box<dyn AsyncWrite + Send + Unpin>,
}

impl WorkerChannel {
    pub fn new(
        reader: impl AsyncRead + Send + Unpin + 'static,
        writer: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Self {
        Self { reader: Box::new(reader), writer: Box::new(writer) }
    }

    /// Send one request and await its matching response, both bounded by
    /// `timeout`. Held by the caller's lock on [`WorkerHandle::channel`] for
    /// the full turn: this is what keeps the pipe FIFO.
    async fn send(&mut self, request: &Request, timeout: Duration) -> Result<Response, ProtocolError> {
        let bytes = encode(request)?;
        tokio::time::timeout(timeout, write_message(&mut self.writer, &bytes))
            .await
            .map_err(|_| ProtocolError::Timeout)??;
        read_response_timeout(&mut self.reader, timeout).await
    }
}

/// Everything the Router keeps for one worker slot.
pub struct WorkerHandle {
    pub id: WorkerId,
    process: Mutex<Box<dyn WorkerProcess>>,
    channel: Mutex<WorkerChannel>,
}

impl WorkerHandle {
    pub fn new(id: WorkerId, process: Box<dyn WorkerProcess>, channel: WorkerChannel) -> Self {
        Self { id, process: Mutex::new(process), channel: Mutex::new(channel) }
    }

    /// Liveness gate: the Router never sends to a worker it has observed
    /// dead, and never silently re-routes to a different one.
    pub async fn is_alive(&self) -> bool {
        self.process.lock().await.is_alive()
    }

    /// Send `request` and await its response under `timeout`, holding the
    /// per-worker mutex for the entire turn.
    ///
    /// A timeout or I/O failure here does *not* mark the worker dead — the
    /// source's chosen policy is to leave it running and let the next
    /// independent request re-establish the pipe cadence (see §4.5).
    pub async fn send(&self, request: Request, timeout: Duration) -> Result<Response, EnvError> {
        if !self.is_alive().await {
            return Err(EnvError::env_not_ready(format!("worker {} is not running", self.id)));
        }

        let mut channel = self.channel.lock().await;
        match channel.send(&request, timeout).await {
            Ok(response) => Ok(response),
            Err(ProtocolError::Timeout) => {
                Err(EnvError::env_not_ready(format!("worker {} timed out", self.id)))
            }
            Err(e) => Err(EnvError::env_not_ready(format!("worker {} pipe error: {e}", self.id))),
        }
    }

    /// Best-effort `Shutdown` send, then join with `grace`; kill and join
    /// again with a shorter grace if the worker doesn't exit in time.
    pub async fn shutdown(&self, grace: Duration, kill_grace: Duration) {
        let shutdown_request = Request::Shutdown { request_id: "__shutdown__".to_string() };
        let _ = self.send(shutdown_request, grace).await;

        let mut process = self.process.lock().await;
        if tokio::time::timeout(grace, process.wait()).await.is_err() {
            process.kill();
            let _ = tokio::time::timeout(kill_grace, process.wait()).await;
        }
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
