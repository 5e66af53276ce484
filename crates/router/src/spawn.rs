// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawns the real `envpool-workerd` subprocess and locates its binary next
//! to the currently-running executable.

use std::path::PathBuf;
use std::process::Stdio;

use envpool_core::EnvError;
use tokio::process::{Child, Command};

const WORKER_BIN_NAME: &str = "envpool-workerd";

/// Locate the sibling `envpool-workerd` binary.
///
/// Production binaries (built by the same `cargo build`) land next to
/// `envpoold` in the same directory. Integration tests run from
/// `target/<profile>/deps/`, one level below that, so the parent directory
/// is also tried. `ENVPOOL_WORKER_BIN` overrides both, for harnesses that
/// stage the binary elsewhere.
pub fn locate_worker_binary() -> Result<PathBuf, EnvError> {
    if let Ok(path) = std::env::var("ENVPOOL_WORKER_BIN") {
        return Ok(PathBuf::from(path));
    }

    let current_exe = std::env::current_exe()
        .map_err(|e| EnvError::config_missing(format!("cannot resolve current executable: {e}")))?;
    let exe_dir = current_exe
        .parent()
        .ok_or_else(|| EnvError::config_missing("current executable has no parent directory"))?;

    for candidate_dir in [exe_dir, exe_dir.parent().unwrap_or(exe_dir)] {
        let candidate = candidate_dir.join(WORKER_BIN_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(EnvError::config_missing(format!(
        "could not locate '{WORKER_BIN_NAME}' next to '{}'",
        current_exe.display()
    )))
}

/// Spawn one `envpool-workerd` subprocess with piped stdio.
pub fn spawn_worker(worker_id: u32, pool_width: u32, adapter: &str) -> Result<Child, EnvError> {
    let binary = locate_worker_binary()?;

    Command::new(binary)
        .arg("--worker-id")
        .arg(worker_id.to_string())
        .arg("--pool-width")
        .arg(pool_width.to_string())
        .arg("--adapter")
        .arg(adapter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| EnvError::internal(format!("failed to spawn worker {worker_id}: {e}")))
}

#[cfg(test)]
#[path = "spawn_tests.rs"]
mod tests;
