// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = RouterConfig::new("counter");
    assert_eq!(cfg.parallel_actor, 8);
    assert_eq!(cfg.ipc_timeout, Duration::from_secs_f64(120.0));
    assert_eq!(cfg.adapter, "counter");
}

#[test]
fn builders_override_defaults() {
    let cfg = RouterConfig::new("echo")
        .with_parallel_actor(4)
        .with_ipc_timeout(Duration::from_millis(50));
    assert_eq!(cfg.parallel_actor, 4);
    assert_eq!(cfg.ipc_timeout, Duration::from_millis(50));
}
