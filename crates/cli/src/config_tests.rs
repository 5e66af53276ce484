// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serial_test::serial;

use super::*;

#[test]
#[serial]
fn defaults_match_documented_values() {
    let args = Args::parse_from(["envpoold"]);
    assert_eq!(args.port, 8000);
    assert_eq!(args.parallel_actor, DEFAULT_PARALLEL_ACTOR);
    assert_eq!(args.ipc_timeout, DEFAULT_IPC_TIMEOUT_SECS);
    assert_eq!(args.adapter, "counter");
    assert_eq!(args.verbose, 0);
}

#[test]
fn cli_flags_override_defaults() {
    let args = Args::parse_from([
        "envpoold",
        "--port",
        "9001",
        "--parallel-actor",
        "4",
        "--adapter",
        "echo",
        "-vv",
    ]);
    assert_eq!(args.port, 9001);
    assert_eq!(args.parallel_actor, 4);
    assert_eq!(args.adapter, "echo");
    assert_eq!(args.verbose, 2);
    assert_eq!(args.default_filter(), "trace");
}

#[test]
#[serial]
fn env_vars_win_over_built_in_defaults() {
    std::env::set_var("ENVPOOL_PORT", "9500");
    let args = Args::parse_from(["envpoold"]);
    std::env::remove_var("ENVPOOL_PORT");
    assert_eq!(args.port, 9500);
}

#[test]
fn ipc_timeout_converts_to_duration() {
    let args = Args::parse_from(["envpoold", "--ipc-timeout", "2.5"]);
    assert_eq!(args.ipc_timeout(), Duration::from_secs_f64(2.5));
}
