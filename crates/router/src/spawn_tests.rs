// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serial_test::serial;

use super::*;

#[test]
#[serial]
fn env_override_wins_over_exe_relative_search() {
    std::env::set_var("ENVPOOL_WORKER_BIN", "/opt/envpool/envpool-workerd");
    let path = locate_worker_binary().unwrap();
    std::env::remove_var("ENVPOOL_WORKER_BIN");
    assert_eq!(path, PathBuf::from("/opt/envpool/envpool-workerd"));
}
