// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn route_is_modulus_of_pool_width() {
    let pool_width = 4;
    for raw in 0..16u64 {
        let expected = (raw % pool_width as u64) as u32;
        assert_eq!(EnvId::new(raw).route(pool_width), WorkerId::new(expected));
    }
}

#[test]
fn route_is_stable_across_calls() {
    let id = EnvId::new(37);
    assert_eq!(id.route(8), id.route(8));
}

#[test]
fn display_matches_inner_value() {
    assert_eq!(EnvId::new(42).to_string(), "42");
}
