// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn request_id_is_extracted_for_every_variant() {
    let reqs = [
        Request::Create { request_id: "a".into(), env_id: EnvId::new(0) },
        Request::Step { request_id: "b".into(), env_id: EnvId::new(0), action: "go".into() },
        Request::Reset { request_id: "c".into(), env_id: EnvId::new(0), options: ResetOptions::new() },
        Request::Close { request_id: "d".into(), env_id: EnvId::new(0) },
        Request::Shutdown { request_id: "e".into() },
        Request::Ping { request_id: "f".into() },
    ];
    let ids: Vec<&str> = reqs.iter().map(Request::request_id).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn create_serializes_with_tagged_command() {
    let req = Request::Create { request_id: "r1".into(), env_id: EnvId::new(5) };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["command"], "Create");
    assert_eq!(value["env_id"], 5);
}

#[test]
fn reset_options_default_when_absent() {
    let json = r#"{"command":"Reset","request_id":"r1","env_id":2}"#;
    let req: Request = serde_json::from_str(json).unwrap();
    match req {
        Request::Reset { options, .. } => assert_eq!(options, ResetOptions::new()),
        other => panic!("unexpected variant: {other:?}"),
    }
}
