// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use envpool_adapters::EchoWrapper;
use envpool_core::EnvId;
use envpool_wire::{encode, read_message, write_message};

async fn round_trip(input: &[Request]) -> Vec<Response> {
    let mut in_buf = Vec::new();
    for req in input {
        write_message(&mut in_buf, &encode(req).unwrap()).await.unwrap();
    }
    let mut reader = std::io::Cursor::new(in_buf);
    let mut out_buf = Vec::new();

    serve(Box::new(EchoWrapper::new()), &mut reader, &mut out_buf).await.unwrap();

    let mut responses = Vec::new();
    let mut cursor = std::io::Cursor::new(out_buf);
    while let Ok(bytes) = read_message(&mut cursor).await {
        responses.push(envpool_wire::decode(&bytes).unwrap());
    }
    responses
}

#[tokio::test]
async fn create_reset_step_round_trips() {
    let requests = vec![
        Request::Create { request_id: "1".into(), env_id: EnvId::new(0) },
        Request::Reset {
            request_id: "2".into(),
            env_id: EnvId::new(0),
            options: Default::default(),
        },
        Request::Step { request_id: "3".into(), env_id: EnvId::new(0), action: "hi".into() },
    ];
    let responses = round_trip(&requests).await;

    assert!(matches!(responses[0], Response::Created { .. }));
    assert!(matches!(responses[1], Response::Reset { .. }));
    match &responses[2] {
        Response::Stepped { payload, .. } => assert_eq!(payload.observation, "hi"),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn unknown_env_id_yields_err_response() {
    let requests =
        vec![Request::Step { request_id: "1".into(), env_id: EnvId::new(99), action: "x".into() }];
    let responses = round_trip(&requests).await;

    match &responses[0] {
        Response::Err { code, .. } => assert_eq!(code, "ENV_NOT_FOUND"),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn shutdown_drains_live_environments_and_stops_loop() {
    let requests = vec![
        Request::Create { request_id: "1".into(), env_id: EnvId::new(0) },
        Request::Shutdown { request_id: "2".into() },
        // Never reached: loop exits after Shutdown.
        Request::Ping { request_id: "3".into() },
    ];
    let responses = round_trip(&requests).await;

    assert_eq!(responses.len(), 2);
    assert!(matches!(responses[1], Response::ShutdownAck { .. }));
}
