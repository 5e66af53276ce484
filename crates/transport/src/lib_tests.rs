// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request as HttpRequest, StatusCode};
use envpool_adapters::CounterWrapper;
use envpool_core::WorkerId;
use envpool_router::{RouterConfig, WorkerChannel, WorkerHandle, WorkerProcess};
use serde_json::Value;
use tokio::io::duplex;
use tower::ServiceExt;

use super::*;

struct FakeProcess {
    alive: Arc<AtomicBool>,
    task: Option<tokio::task::JoinHandle<()>>,
}

#[async_trait]
impl WorkerProcess for FakeProcess {
    fn is_alive(&mut self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    fn kill(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.alive.store(false, Ordering::SeqCst);
    }

    async fn wait(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        self.alive.store(false, Ordering::SeqCst);
    }
}

fn test_app(count: u32) -> AxumRouter {
    let mut handles = Vec::with_capacity(count as usize);
    for i in 0..count {
        let (router_reader, worker_writer) = duplex(8192);
        let (worker_reader, router_writer) = duplex(8192);

        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_task = Arc::clone(&alive);
        let task = tokio::spawn(async move {
            let _ = envpool_worker::serve(
                Box::new(CounterWrapper::new()),
                worker_reader,
                worker_writer,
            )
            .await;
            alive_for_task.store(false, Ordering::SeqCst);
        });

        let process = FakeProcess { alive, task: Some(task) };
        let channel = WorkerChannel::new(router_reader, router_writer);
        handles.push(WorkerHandle::new(WorkerId::new(i), Box::new(process), channel));
    }

    let config = RouterConfig::new("counter").with_parallel_actor(count);
    app(Router::from_workers(handles, config))
}

async fn json_body(response: AxumResponse) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app(1);
    let response = app
        .oneshot(HttpRequest::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_then_step_then_close_round_trips_over_http() {
    let app = test_app(2);

    let response = app
        .clone()
        .oneshot(HttpRequest::builder().method("POST").uri("/create").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response).await;
    let env_id = created["env_id"].as_u64().unwrap();

    let body = Body::from(serde_json::json!({"task_id": 0, "max_steps": 5}).to_string());
    let response = app
        .clone()
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri(format!("/reset/{env_id}"))
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = Body::from(serde_json::json!({"action": "1"}).to_string());
    let response = app
        .clone()
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri(format!("/step/{env_id}"))
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stepped = json_body(response).await;
    assert_eq!(stepped["done"], false);

    let response = app
        .clone()
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri(format!("/close/{env_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!(true));

    let response = app
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri(format!("/close/{env_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error = json_body(response).await;
    assert_eq!(error["error"]["code"], "ENV_CLOSED");
}

#[tokio::test]
async fn step_on_unknown_env_is_404() {
    let app = test_app(1);
    let body = Body::from(serde_json::json!({"action": "1"}).to_string());
    let response = app
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri("/step/999")
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = json_body(response).await;
    assert_eq!(error["error"]["code"], "ENV_NOT_FOUND");
    assert_eq!(error["error"]["retryable"], false);
}
