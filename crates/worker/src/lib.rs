// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Worker serve loop: reads one [`Request`] at a time from stdin,
//! dispatches it to the owned adapter, and writes back one [`Response`].
//!
//! A Worker never handles more than one request concurrently — it is the
//! other half of the Router's per-worker mutex, not a second guarantee of
//! the same thing, since adapters are not required to be `Sync`.

use std::panic::AssertUnwindSafe;

use envpool_core::{EnvError, EnvWrapper};
use envpool_wire::{read_request, write_response, ProtocolError, Request, Response};
use futures_util::FutureExt;
use tokio::io::{AsyncRead, AsyncWrite};

/// Run the serve loop until the pipe closes or a `Shutdown` request drains
/// and exits cleanly. Returns `Ok(())` in both cases; I/O errors on the pipe
/// itself are surfaced so the binary can log and exit non-zero.
pub async fn serve<R, W>(
    mut wrapper: Box<dyn EnvWrapper>,
    mut reader: R,
    mut writer: W,
) -> Result<(), ProtocolError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let request = match read_request(&mut reader).await {
            Ok(req) => req,
            Err(ProtocolError::ConnectionClosed) => return Ok(()),
            Err(e) => return Err(e),
        };

        if let Request::Shutdown { request_id } = &request {
            for id in wrapper.ls() {
                let _ = wrapper.close(id).await;
            }
            write_response(&mut writer, &Response::ShutdownAck { request_id: request_id.clone() })
                .await?;
            return Ok(());
        }

        let response = dispatch(wrapper.as_mut(), request).await;
        write_response(&mut writer, &response).await?;
    }
}

async fn dispatch(wrapper: &mut dyn EnvWrapper, request: Request) -> Response {
    let request_id = request.request_id().to_string();

    let outcome = AssertUnwindSafe(run_request(wrapper, request)).catch_unwind().await;

    match outcome {
        Ok(Ok(response)) => response,
        Ok(Err(error)) => Response::err(request_id, &error),
        Err(panic) => {
            let message = panic_message(&panic);
            Response::err(request_id, &EnvError::internal(format!("adapter panicked: {message}")))
        }
    }
}

async fn run_request(wrapper: &mut dyn EnvWrapper, request: Request) -> Result<Response, EnvError> {
    match request {
        Request::Create { request_id, env_id } => {
            let observation = wrapper.create_with_id(env_id).await?;
            Ok(Response::Created { request_id, observation })
        }
        Request::Step { request_id, env_id, action } => {
            let payload = wrapper.step(env_id, &action).await?;
            Ok(Response::Stepped { request_id, payload })
        }
        Request::Reset { request_id, env_id, options } => {
            let observation = wrapper.reset(env_id, options).await?;
            Ok(Response::Reset { request_id, observation })
        }
        Request::Close { request_id, env_id } => {
            let closed = wrapper.close(env_id).await?;
            Ok(Response::Closed { request_id, closed })
        }
        Request::Ping { request_id } => Ok(Response::Pong { request_id }),
        Request::Shutdown { .. } => unreachable!("Shutdown handled by caller"),
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "serve_tests.rs"]
mod tests;
