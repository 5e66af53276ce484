// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! envpool-core: shared types for the environment-pool and routing subsystem.
//!
//! This crate holds the three things a Worker and a Router must agree on
//! without talking to each other's source: the environment/worker identifier
//! types, the closed error taxonomy, and the Wrapper Contract that every
//! simulator adapter implements.

pub mod env_id;
pub mod error;
pub mod worker;
pub mod wrapper;

pub use env_id::EnvId;
pub use error::{EnvError, EnvErrorKind};
pub use worker::WorkerId;
pub use wrapper::{EnvWrapper, ResetOptions, StepPayload};
