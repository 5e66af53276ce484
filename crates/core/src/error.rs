// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed environment-error taxonomy.
//!
//! This is the sole vocabulary shared between a Worker and the Router: on
//! the wire only `(code, message, retryable)` travel (see `envpool-wire`),
//! and the Router reconstructs an [`EnvError`] from the code on receipt.
//! Any adapter failure that isn't one of these kinds is flattened to
//! [`EnvErrorKind::Internal`].

use std::fmt;
use thiserror::Error;

/// One of the closed set of domain error kinds.
///
/// Adding a variant here requires updating `code`, `http_status`, and
/// `retryable` below (all exhaustive matches) and `from_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvErrorKind {
    EnvNotFound,
    EnvNotReady,
    EnvClosed,
    EpisodeFinished,
    TaskOutOfRange,
    InvalidAction,
    ConfigMissing,
    Internal,
}

impl EnvErrorKind {
    /// Stable wire code, e.g. `"ENV_NOT_FOUND"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::EnvNotFound => "ENV_NOT_FOUND",
            Self::EnvNotReady => "ENV_NOT_READY",
            Self::EnvClosed => "ENV_CLOSED",
            Self::EpisodeFinished => "EPISODE_FINISHED",
            Self::TaskOutOfRange => "TASK_OUT_OF_RANGE",
            Self::InvalidAction => "INVALID_ACTION",
            Self::ConfigMissing => "CONFIG_MISSING",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Default HTTP status for this kind.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::EnvNotFound => 404,
            Self::EnvNotReady => 503,
            Self::EnvClosed => 409,
            Self::EpisodeFinished => 409,
            Self::TaskOutOfRange => 400,
            Self::InvalidAction => 400,
            Self::ConfigMissing => 503,
            Self::Internal => 500,
        }
    }

    /// Whether a caller may safely re-issue the request unchanged.
    ///
    /// `ENV_NOT_READY` is the only retryable kind: it is the Router's
    /// generic signal for a transient pool problem (dead worker, timeout).
    pub const fn retryable(self) -> bool {
        matches!(self, Self::EnvNotReady)
    }

    /// Reconstruct a kind from its wire code. Unknown codes map to `Internal`
    /// so a Router never panics on a response from an older/newer Worker.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ENV_NOT_FOUND" => Self::EnvNotFound,
            "ENV_NOT_READY" => Self::EnvNotReady,
            "ENV_CLOSED" => Self::EnvClosed,
            "EPISODE_FINISHED" => Self::EpisodeFinished,
            "TASK_OUT_OF_RANGE" => Self::TaskOutOfRange,
            "INVALID_ACTION" => Self::InvalidAction,
            "CONFIG_MISSING" => Self::ConfigMissing,
            _ => Self::Internal,
        }
    }
}

impl fmt::Display for EnvErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A typed domain error: a closed-taxonomy kind plus a human-readable message.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct EnvError {
    pub kind: EnvErrorKind,
    pub message: String,
}

impl EnvError {
    pub fn new(kind: EnvErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn env_not_found(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::EnvNotFound, message)
    }

    pub fn env_not_ready(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::EnvNotReady, message)
    }

    pub fn env_closed(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::EnvClosed, message)
    }

    pub fn episode_finished(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::EpisodeFinished, message)
    }

    pub fn task_out_of_range(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::TaskOutOfRange, message)
    }

    pub fn invalid_action(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::InvalidAction, message)
    }

    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::ConfigMissing, message)
    }

    /// Flatten any non-domain failure into `INTERNAL_ERROR`, preserving its
    /// message. Used at the Worker boundary for unexpected adapter panics
    /// or I/O failures, and at the Router boundary for unrecognized codes.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EnvErrorKind::Internal, message)
    }

    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub const fn http_status(&self) -> u16 {
        self.kind.http_status()
    }

    pub const fn retryable(&self) -> bool {
        self.kind.retryable()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
