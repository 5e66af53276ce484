// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const ALL_KINDS: [EnvErrorKind; 8] = [
    EnvErrorKind::EnvNotFound,
    EnvErrorKind::EnvNotReady,
    EnvErrorKind::EnvClosed,
    EnvErrorKind::EpisodeFinished,
    EnvErrorKind::TaskOutOfRange,
    EnvErrorKind::InvalidAction,
    EnvErrorKind::ConfigMissing,
    EnvErrorKind::Internal,
];

#[test]
fn code_round_trips_through_from_code() {
    for kind in ALL_KINDS {
        assert_eq!(EnvErrorKind::from_code(kind.code()), kind);
    }
}

#[test]
fn unknown_code_flattens_to_internal() {
    assert_eq!(EnvErrorKind::from_code("SOMETHING_NEW"), EnvErrorKind::Internal);
}

#[test]
fn only_env_not_ready_is_retryable() {
    for kind in ALL_KINDS {
        assert_eq!(kind.retryable(), kind == EnvErrorKind::EnvNotReady);
    }
}

#[test]
fn http_status_matches_taxonomy() {
    assert_eq!(EnvErrorKind::EnvNotFound.http_status(), 404);
    assert_eq!(EnvErrorKind::EnvNotReady.http_status(), 503);
    assert_eq!(EnvErrorKind::EnvClosed.http_status(), 409);
    assert_eq!(EnvErrorKind::EpisodeFinished.http_status(), 409);
    assert_eq!(EnvErrorKind::TaskOutOfRange.http_status(), 400);
    assert_eq!(EnvErrorKind::InvalidAction.http_status(), 400);
    assert_eq!(EnvErrorKind::ConfigMissing.http_status(), 503);
    assert_eq!(EnvErrorKind::Internal.http_status(), 500);
}

#[test]
fn env_error_exposes_kind_accessors() {
    let err = EnvError::env_not_found("no such env");
    assert_eq!(err.code(), "ENV_NOT_FOUND");
    assert_eq!(err.http_status(), 404);
    assert!(!err.retryable());
    assert_eq!(err.to_string(), "ENV_NOT_FOUND: no such env");
}

#[test]
fn internal_preserves_original_message() {
    let err = EnvError::internal("adapter panicked: boom");
    assert_eq!(err.code(), "INTERNAL_ERROR");
    assert_eq!(err.message, "adapter panicked: boom");
}
