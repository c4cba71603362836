use futures::executor::block_on;

use super::*;

#[test]
fn uncancelled_token_passes_result_through() {
    let (token, _handle) = CancelToken::new();
    let out = block_on(token.run(async { Ok::<_, ApiError>(7) }));
    assert_eq!(out, Ok(7));
}

#[test]
fn uncancelled_token_passes_errors_through() {
    let token = CancelToken::detached();
    let out = block_on(token.run(async { Err::<(), _>(ApiError::Timeout(10)) }));
    assert_eq!(out, Err(ApiError::Timeout(10)));
}

#[test]
fn aborted_token_resolves_cancelled() {
    let (token, handle) = CancelToken::new();
    handle.abort();
    let out = block_on(token.run(async { Ok::<_, ApiError>("late") }));
    assert_eq!(out, Err(ApiError::Cancelled));
}

#[test]
fn registry_issue_aborts_previous_request_of_same_kind() {
    let mut registry = CancelRegistry::default();
    let first = registry.issue(RequestKind::Documents);
    let second = registry.issue(RequestKind::Documents);

    assert_eq!(block_on(first.run(async { Ok::<_, ApiError>(1) })), Err(ApiError::Cancelled));
    assert_eq!(block_on(second.run(async { Ok::<_, ApiError>(2) })), Ok(2));
}

#[test]
fn registry_kinds_are_independent() {
    let mut registry = CancelRegistry::default();
    let ask = registry.issue(RequestKind::Ask);
    let _upload = registry.issue(RequestKind::Upload);

    assert_eq!(block_on(ask.run(async { Ok::<_, ApiError>("answer") })), Ok("answer"));
}

#[test]
fn registry_cancel_all_aborts_everything() {
    let mut registry = CancelRegistry::default();
    let ask = registry.issue(RequestKind::Ask);
    let clear = registry.issue(RequestKind::Clear);
    registry.cancel_all();

    assert_eq!(block_on(ask.run(async { Ok::<_, ApiError>(()) })), Err(ApiError::Cancelled));
    assert_eq!(block_on(clear.run(async { Ok::<_, ApiError>(()) })), Err(ApiError::Cancelled));
}

#[test]
fn registry_cancel_single_kind() {
    let mut registry = CancelRegistry::default();
    let health = registry.issue(RequestKind::Health);
    registry.cancel(RequestKind::Health);
    registry.cancel(RequestKind::Ask);

    assert_eq!(block_on(health.run(async { Ok::<_, ApiError>(()) })), Err(ApiError::Cancelled));
}

#[test]
fn registry_issues_fresh_token_after_cancel_all() {
    let mut registry = CancelRegistry::default();
    let _stale = registry.issue(RequestKind::Ask);
    registry.cancel_all();

    let fresh = registry.issue(RequestKind::Ask);
    assert_eq!(block_on(fresh.run(async { Ok::<_, ApiError>("answer") })), Ok("answer"));
}
