use super::{CountingSleeper, MockEndpoint, ScriptedResponse};
use crate::submit::{submit, submit_with_retry, BusyRetry, LimitedRetry};
use std::time::Duration;

#[test]
fn submit_succeeds_on_status_200() {
    let endpoint = MockEndpoint::always(200);

    let attempt = submit(&endpoint, "https://a.example");

    assert!(attempt.success);
    assert_eq!(attempt.url, "https://a.example");
    assert_eq!(attempt.error, None);
    assert_eq!(endpoint.calls.get(), 1);
}

#[test]
fn submit_captures_archive_location() {
    let endpoint = MockEndpoint::with_script(vec![ScriptedResponse::StatusWithLocation(
        200,
        "https://web.archive.org/web/20240101000000/https://a.example",
    )]);

    let attempt = submit(&endpoint, "https://a.example");

    assert!(attempt.success);
    assert_eq!(
        attempt.archive_url.as_deref(),
        Some("https://web.archive.org/web/20240101000000/https://a.example")
    );
}

#[test]
fn submit_fails_on_non_200_status() {
    let endpoint = MockEndpoint::always(503);

    let attempt = submit(&endpoint, "https://a.example");

    assert!(!attempt.success);
    assert_eq!(attempt.archive_url, None);
    assert_eq!(attempt.error.as_deref(), Some("Status code: 503"));
}

#[test]
fn submit_fails_on_transport_error() {
    let endpoint =
        MockEndpoint::with_script(vec![ScriptedResponse::TransportError("connection refused")]);

    let attempt = submit(&endpoint, "https://a.example");

    assert!(!attempt.success);
    assert!(attempt.error.unwrap().contains("connection refused"));
}

#[test]
fn submit_rejects_empty_url_without_calling_endpoint() {
    let endpoint = MockEndpoint::always(200);

    let attempt = submit(&endpoint, "  ");

    assert!(!attempt.success);
    assert_eq!(attempt.error.as_deref(), Some("URL is empty"));
    assert_eq!(endpoint.calls.get(), 0);
}

// With N failures before the first success, the busy retry makes exactly
// N+1 calls and returns the successful attempt.
#[test]
fn busy_retry_calls_until_success() {
    let endpoint = MockEndpoint::with_script(vec![
        ScriptedResponse::Status(500),
        ScriptedResponse::Status(502),
        ScriptedResponse::TransportError("connection reset"),
        ScriptedResponse::Status(200),
    ]);
    let mut sleeper = CountingSleeper::default();

    let attempt = submit_with_retry(&endpoint, "https://a.example", &BusyRetry, &mut sleeper);

    assert!(attempt.success);
    assert_eq!(endpoint.calls.get(), 4);
    // The busy retry waits zero between attempts, so nothing actually sleeps
    assert!(sleeper.sleeps.is_empty());
}

#[test]
fn busy_retry_returns_immediately_on_first_success() {
    let endpoint = MockEndpoint::always(200);
    let mut sleeper = CountingSleeper::default();

    let attempt = submit_with_retry(&endpoint, "https://a.example", &BusyRetry, &mut sleeper);

    assert!(attempt.success);
    assert_eq!(endpoint.calls.get(), 1);
}

#[test]
fn limited_retry_gives_up_after_max_retries() {
    let endpoint = MockEndpoint::always(500);
    let policy = LimitedRetry {
        max_retries: 2,
        delay: Duration::from_secs(1),
    };
    let mut sleeper = CountingSleeper::default();

    let attempt = submit_with_retry(&endpoint, "https://a.example", &policy, &mut sleeper);

    assert!(!attempt.success);
    // Initial attempt plus two retries
    assert_eq!(endpoint.calls.get(), 3);
    assert_eq!(sleeper.sleeps, vec![Duration::from_secs(1); 2]);
}
