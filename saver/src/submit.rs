use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{error, info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base of the Wayback Machine save endpoint; the URL to archive is appended.
pub const SAVE_ENDPOINT: &str = "https://web.archive.org/save/";

/// Record of one submission of one URL, with its outcome.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArchiveAttempt {
    pub url: String,
    pub timestamp: DateTime<Local>,
    pub success: bool,
    pub archive_url: Option<String>,
    pub error: Option<String>,
}

/// What the archiving service answered to one save request.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveResponse {
    pub status: u16,
    pub archive_url: Option<String>,
}

/// The seam in front of the single HTTP call, so tests can script responses.
pub trait SaveEndpoint {
    fn save(&self, url: &str) -> Result<SaveResponse>;
}

pub struct WaybackClient {
    client: Client,
    save_root: String,
}

impl WaybackClient {
    pub fn new() -> Self {
        WaybackClient {
            client: Client::new(),
            save_root: SAVE_ENDPOINT.to_string(),
        }
    }
}

impl Default for WaybackClient {
    fn default() -> Self {
        WaybackClient::new()
    }
}

impl SaveEndpoint for WaybackClient {
    fn save(&self, url: &str) -> Result<SaveResponse> {
        let response = self
            .client
            .get(format!("{}{}", self.save_root, url))
            .send()
            .context("Failed to send save request")?;

        let status = response.status().as_u16();

        // A successful save answers with the snapshot location in the
        // Content-Location header, as a path relative to the archive host.
        let archive_url = response
            .headers()
            .get("content-location")
            .and_then(|value| value.to_str().ok())
            .map(|location| {
                if location.starts_with('/') {
                    format!("https://web.archive.org{}", location)
                } else {
                    location.to_string()
                }
            });

        Ok(SaveResponse {
            status,
            archive_url,
        })
    }
}

/// Submit one URL for archiving. Every outcome, including a transport error,
/// becomes an `ArchiveAttempt`; this never fails outright.
pub fn submit(endpoint: &impl SaveEndpoint, url: &str) -> ArchiveAttempt {
    let mut attempt = ArchiveAttempt {
        url: url.to_string(),
        timestamp: Local::now(),
        success: false,
        archive_url: None,
        error: None,
    };

    if url.trim().is_empty() {
        attempt.error = Some("URL is empty".to_string());
        return attempt;
    }

    info!("Attempting to save: {}", url);

    match endpoint.save(url) {
        Ok(response) if response.status == 200 => {
            attempt.success = true;
            attempt.archive_url = response.archive_url;
            match &attempt.archive_url {
                Some(location) => info!("Successfully archived: {} -> {}", url, location),
                None => info!("Successfully saved {} to the Wayback Machine Archive", url),
            }
        }
        Ok(response) => {
            error!("Failed to save {}. Status code: {}", url, response.status);
            attempt.error = Some(format!("Status code: {}", response.status));
        }
        Err(e) => {
            error!("Failed to archive {}: {:#}", url, e);
            attempt.error = Some(format!("{:#}", e));
        }
    }

    attempt
}

/// Decides whether (and after how long) a failed submission is retried.
pub trait RetryPolicy {
    /// Delay before the next attempt after `failures` failed ones so far,
    /// or `None` to give up.
    fn next_delay(&self, failures: u32) -> Option<Duration>;
}

/// Resubmits immediately and forever. This reproduces the original retry
/// behavior exactly: no delay between attempts and no failure cap, so a
/// permanently failing URL never returns. Kept as a documented quirk.
pub struct BusyRetry;

impl RetryPolicy for BusyRetry {
    fn next_delay(&self, _failures: u32) -> Option<Duration> {
        Some(Duration::ZERO)
    }
}

/// Retries at most `max_retries` times, waiting `delay` between attempts.
pub struct LimitedRetry {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy for LimitedRetry {
    fn next_delay(&self, failures: u32) -> Option<Duration> {
        if failures > self.max_retries {
            None
        } else {
            Some(self.delay)
        }
    }
}

/// Injection point for the blocking sleeps, so tests can count them.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Submit one URL, resubmitting per `policy` until it succeeds or the policy
/// gives up. With `BusyRetry` this only ever returns a successful attempt.
pub fn submit_with_retry(
    endpoint: &impl SaveEndpoint,
    url: &str,
    policy: &impl RetryPolicy,
    sleeper: &mut impl Sleeper,
) -> ArchiveAttempt {
    let mut failures = 0u32;
    loop {
        let attempt = submit(endpoint, url);
        if attempt.success {
            return attempt;
        }

        failures += 1;
        match policy.next_delay(failures) {
            Some(delay) => {
                warn!("Retrying {}...", url);
                if !delay.is_zero() {
                    sleeper.sleep(delay);
                }
            }
            None => return attempt,
        }
    }
}
