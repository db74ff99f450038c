// Export the submitter modules
pub mod bulk;
pub mod input;
pub mod report;
pub mod schedule;
pub mod submit;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::bulk::BulkSaver;
pub use crate::report::{generate_report, save_attempts_json, write_report};
pub use crate::schedule::Scheduler;
pub use crate::submit::{
    submit, submit_with_retry, ArchiveAttempt, BusyRetry, LimitedRetry, RetryPolicy,
    SaveEndpoint, SaveResponse, Sleeper, ThreadSleeper, WaybackClient,
};
