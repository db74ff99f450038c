use crate::input;
use crate::submit::{submit, ArchiveAttempt, SaveEndpoint, Sleeper};
use anyhow::Result;
use log::info;
use std::path::Path;
use std::time::Duration;

/// Submits a list of URLs one at a time, waiting a fixed delay between
/// consecutive requests, and accumulates every attempt it makes.
pub struct BulkSaver<E: SaveEndpoint> {
    endpoint: E,
    delay: Duration,
    results: Vec<ArchiveAttempt>,
}

impl<E: SaveEndpoint> BulkSaver<E> {
    pub fn new(endpoint: E, delay: Duration) -> Self {
        BulkSaver {
            endpoint,
            delay,
            results: Vec::new(),
        }
    }

    /// All attempts made so far, in submission order.
    pub fn results(&self) -> &[ArchiveAttempt] {
        &self.results
    }

    /// Submit each URL once, in input order, sleeping between consecutive
    /// submissions but not after the last one.
    pub fn save_list(&mut self, urls: &[String], sleeper: &mut impl Sleeper) -> &[ArchiveAttempt] {
        info!("Starting bulk save of {} URLs", urls.len());

        for (i, url) in urls.iter().enumerate() {
            info!("Processing {}/{}: {}", i + 1, urls.len(), url);

            let attempt = submit(&self.endpoint, url);
            self.results.push(attempt);

            if i + 1 < urls.len() {
                info!("Waiting {:.1}s before next request...", self.delay.as_secs_f64());
                sleeper.sleep(self.delay);
            }
        }

        &self.results
    }

    /// Submit every URL listed in a newline-delimited file. Blank lines and
    /// lines starting with `#` are skipped.
    pub fn save_from_file(
        &mut self,
        path: &Path,
        sleeper: &mut impl Sleeper,
    ) -> Result<&[ArchiveAttempt]> {
        let urls = input::read_url_file(path)?;
        info!("Loaded {} URLs from {}", urls.len(), path.display());
        Ok(self.save_list(&urls, sleeper))
    }
}
