use crate::submit::{submit, ArchiveAttempt, SaveEndpoint};
use chrono::{Days, Local, NaiveDateTime, NaiveTime};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

struct DailyJob {
    url: String,
    at: NaiveTime,
    next_run: Option<NaiveDateTime>,
}

/// Recurring daily save jobs, driven by a once-per-second polling loop.
/// The scheduler owns its job list; nothing is registered globally.
#[derive(Default)]
pub struct Scheduler {
    jobs: Vec<DailyJob>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler { jobs: Vec::new() }
    }

    /// Register a job that saves `url` once per day at `at` (local time).
    /// The first run happens at the next occurrence of that time of day.
    pub fn add_daily(&mut self, url: impl Into<String>, at: NaiveTime) {
        self.jobs.push(DailyJob {
            url: url.into(),
            at,
            next_run: None,
        });
    }

    /// Fire every job whose scheduled time has passed, at most once per day
    /// each. `now` is injected so the due-time logic is testable.
    pub fn run_pending(
        &mut self,
        endpoint: &impl SaveEndpoint,
        now: NaiveDateTime,
    ) -> Vec<ArchiveAttempt> {
        let mut attempts = Vec::new();

        for job in &mut self.jobs {
            let next = *job
                .next_run
                .get_or_insert_with(|| next_occurrence(now, job.at));

            if now >= next {
                info!("Running daily save for {}", job.url);
                attempts.push(submit(endpoint, &job.url));
                job.next_run = Some(next_occurrence(now, job.at));
            }
        }

        attempts
    }

    /// Blocking polling loop: check for due jobs about once per second until
    /// `terminate` is set, then exit gracefully.
    pub fn run(&mut self, endpoint: &impl SaveEndpoint, terminate: &AtomicBool) {
        println!("Scheduler started. Press Ctrl+C to stop");

        while !terminate.load(Ordering::Relaxed) {
            self.run_pending(endpoint, Local::now().naive_local());
            thread::sleep(Duration::from_secs(1));
        }

        println!("Scheduler stopped");
    }
}

/// Next occurrence of `at` strictly after `now`'s time of day: today if the
/// time has not passed yet, otherwise tomorrow.
fn next_occurrence(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    if now.time() < at {
        now.date().and_time(at)
    } else {
        (now.date() + Days::new(1)).and_time(at)
    }
}
