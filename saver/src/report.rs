use crate::submit::ArchiveAttempt;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Render the summary report: totals, success rate to one decimal, then one
/// line per attempt grouped into successful and failed archives.
pub fn generate_report(attempts: &[ArchiveAttempt], generated_at: DateTime<Local>) -> String {
    let successful: Vec<&ArchiveAttempt> = attempts.iter().filter(|a| a.success).collect();
    let failed: Vec<&ArchiveAttempt> = attempts.iter().filter(|a| !a.success).collect();

    let success_rate = if attempts.is_empty() {
        0.0
    } else {
        successful.len() as f64 / attempts.len() as f64 * 100.0
    };

    let mut report = format!(
        "WAYBACK MACHINE BULK SAVE REPORT\n\
         Generated: {}\n\
         \n\
         SUMMARY:\n\
         Total URLs processed: {}\n\
         Successfully archived: {}\n\
         Failed to archive: {}\n\
         Success rate: {:.1}%\n\
         \n\
         SUCCESSFUL ARCHIVES:\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        attempts.len(),
        successful.len(),
        failed.len(),
        success_rate,
    );

    for attempt in &successful {
        match &attempt.archive_url {
            Some(location) => report.push_str(&format!("✅ {} -> {}\n", attempt.url, location)),
            None => report.push_str(&format!("✅ {}\n", attempt.url)),
        }
    }

    if !failed.is_empty() {
        report.push_str("\nFAILED ARCHIVES:\n");
        for attempt in &failed {
            report.push_str(&format!(
                "❌ {} - Error: {}\n",
                attempt.url,
                attempt.error.as_deref().unwrap_or("unknown")
            ));
        }
    }

    report
}

/// Write the report to `path` and echo it to stdout.
pub fn write_report(attempts: &[ArchiveAttempt], path: &Path) -> Result<()> {
    if attempts.is_empty() {
        warn!("No results to report");
        return Ok(());
    }

    let report = generate_report(attempts, Local::now());

    fs::write(path, &report)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Report saved to {}", path.display());
    println!("{}", report);

    Ok(())
}

/// Dump the raw attempt records as pretty JSON.
pub fn save_attempts_json(attempts: &[ArchiveAttempt], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(attempts).context("Failed to serialize attempts")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON file {}", path.display()))?;

    Ok(())
}
