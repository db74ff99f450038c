use anyhow::Result;
use clap::Parser;
use wayback_saver::{submit, submit_with_retry, BusyRetry, ThreadSleeper, WaybackClient};

/// Ask the Wayback Machine to archive a single URL
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to archive
    url: String,

    /// Keep resubmitting until the save succeeds (no delay between attempts)
    #[arg(long)]
    retry: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let client = WaybackClient::new();

    let attempt = if cli.retry {
        submit_with_retry(&client, &cli.url, &BusyRetry, &mut ThreadSleeper)
    } else {
        submit(&client, &cli.url)
    };

    if attempt.success {
        println!(
            "Successfully saved {} to the Wayback Machine Archive",
            attempt.url
        );
        if let Some(archive_url) = &attempt.archive_url {
            println!("Archived at {}", archive_url);
        }
    } else {
        println!(
            "Failed to save {}. {}",
            attempt.url,
            attempt.error.as_deref().unwrap_or("unknown error")
        );
        std::process::exit(1);
    }

    Ok(())
}
