use anyhow::Result;
use chrono::NaiveTime;
use clap::Parser;
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use wayback_saver::{Scheduler, WaybackClient};

/// Archive one URL in the Wayback Machine once per day at a fixed time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to archive once per day
    url: String,

    /// Time of day to run the save, 24-hour HH:MM (local time)
    #[arg(long, value_parser = parse_time)]
    at: NaiveTime,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("invalid time {:?}: {}", s, e))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let terminate = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&terminate))?;
    signal_hook::flag::register(SIGTERM, Arc::clone(&terminate))?;

    let mut scheduler = Scheduler::new();
    scheduler.add_daily(cli.url, cli.at);
    scheduler.run(&WaybackClient::new(), &terminate);

    Ok(())
}
