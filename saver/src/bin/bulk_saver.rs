use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use wayback_saver::input;
use wayback_saver::report::{save_attempts_json, write_report};
use wayback_saver::{BulkSaver, ThreadSleeper, WaybackClient};

/// Archive a list of URLs in the Wayback Machine and write a summary report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Archive the built-in example URLs (the default when no source is given)
    #[arg(long, conflicts_with_all = ["file", "manual"])]
    examples: bool,

    /// Read URLs from a file, one per line; blank lines and # comments ignored
    #[arg(long, conflicts_with = "manual")]
    file: Option<PathBuf>,

    /// Read URLs from stdin, one per line, ending at the first blank line
    #[arg(long)]
    manual: bool,

    /// Seconds to wait between consecutive save requests
    #[arg(long, default_value_t = 3.0)]
    delay: f64,

    /// Where to write the text report
    #[arg(long, default_value = "wayback_report.txt")]
    report: PathBuf,

    /// Also dump the raw attempt records as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut saver = BulkSaver::new(WaybackClient::new(), Duration::from_secs_f64(cli.delay));
    let mut sleeper = ThreadSleeper;

    if let Some(path) = &cli.file {
        if !path.exists() {
            println!("Creating example file: {}", path.display());
            input::write_template_file(path)?;
            println!(
                "Example URLs added to {}. Edit the file and run again.",
                path.display()
            );
            return Ok(());
        }
        saver.save_from_file(path, &mut sleeper)?;
    } else if cli.manual {
        println!("Enter URLs (one per line, empty line to finish):");
        let urls = input::collect_urls(std::io::stdin().lock())?;
        if urls.is_empty() {
            println!("No URLs entered.");
            return Ok(());
        }
        saver.save_list(&urls, &mut sleeper);
    } else {
        saver.save_list(&input::example_urls(), &mut sleeper);
    }

    write_report(saver.results(), &cli.report)?;

    if let Some(path) = &cli.json {
        save_attempts_json(saver.results(), path)?;
    }

    Ok(())
}
