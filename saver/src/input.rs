use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Built-in URL list used when no input source is configured.
pub const EXAMPLE_URLS: &[&str] = &[
    "https://www.python.org",
    "https://github.com",
    "https://stackoverflow.com",
    "https://www.wikipedia.org",
];

pub fn example_urls() -> Vec<String> {
    EXAMPLE_URLS.iter().map(|url| url.to_string()).collect()
}

/// Read a newline-delimited URL file, skipping blank lines and `#` comments.
pub fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL file {}", path.display()))?;

    let urls = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(urls)
}

/// Create a commented template URL file seeded with the example URLs, for
/// when the configured input file does not exist yet.
pub fn write_template_file(path: &Path) -> Result<()> {
    let mut template = String::from(
        "# Add your URLs here, one per line\n# Lines starting with # are ignored\n",
    );
    for url in EXAMPLE_URLS {
        template.push_str(url);
        template.push('\n');
    }

    fs::write(path, template)
        .with_context(|| format!("Failed to write template file {}", path.display()))
}

/// Collect manually entered URLs, one per line, stopping at the first blank
/// line. Takes any `BufRead` so it works on stdin and in tests alike.
pub fn collect_urls(reader: impl BufRead) -> Result<Vec<String>> {
    let mut urls = Vec::new();

    for line in reader.lines() {
        let line = line.context("Failed to read URL from input")?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        urls.push(line.to_string());
    }

    Ok(urls)
}
