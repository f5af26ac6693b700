use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Row of a CSV URL list; other columns are ignored.
#[derive(Debug, Deserialize)]
struct UrlRecord {
    url: String,
}

/// Read a URL list from disk.
/// `.csv` files need a `url` column; anything else is read one URL per line,
/// skipping blank lines and `#` comments.
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_csv(path)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read URL list: {}", path.display()))?;
        Ok(parse_url_lines(&text))
    }
}

/// One URL per line; surrounding whitespace is trimmed.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn load_csv(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut urls = Vec::new();
    for result in rdr.deserialize() {
        let record: UrlRecord = result.context("Failed to deserialize CSV record")?;
        if record.url.is_empty() {
            continue;
        }
        urls.push(record.url);
    }
    Ok(urls)
}
