use std::fs;
use std::io;
use std::path::Path;

use super::DomainSet;

/// Parses a domain list: one entry per line, `#` comments and blank lines
/// ignored, surrounding quotes and trailing commas stripped, lowercased.
///
/// Accepts plain text lists as well as one-entry-per-line JSON arrays or PHP
/// arrays (`"foo.com",`).
pub fn parse_domain_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_matches(|c: char| matches!(c, '"' | '\'' | ',')).trim())
        .filter(|entry| !entry.is_empty() && !matches!(*entry, "[" | "]"))
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Reads and parses a list file into a [`DomainSet`].
pub fn load_domain_list(path: impl AsRef<Path>) -> io::Result<DomainSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let entries = parse_domain_list(&text);
    tracing::debug!(path = %path.display(), entries = entries.len(), "domain list loaded");
    Ok(DomainSet::from_entries(entries))
}
