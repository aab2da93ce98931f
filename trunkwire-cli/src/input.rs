//! Hex input handling

use std::io::BufRead;
use trunkwire_core::{Error, Result};

/// Decode a hex string split by whitespace, ':' or '-' separators
///
/// Each separated group may carry its own `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || c == ':' || c == '-')
        .map(|group| {
            group
                .strip_prefix("0x")
                .or_else(|| group.strip_prefix("0X"))
                .unwrap_or(group)
        })
        .collect();

    hex::decode(&digits).map_err(|e| Error::invalid_parameter("hex".to_string(), e.to_string()))
}

/// A non-empty input line and its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub number: usize,
    pub text: String,
}

/// Read hex lines, skipping blank lines and `#` comments
pub fn read_lines(reader: impl BufRead) -> Result<Vec<InputLine>> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        lines.push(InputLine {
            number: idx + 1,
            text: text.to_string(),
        });
    }
    Ok(lines)
}
