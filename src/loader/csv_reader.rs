//! CSV input: delimiter sniffing and Latin-1 fallback.

use crate::errors::AppResult;
use crate::loader::raw_table::{RawCell, RawTable};
use std::fs;
use std::path::Path;

pub fn read_csv(path: &Path) -> AppResult<RawTable> {
    let bytes = fs::read(path)?;
    read_csv_bytes(&bytes)
}

pub fn read_csv_bytes(bytes: &[u8]) -> AppResult<RawTable> {
    let text = decode(bytes);
    let text = text.trim_start_matches('\u{feff}');
    let delimiter = sniff_delimiter(text);

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(RawCell::text).collect());
    }

    Ok(RawTable::new(headers, rows))
}

/// UTF-8 when valid, Latin-1 otherwise (every byte maps to one char).
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// `;` when the header line has more semicolons than commas.
fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    let commas = header.matches(',').count();
    let semicolons = header.matches(';').count();
    if semicolons > commas { b';' } else { b',' }
}
