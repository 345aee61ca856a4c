//! # Bulk Input
//!
//! Reads the text handed to the pipeline. Every source is flattened to
//! lines and the sources are joined with `\n`:
//!
//! - `-` or no path at all: standard input.
//! - `*.csv`: decoded with the `csv` crate (no header row, ragged rows
//!   allowed); each non-empty cell becomes one line, so quoted cells that
//!   contain commas reach the tokenizer intact.
//! - anything else: read as UTF-8 text, invalid sequences replaced.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read and concatenate all inputs. An empty list reads standard input.
pub fn read_inputs(paths: &[PathBuf]) -> Result<String> {
    if paths.is_empty() {
        return read_stdin();
    }

    let mut parts = Vec::with_capacity(paths.len());
    for path in paths {
        let text = read_path(path)?;
        tracing::info!(path = %path.display(), bytes = text.len(), "read input");
        parts.push(text);
    }
    Ok(parts.join("\n"))
}

fn read_path(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    if is_csv(path) {
        flatten_csv(&bytes).with_context(|| format!("failed to decode CSV file {}", path.display()))
    } else {
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Flatten CSV data to one line per non-empty cell, in row-major order.
pub fn flatten_csv(data: &[u8]) -> Result<String, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut lines = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        for field in record.iter() {
            let cell = String::from_utf8_lossy(field);
            let cell = cell.trim();
            if !cell.is_empty() {
                lines.push(cell.to_string());
            }
        }
    }
    Ok(lines.join("\n"))
}
