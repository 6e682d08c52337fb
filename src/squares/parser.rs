use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Flatten raw text lines into one numeric sequence.
///
/// Each line is split on runs of whitespace; tokens are taken in line order,
/// then in order within the line. Blank lines contribute nothing. The first
/// token that is not a float literal aborts the whole parse.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<f64>> {
    let mut numbers = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        for tok in line.as_ref().split_whitespace() {
            numbers.push(parse_token(tok, i + 1)?);
        }
    }
    Ok(numbers)
}

/// Load a numeric sequence from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – every field of every record, each field whitespace-split
/// * `.json` – a flat array of numbers, `[4, 8, 15.5]`
/// * anything else – plain text, whitespace-separated, any number per line
pub fn load_numbers(path: &Path) -> Result<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let numbers = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        _ => load_text(path)?,
    };
    debug!("loaded {} numbers from {}", numbers.len(), path.display());
    Ok(numbers)
}

fn parse_token(tok: &str, line: usize) -> Result<f64> {
    tok.trim().parse::<f64>().map_err(|_| Error::Parse {
        token: tok.to_string(),
        line,
    })
}

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

fn load_text(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// No header row; records may have differing field counts. Empty fields are
/// skipped so trailing commas are harmless.
fn load_csv(path: &Path) -> Result<Vec<f64>> {
    let file = std::fs::File::open(path).map_err(|e| Error::file(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut numbers = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::Format {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        for field in record.iter() {
            for tok in field.split_whitespace() {
                numbers.push(parse_token(tok, line)?);
            }
        }
    }
    Ok(numbers)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    serde_json::from_str::<Vec<f64>>(&text).map_err(|e| Error::Format {
        path: path.to_path_buf(),
        message: format!("expected a flat array of numbers: {e}"),
    })
}
