//! A1-style range validation and composition.
//!
//! The remote API interprets range strings itself; this module only checks
//! the notation locally so an obvious typo fails before a network round
//! trip, and composes the `{sheet}!{range}` form the values endpoint
//! expects.

use crate::error::{SourceError, SourceResult};

/// Parse A1-style cell notation (e.g., "A1", "Z99", "AA1").
/// Returns (row, column) as 0-based indices.
pub fn parse_cell(notation: &str) -> SourceResult<(usize, usize)> {
    if notation.is_empty() {
        return Err(SourceError::MalformedRange(notation.to_string()));
    }

    let upper = notation.to_uppercase();
    let bytes = upper.as_bytes();

    // Find where letters end and numbers begin
    let mut split_pos = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            split_pos = i;
            break;
        }
    }

    if split_pos == 0 {
        return Err(SourceError::MalformedRange(notation.to_string()));
    }

    let col_part = &upper[..split_pos];
    let row_part = &upper[split_pos..];

    let col = parse_column_letters(col_part)
        .ok_or_else(|| SourceError::MalformedRange(notation.to_string()))?;
    let row = row_part
        .parse::<usize>()
        .map_err(|_| SourceError::MalformedRange(notation.to_string()))?;

    // Convert to 0-based indexing (A1 = 0,0)
    if row == 0 {
        return Err(SourceError::MalformedRange(notation.to_string()));
    }

    Ok((row - 1, col))
}

/// Check an A1-style range string without interpreting it.
///
/// Accepts a single cell (`"B2"`), a cell range (`"A1:Z100"`, either corner
/// first), and endpoints that are bare column letters (`"A:Z"`). The sheet
/// name is not part of the range; it is joined on by [`compose_range`].
pub fn validate_range(range: &str) -> SourceResult<()> {
    let ok = match range.split_once(':') {
        None => parse_cell(range).is_ok(),
        Some((start, end)) => valid_endpoint(start) && valid_endpoint(end),
    };
    if ok {
        Ok(())
    } else {
        Err(SourceError::MalformedRange(range.to_string()))
    }
}

/// Compose the full range argument for the values endpoint:
/// `"{sheet}!{range}"`, or the bare sheet name for a whole-sheet fetch.
#[must_use]
pub fn compose_range(sheet: &str, range: Option<&str>) -> String {
    match range {
        Some(range) => format!("{sheet}!{range}"),
        None => sheet.to_string(),
    }
}

fn valid_endpoint(notation: &str) -> bool {
    parse_cell(notation).is_ok() || parse_column_letters(&notation.to_uppercase()).is_some()
}

/// Convert column letters to a 0-based column index.
/// A=0, B=1, ... Z=25, AA=26, AB=27, ...
fn parse_column_letters(col_str: &str) -> Option<usize> {
    if col_str.is_empty() {
        return None;
    }

    let mut col = 0usize;
    for &b in col_str.as_bytes() {
        if !b.is_ascii_uppercase() {
            return None;
        }
        col = col * 26 + (b - b'A') as usize + 1;
    }

    Some(col - 1)
}
