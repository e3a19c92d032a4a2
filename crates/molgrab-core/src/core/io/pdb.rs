use crate::core::models::atom::AtomRecord;
use nalgebra::Point3;
use thiserror::Error;
use tracing::warn;

/// The 4-character record marker selecting atomic-coordinate lines.
pub const ATOM_RECORD_MARKER: &str = "ATOM";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt {
        columns: &'static str,
        value: String,
    },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat {
        columns: &'static str,
        value: String,
    },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: &'static str },
}

/// A marker line that failed to convert and was rejected.
///
/// The atom never enters the record list; treating it as position (0, 0, 0)
/// would corrupt every downstream distance computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number within the input text.
    pub line_number: usize,
    pub kind: PdbParseErrorKind,
}

/// The outcome of parsing one coordinate text blob.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbContents {
    /// Accepted atom records in insertion order, with dense 0-based indices.
    pub atoms: Vec<AtomRecord>,
    /// Marker lines rejected because a required field failed to convert.
    pub rejected: Vec<RejectedLine>,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Parses a multi-line coordinate text blob into ordered atom records.
///
/// Lines whose first four characters equal [`ATOM_RECORD_MARKER`] are read at
/// the standard fixed columns (0-indexed): atom name 12..16, residue name
/// 17..20, residue sequence number 22..26, x/y/z 30..38/38..46/46..54, and
/// element symbol 76..78. When the element column is blank the atom name's
/// first character stands in for it. All other lines are skipped.
///
/// Parsing never fails as a whole: each malformed marker line becomes a
/// [`RejectedLine`] diagnostic (also logged) and construction continues with
/// the rest of the molecule. The function is stateless and deterministic.
pub fn parse(text: &str) -> PdbContents {
    let mut contents = PdbContents::default();

    for (line_idx, line) in text.lines().enumerate() {
        let line_number = line_idx + 1;
        if line.get(0..4) != Some(ATOM_RECORD_MARKER) {
            continue;
        }

        match parse_atom_line(line, contents.atoms.len()) {
            Ok(atom) => contents.atoms.push(atom),
            Err(kind) => {
                warn!(line = line_number, %kind, "rejected atom record");
                contents.rejected.push(RejectedLine { line_number, kind });
            }
        }
    }

    contents
}

fn parse_atom_line(line: &str, index: usize) -> Result<AtomRecord, PdbParseErrorKind> {
    let name = slice_and_trim(line, 12, 16);
    if name.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField { columns: "13-16" });
    }
    let residue_name = slice_and_trim(line, 17, 20);
    if residue_name.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField { columns: "18-20" });
    }

    let residue_number = parse_int(slice_and_trim(line, 22, 26), "23-26")?;
    let x = parse_float(slice_and_trim(line, 30, 38), "31-38")?;
    let y = parse_float(slice_and_trim(line, 38, 46), "39-46")?;
    let z = parse_float(slice_and_trim(line, 46, 54), "47-54")?;

    // Minimal legacy files leave the element column blank; the atom name's
    // leading character carries the same information for the radius lookup.
    let element_field = slice_and_trim(line, 76, 78);
    let element = element_field
        .chars()
        .next()
        .or_else(|| name.chars().next())
        .ok_or(PdbParseErrorKind::MissingRequiredField { columns: "77-78" })?;

    Ok(AtomRecord::new(
        index,
        residue_number,
        residue_name,
        name,
        element,
        Point3::new(x, y, z),
    ))
}

fn parse_int(value: &str, columns: &'static str) -> Result<isize, PdbParseErrorKind> {
    value.parse().map_err(|_| PdbParseErrorKind::InvalidInt {
        columns,
        value: value.to_string(),
    })
}

fn parse_float(value: &str, columns: &'static str) -> Result<f64, PdbParseErrorKind> {
    let parsed: f64 = value.parse().map_err(|_| PdbParseErrorKind::InvalidFloat {
        columns,
        value: value.to_string(),
    })?;
    // "NaN" parses successfully but would poison every downstream distance.
    if parsed.is_nan() {
        return Err(PdbParseErrorKind::InvalidFloat {
            columns,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}
