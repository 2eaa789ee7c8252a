//! Reader for the solver's `position,temperature` results file.
//!
//! The file has no header and exactly two comma-separated numeric columns.
//! Rows are returned in file order; blank lines are ignored, anything else
//! that does not parse fails the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::core::DiscretePoint;
use crate::error::{PlotError, PlotResult};

const UTF8_BOM: char = '\u{feff}';

/// Loads every record of the results file at `path`.
pub fn load(path: impl AsRef<Path>) -> PlotResult<Vec<DiscretePoint>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlotError::MissingSource {
        path: path.to_path_buf(),
        source,
    })?;

    // the file handle is dropped on every return path, including parse failures
    let points = load_from_reader(BufReader::new(file), &path.display().to_string())?;
    debug!(path = %path.display(), count = points.len(), "loaded results file");
    Ok(points)
}

/// Loads records from any buffered source. `origin` names the source in errors.
pub fn load_from_reader<R: BufRead>(reader: R, origin: &str) -> PlotResult<Vec<DiscretePoint>> {
    let mut points = Vec::new();
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|source| PlotError::MissingSource {
            path: origin.into(),
            source,
        })?;
        let line_number = index + 1;

        let text = std::str::from_utf8(&raw).map_err(|err| PlotError::MalformedRecord {
            origin: origin.to_owned(),
            line: line_number,
            record: String::from_utf8_lossy(&raw).trim_end().to_owned(),
            reason: format!("not valid UTF-8 after byte {}", err.valid_up_to()),
        })?;
        let mut line = text.strip_suffix('\r').unwrap_or(text);
        if index == 0 {
            line = line.strip_prefix(UTF8_BOM).unwrap_or(line);
        }
        if line.trim().is_empty() {
            continue;
        }

        let point = parse_record(line).map_err(|reason| PlotError::MalformedRecord {
            origin: origin.to_owned(),
            line: line_number,
            record: line.to_owned(),
            reason,
        })?;
        trace!(
            line = line_number,
            position = point.position,
            temperature = point.temperature,
            "parsed record"
        );
        points.push(point);
    }
    Ok(points)
}

/// Parses one `position,temperature` record. The error is a human-readable reason.
pub fn parse_record(record: &str) -> Result<DiscretePoint, String> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    let [position, temperature] = fields.as_slice() else {
        return Err(format!("found {} field(s), need 2", fields.len()));
    };

    Ok(DiscretePoint::new(
        parse_field("position", position)?,
        parse_field("temperature", temperature)?,
    ))
}

fn parse_field(name: &str, raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("{name} `{raw}` is not a number"))?;
    if !value.is_finite() {
        return Err(format!("{name} `{raw}` is not finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::parse_record;

    #[test]
    fn parse_record_accepts_padded_fields() {
        let point = parse_record(" 0.01 , 150 ").expect("record");
        assert_eq!(point.position, 0.01);
        assert_eq!(point.temperature, 150.0);
    }

    #[test]
    fn parse_record_rejects_wrong_arity_and_non_numbers() {
        assert!(parse_record("0.01").is_err());
        assert!(parse_record("0.01,150,3").is_err());
        assert!(parse_record("x,T").is_err());
        assert!(parse_record("0.01,").is_err());
        assert!(parse_record("nan,150").is_err());
    }
}
