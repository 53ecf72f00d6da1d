// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data_input::log_data::{ColumnLayout, GpsSample};
use crate::error::{AnimationError, AnimationResult};

/// Parses the GPS CSV log at `input_file_path`.
///
/// The first line is a header and is skipped. Every following row must carry a finite
/// number at each of the three configured columns; the time column is multiplied by
/// `time_scale`. Any malformed row aborts the parse.
pub fn parse_gps_log(
    input_file_path: &Path,
    columns: &ColumnLayout,
    time_scale: f64,
) -> AnimationResult<Vec<GpsSample>> {
    let file = File::open(input_file_path).map_err(|e| AnimationError::io(input_file_path, e))?;
    let samples = parse_gps_reader(BufReader::new(file), columns, time_scale, input_file_path)?;
    // File handle is dropped here
    if samples.is_empty() {
        return Err(AnimationError::EmptyLog(input_file_path.to_path_buf()));
    }
    log::info!(
        "Read {} data rows from '{}'",
        samples.len(),
        input_file_path.display()
    );
    Ok(samples)
}

/// Same as [`parse_gps_log`] over any reader. `source` is only used in error messages.
pub fn parse_gps_reader<R: Read>(
    reader: R,
    columns: &ColumnLayout,
    time_scale: f64,
    source: &Path,
) -> AnimationResult<Vec<GpsSample>> {
    let csv_error = |e: csv::Error| AnimationError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_record = reader.headers().map_err(csv_error)?.clone();
    log::debug!("Headers found in CSV: {:?}", header_record);

    let mut samples = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let time = parse_field(&record, line, columns.time, "time")?;
        let altitude_m = parse_field(&record, line, columns.altitude, "altitude")?;
        let ground_speed = parse_field(&record, line, columns.ground_speed, "ground speed")?;

        samples.push(GpsSample {
            time_sec: time * time_scale,
            altitude_m,
            ground_speed,
        });
    }
    Ok(samples)
}

fn parse_field(
    record: &StringRecord,
    line: u64,
    column: usize,
    field: &'static str,
) -> AnimationResult<f64> {
    let raw = record.get(column).ok_or(AnimationError::MissingField {
        line,
        column,
        field,
    })?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AnimationError::InvalidNumber {
            line,
            column,
            field,
            value: raw.to_string(),
        }),
    }
}


// src/data_input/log_parser.rs
