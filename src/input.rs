//! Task file readers.
//!
//! CSV files have no header and one task per line: `offset, wcet, deadline, period`.
//! Blank cells and missing trailing cells fall back to the normalizer defaults.
//! JSON files hold an array of [`RawTask`] objects.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::models::RawTask;
use crate::utils::SchedulingError;

/// Reads a task file, picking the format from the extension (`.json` or CSV).
pub fn read_task_file<P: AsRef<Path>>(file_path: P) -> Result<Vec<RawTask>, SchedulingError> {
    let path = file_path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let tasks = if is_json {
        read_json_tasks(file)?
    } else {
        read_csv_tasks(file)?
    };

    debug!(path = %path.display(), tasks = tasks.len(), "task file read");
    Ok(tasks)
}

pub fn read_json_tasks<R: Read>(reader: R) -> Result<Vec<RawTask>, SchedulingError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn read_csv_tasks<R: Read>(reader: R) -> Result<Vec<RawTask>, SchedulingError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut tasks = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        tasks.push(RawTask {
            id: None,
            offset: parse_cell(&record, 0, line)?,
            wcet: parse_cell(&record, 1, line)?,
            deadline: parse_cell(&record, 2, line)?,
            period: parse_cell(&record, 3, line)?,
        });
    }

    Ok(tasks)
}

fn parse_cell(record: &StringRecord, column: usize, line: usize) -> Result<Option<f64>, SchedulingError> {
    match record.get(column) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| SchedulingError::InvalidNumber {
                line,
                column: column + 1,
                value: value.to_string(),
            }),
    }
}
