use super::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::models::session::TIME_FORMAT;
use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const HEADER: [&str; 2] = ["start", "stop"];

/// Layouts accepted when reading. The first one is the only one ever written;
/// the others show up in logs that were re-saved by spreadsheet tools.
const READ_FORMATS: [&str; 4] = [
    TIME_FORMAT,
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

#[derive(Debug, Deserialize)]
struct SessionRow {
    start: String,
    stop: String,
}

/// Session log persisted as a two column CSV file (`start,stop`).
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open the log at `path`, creating a header-only file when none exists.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let mut wtr = csv::Writer::from_path(&path)?;
            wtr.write_record(HEADER)?;
            wtr.flush()?;
            info!(path = %path.display(), "created empty session log");
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("time_log.csv"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for CsvStore {
    fn load(&self) -> AppResult<Vec<Session>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            // zero-byte file: treated as a fresh log
            return Ok(Vec::new());
        }
        if headers.len() != HEADER.len() || headers.iter().zip(HEADER).any(|(h, e)| h != e) {
            return Err(AppError::StoreUnreadable(format!(
                "expected header 'start,stop' in {}, found '{}'",
                self.path.display(),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut sessions = Vec::new();
        for (idx, row) in rdr.deserialize::<SessionRow>().enumerate() {
            let line = idx + 2;
            let row = row?;
            sessions.push(parse_row(&row, line)?);
        }

        validate(&sessions)?;
        debug!(path = %self.path.display(), count = sessions.len(), "loaded session log");
        Ok(sessions)
    }

    fn save(&self, sessions: &[Session]) -> AppResult<()> {
        let tmp = self.temp_path();

        if let Err(e) = write_and_replace(&tmp, &self.path, sessions) {
            // the original log is untouched; don't leave the partial copy behind
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        debug!(path = %self.path.display(), count = sessions.len(), "saved session log");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_and_replace(tmp: &Path, target: &Path, sessions: &[Session]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(File::create(tmp)?);
    wtr.write_record(HEADER)?;
    for s in sessions {
        wtr.write_record([s.start_str(), s.stop_str()])?;
    }
    let file = wtr
        .into_inner()
        .map_err(|e| AppError::StoreIo(e.into_error()))?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp, target)?;
    Ok(())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    READ_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|ts| ts.with_nanosecond(0))
}

fn is_open_marker(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("nan") || raw.eq_ignore_ascii_case("nat")
}

fn parse_row(row: &SessionRow, line: usize) -> AppResult<Session> {
    let start = parse_timestamp(&row.start).ok_or_else(|| {
        AppError::StoreUnreadable(format!("line {line}: invalid start '{}'", row.start))
    })?;

    if is_open_marker(&row.stop) {
        return Ok(Session::open(start));
    }

    let stop = parse_timestamp(&row.stop).ok_or_else(|| {
        AppError::StoreUnreadable(format!("line {line}: invalid stop '{}'", row.stop))
    })?;
    Ok(Session::closed(start, stop))
}

/// Only the last session may be open. Other irregularities come from hand
/// edits and are reported without rejecting the file.
fn validate(sessions: &[Session]) -> AppResult<()> {
    let last = sessions.len().saturating_sub(1);

    for (idx, s) in sessions.iter().enumerate() {
        let line = idx + 2;

        if s.is_open() && idx != last {
            return Err(AppError::StoreUnreadable(format!(
                "line {line}: session started at {} has no stop but is not the last entry",
                s.start_str()
            )));
        }

        if let Some(stop) = s.stop
            && stop < s.start
        {
            warn!(line, start = %s.start_str(), stop = %s.stop_str(), "session stops before it starts");
        }

        if idx > 0 && s.start < sessions[idx - 1].start {
            warn!(line, start = %s.start_str(), "session starts before the previous one");
        }
    }

    Ok(())
}
