use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Canonical timestamp layout of the `start` / `stop` columns.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One contiguous work interval. `stop == None` means the session is still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub start: NaiveDateTime,
    pub stop: Option<NaiveDateTime>,
}

impl Session {
    pub fn open(start: NaiveDateTime) -> Self {
        Self { start, stop: None }
    }

    pub fn closed(start: NaiveDateTime, stop: NaiveDateTime) -> Self {
        Self {
            start,
            stop: Some(stop),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stop.is_none()
    }

    /// Calendar day the session is accounted to (the day it started).
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// `stop - start` for a closed session, `now - start` while it is open.
    pub fn duration_at(&self, now: NaiveDateTime) -> Duration {
        self.stop.unwrap_or(now) - self.start
    }

    /// Open → Closed. A closed session never changes again.
    pub fn close(&mut self, at: NaiveDateTime) -> AppResult<()> {
        if let Some(stop) = self.stop {
            return Err(AppError::InvalidState(format!(
                "session started at {} was already closed at {}",
                self.start.format(TIME_FORMAT),
                stop.format(TIME_FORMAT)
            )));
        }
        self.stop = Some(at);
        Ok(())
    }

    pub fn start_str(&self) -> String {
        self.start.format(TIME_FORMAT).to_string()
    }

    pub fn stop_str(&self) -> String {
        self.stop
            .map(|s| s.format(TIME_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Derived state of the whole log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active { since: NaiveDateTime },
}

impl SessionState {
    pub fn from_sessions(sessions: &[Session]) -> Self {
        match sessions.last() {
            Some(last) if last.is_open() => SessionState::Active { since: last.start },
            _ => SessionState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active { .. })
    }
}
