//! Session log engine: clock in/out and everything derived from the log.
//!
//! The engine keeps no sessions in memory between calls. Reads reload the
//! store, mutations reload, change the last record and write everything back.

use crate::core::calculator::{daily, expected, surplus, worked};
use crate::core::clock::{Clock, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::models::{Session, SessionState, Summary};
use crate::store::{CsvStore, SessionStore};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

pub struct SessionLog<S, C = SystemClock> {
    store: S,
    clock: C,
    daily_quota: Duration,
}

impl SessionLog<CsvStore, SystemClock> {
    /// Engine over the CSV log at `path`, created empty if missing.
    pub fn open(path: impl Into<PathBuf>, hours_per_day: f64) -> AppResult<Self> {
        let quota = expected::quota_from_hours(hours_per_day)?;
        Ok(Self::new(CsvStore::open(path)?, quota))
    }
}

impl<S: SessionStore> SessionLog<S, SystemClock> {
    pub fn new(store: S, daily_quota: Duration) -> Self {
        Self::with_clock(store, SystemClock, daily_quota)
    }
}

impl<S: SessionStore, C: Clock> SessionLog<S, C> {
    pub fn with_clock(store: S, clock: C, daily_quota: Duration) -> Self {
        Self {
            store,
            clock,
            daily_quota,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn daily_quota(&self) -> Duration {
        self.daily_quota
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn sessions(&self) -> AppResult<Vec<Session>> {
        self.store.load()
    }

    pub fn state(&self) -> AppResult<SessionState> {
        Ok(SessionState::from_sessions(&self.store.load()?))
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Idle → Active: append an open session starting now.
    pub fn clock_in(&self) -> AppResult<Session> {
        let mut sessions = self.store.load()?;

        if let SessionState::Active { since } = SessionState::from_sessions(&sessions) {
            return Err(AppError::InvalidState(format!(
                "already clocked in since {}",
                since.format("%Y-%m-%d %H:%M")
            )));
        }

        let session = Session::open(self.clock.now());
        sessions.push(session.clone());
        self.store.save(&sessions)?;

        info!(start = %session.start_str(), store = %self.store.location(), "clocked in");
        Ok(session)
    }

    /// Active → Idle: close the last session now.
    pub fn clock_out(&self) -> AppResult<Session> {
        let mut sessions = self.store.load()?;

        let last = match sessions.last_mut() {
            Some(last) if last.is_open() => last,
            _ => {
                return Err(AppError::InvalidState(
                    "not clocked in: there is no open session to stop".into(),
                ));
            }
        };
        last.close(self.clock.now())?;
        let session = last.clone();
        self.store.save(&sessions)?;

        info!(
            start = %session.start_str(),
            stop = %session.stop_str(),
            store = %self.store.location(),
            "clocked out"
        );
        Ok(session)
    }

    // ---------------------------
    // Reads
    // ---------------------------

    pub fn is_active(&self) -> AppResult<bool> {
        Ok(self.state()?.is_active())
    }

    pub fn worked_time_since(&self, cutoff: NaiveDate) -> AppResult<Duration> {
        let sessions = self.store.load()?;
        Ok(worked::worked_time_since(&sessions, cutoff, self.clock.now()))
    }

    pub fn worked_time_today(&self) -> AppResult<Duration> {
        self.worked_time_since(self.clock.today())
    }

    pub fn predicted_end_of_day(
        &self,
        worked_today: Duration,
        daily_quota: Duration,
    ) -> NaiveDateTime {
        expected::predicted_end_of_day(self.clock.now(), worked_today, daily_quota)
    }

    pub fn daily_totals(&self, include_today: bool) -> AppResult<BTreeMap<NaiveDate, Duration>> {
        let sessions = self.store.load()?;
        Ok(daily::daily_totals(
            &sessions,
            self.clock.now(),
            include_today,
        ))
    }

    pub fn overtime_statistics(
        &self,
        include_today: bool,
        daily_quota: Duration,
    ) -> AppResult<BTreeMap<NaiveDate, Duration>> {
        let totals = self.daily_totals(include_today)?;
        Ok(surplus::overtime_statistics(&totals, daily_quota))
    }

    pub fn summary(
        &self,
        include_today: bool,
        window_size: usize,
        daily_quota: Duration,
    ) -> AppResult<Summary> {
        let overtime = self.overtime_statistics(include_today, daily_quota)?;
        Ok(surplus::summarize(&overtime, window_size))
    }

    /// Overtime over the whole history, today excluded, against the
    /// configured quota.
    pub fn extra_hours(&self) -> AppResult<Duration> {
        let overtime = self.overtime_statistics(false, self.daily_quota)?;
        Ok(surplus::total_overtime(&overtime))
    }
}
