use crate::models::Session;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Total time of the sessions started on or after `cutoff` (midnight).
/// An open session counts up to `now`.
pub fn worked_time_since(sessions: &[Session], cutoff: NaiveDate, now: NaiveDateTime) -> Duration {
    let from = cutoff.and_time(chrono::NaiveTime::MIN);

    sessions
        .iter()
        .filter(|s| s.start >= from)
        .map(|s| s.duration_at(now))
        .fold(Duration::zero(), |acc, d| acc + d)
}
