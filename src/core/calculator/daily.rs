use crate::models::Session;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Sum of session durations per start day, ascending by day.
///
/// With `include_today == false` the group of `now`'s day is removed
/// entirely (it is not reported as zero).
pub fn daily_totals(
    sessions: &[Session],
    now: NaiveDateTime,
    include_today: bool,
) -> BTreeMap<NaiveDate, Duration> {
    let mut totals: BTreeMap<NaiveDate, Duration> = BTreeMap::new();

    for s in sessions {
        let entry = totals.entry(s.date()).or_insert_with(Duration::zero);
        *entry = *entry + s.duration_at(now);
    }

    if !include_today {
        totals.remove(&now.date());
    }

    totals
}
