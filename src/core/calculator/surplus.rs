use crate::models::Summary;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Worked time minus the daily quota, per day. Order is preserved.
pub fn overtime_statistics(
    totals: &BTreeMap<NaiveDate, Duration>,
    daily_quota: Duration,
) -> BTreeMap<NaiveDate, Duration> {
    totals
        .iter()
        .map(|(day, worked)| (*day, *worked - daily_quota))
        .collect()
}

/// Cumulative overtime ("Extra hours").
pub fn total_overtime(overtime: &BTreeMap<NaiveDate, Duration>) -> Duration {
    overtime
        .values()
        .fold(Duration::zero(), |acc, d| acc + *d)
}

/// The last `window_size` days plus the overtime of the whole history.
pub fn summarize(overtime: &BTreeMap<NaiveDate, Duration>, window_size: usize) -> Summary {
    let skip = overtime.len().saturating_sub(window_size);

    Summary {
        days: overtime
            .iter()
            .skip(skip)
            .map(|(day, value)| (*day, *value))
            .collect(),
        extra_hours: total_overtime(overtime),
    }
}
