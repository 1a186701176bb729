use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime};

/// Convert the configured hours per day into a quota, to the minute.
pub fn quota_from_hours(hours: f64) -> AppResult<Duration> {
    if !hours.is_finite() || hours <= 0.0 || hours > 24.0 {
        return Err(AppError::InvalidDuration(format!(
            "hours per day must be within (0, 24], got {hours}"
        )));
    }
    Ok(Duration::minutes((hours * 60.0).round() as i64))
}

/// When today's quota is reached if work continues from `now` without pause.
pub fn predicted_end_of_day(
    now: NaiveDateTime,
    worked_today: Duration,
    daily_quota: Duration,
) -> NaiveDateTime {
    now + daily_quota - worked_today
}
