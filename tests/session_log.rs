use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fs;
use worktime::errors::AppError;
use worktime::models::SummaryLabel;
use worktime::{CsvStore, ManualClock, SessionLog, SessionStore};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn csv_log<'a>(
    path: &std::path::Path,
    clock: &'a ManualClock,
) -> SessionLog<CsvStore, &'a ManualClock> {
    SessionLog::with_clock(CsvStore::open(path).unwrap(), clock, Duration::hours(8))
}

#[test]
fn reopened_store_gives_identical_daily_totals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("time_log.csv");
    let clock = ManualClock::new(at("2024-03-04T08:00:00"));

    {
        let log = csv_log(&path, &clock);
        for d in 0..5 {
            clock.set(at("2024-03-04T08:00:00") + Duration::days(d));
            log.clock_in().unwrap();
            clock.advance(Duration::minutes(4 * 60 + 7 * d));
            log.clock_out().unwrap();
            clock.advance(Duration::minutes(45));
            log.clock_in().unwrap();
            clock.advance(Duration::hours(4));
            log.clock_out().unwrap();
        }
    }
    clock.set(at("2024-03-20T12:00:00"));
    let before = csv_log(&path, &clock).daily_totals(true).unwrap();

    let reopened = csv_log(&path, &clock);
    let after = reopened.daily_totals(true).unwrap();

    assert_eq!(before.len(), 5);
    assert_eq!(before, after);
    assert_eq!(after[&day("2024-03-06")], Duration::minutes(8 * 60 + 14));
}

#[test]
fn two_sessions_same_day_total_seven_hours() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("time_log.csv");
    fs::write(
        &path,
        "start,stop\n2024-03-04T09:00:00,2024-03-04T12:00:00\n2024-03-04T13:00:00,2024-03-04T17:00:00\n",
    )
    .unwrap();
    let clock = ManualClock::new(at("2024-03-08T10:00:00"));

    let totals = csv_log(&path, &clock).daily_totals(false).unwrap();

    assert_eq!(totals[&day("2024-03-04")], Duration::hours(7));
}

#[test]
fn clock_out_on_empty_store_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("time_log.csv");
    let clock = ManualClock::new(at("2024-03-04T09:00:00"));
    let log = csv_log(&path, &clock);

    let err = log.clock_out().unwrap_err();

    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "start,stop\n");
}

#[test]
fn open_session_is_persisted_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("time_log.csv");
    let clock = ManualClock::new(at("2024-03-04T09:00:00"));

    csv_log(&path, &clock).clock_in().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "start,stop\n2024-03-04T09:00:00,\n"
    );

    clock.set(at("2024-03-04T11:30:00"));
    let log = csv_log(&path, &clock);
    assert!(log.is_active().unwrap());
    assert_eq!(log.worked_time_today().unwrap(), Duration::minutes(150));
    assert!(log.daily_totals(false).unwrap().is_empty());
}

#[test]
fn summary_scenario_half_hour() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("time_log.csv");
    let clock = ManualClock::new(at("2024-03-04T09:00:00"));
    let log = csv_log(&path, &clock);

    log.clock_in().unwrap();
    clock.set(at("2024-03-04T17:30:00"));
    log.clock_out().unwrap();

    let summary = log.summary(true, 10, Duration::hours(8)).unwrap();
    let entries = summary.entries();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, SummaryLabel::Day(day("2024-03-04")));
    assert_eq!(entries[0].duration, Duration::minutes(30));
    assert_eq!(entries[1].label, SummaryLabel::ExtraHours);
    assert_eq!(entries[1].duration, Duration::minutes(30));
    assert_eq!(log.store().load().unwrap().len(), 1);
}
