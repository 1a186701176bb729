//! Formatting utilities used for CLI outputs.

use chrono::{Duration, NaiveDate};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        "" // zero → no sign
    };

    if short {
        // +02:25 / -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m / -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Whole minutes of `d`, truncated towards zero.
pub fn format_duration(d: Duration, want_sign: bool) -> String {
    mins2readable(d.num_minutes(), want_sign, false)
}

/// Day label used in the statistics table, e.g. `Mon 2024-03-04`.
pub fn day_label(d: NaiveDate) -> String {
    d.format("%a %Y-%m-%d").to_string()
}
