use chrono::{Duration, NaiveDate};
use std::fmt;

pub const EXTRA_HOURS_LABEL: &str = "Extra hours";

/// Key of a statistics row: a calendar day or the cumulative total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLabel {
    Day(NaiveDate),
    ExtraHours,
}

impl fmt::Display for SummaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryLabel::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            SummaryLabel::ExtraHours => f.write_str(EXTRA_HOURS_LABEL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub label: SummaryLabel,
    pub duration: Duration,
}

/// Overtime of the most recent days plus the overtime over the full history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub days: Vec<(NaiveDate, Duration)>,
    pub extra_hours: Duration,
}

impl Summary {
    /// Ordered view: one entry per day (ascending), then `Extra hours`.
    pub fn entries(&self) -> Vec<SummaryEntry> {
        self.days
            .iter()
            .map(|(d, v)| SummaryEntry {
                label: SummaryLabel::Day(*d),
                duration: *v,
            })
            .chain(std::iter::once(SummaryEntry {
                label: SummaryLabel::ExtraHours,
                duration: self.extra_hours,
            }))
            .collect()
    }

    pub fn get(&self, label: SummaryLabel) -> Option<Duration> {
        match label {
            SummaryLabel::ExtraHours => Some(self.extra_hours),
            SummaryLabel::Day(d) => self.days.iter().find(|(k, _)| *k == d).map(|(_, v)| *v),
        }
    }
}
