use crate::cli::commands::open_log;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Summary, SummaryLabel};
use crate::utils::colors::{color_enabled, overtime_style, surplus_style};
use crate::utils::format_duration;
use crate::utils::formatting::{bold, day_label};
use crate::utils::table::{Align, Cell, Column, Table};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatRow {
    label: String,
    minutes: i64,
}

/// Handle `stats`
pub fn handle(
    cfg: &Config,
    days: Option<usize>,
    include_today: Option<bool>,
    json: bool,
) -> AppResult<()> {
    let log = open_log(cfg)?;
    let window = days.unwrap_or(cfg.summary_days);
    let include_today = include_today.unwrap_or(cfg.include_today);

    let summary = log.summary(include_today, window, log.daily_quota())?;

    if json {
        println!("{}", to_json(&summary)?);
        return Ok(());
    }

    let title = format!(
        "📊 Overtime per day (quota {} per day)",
        format_duration(log.daily_quota(), false)
    );
    println!("{}\n", if color_enabled() { bold(&title) } else { title });
    print!("{}", render(&summary, color_enabled()));
    Ok(())
}

fn to_json(summary: &Summary) -> AppResult<String> {
    let rows: Vec<StatRow> = summary
        .entries()
        .into_iter()
        .map(|e| StatRow {
            label: e.label.to_string(),
            minutes: e.duration.num_minutes(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

fn render(summary: &Summary, color: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("Day", Align::Right),
        Column::new("Overtime", Align::Right),
    ]);
    table.color = color;

    for entry in summary.entries() {
        let value = format_duration(entry.duration, true);
        let row = match entry.label {
            SummaryLabel::Day(d) => vec![
                Cell::plain(day_label(d)),
                Cell::styled(value, overtime_style(entry.duration)),
            ],
            SummaryLabel::ExtraHours => vec![
                Cell::plain(entry.label.to_string()),
                Cell::styled(value, surplus_style(entry.duration)),
            ],
        };
        table.add_row(row);
    }

    table.render()
}
