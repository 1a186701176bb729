use crate::cli::commands::open_log;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SessionState;
use crate::utils::colors::{color_enabled, surplus_style};
use crate::utils::format_duration;

/// Handle `status` (also the default when no command is given)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let log = open_log(cfg)?;

    let state = log.state()?;
    let worked = log.worked_time_today()?;
    let eod = log.predicted_end_of_day(worked, log.daily_quota());
    let extra = log.extra_hours()?;

    let extra_txt = format_duration(extra, true);
    let extra_txt = if color_enabled() {
        surplus_style(extra).paint(extra_txt).to_string()
    } else {
        extra_txt
    };

    match state {
        SessionState::Active { since } => {
            println!("🟢 Working since {}", since.format("%H:%M"))
        }
        SessionState::Idle => println!("⏸️  Not working"),
    }
    println!("Worked today: {}", format_duration(worked, false));
    println!("End of day:   {}", eod.format("%H:%M"));
    println!("Extra hours:  {}", extra_txt);

    Ok(())
}
