use crate::cli::commands::open_log;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_duration;

/// Handle `--start`
pub fn clock_in(cfg: &Config) -> AppResult<()> {
    let log = open_log(cfg)?;
    let session = log.clock_in()?;

    success(format!(
        "Clocked in at {}.",
        session.start.format("%H:%M")
    ));
    Ok(())
}

/// Handle `--stop`
pub fn clock_out(cfg: &Config) -> AppResult<()> {
    let log = open_log(cfg)?;
    let session = log.clock_out()?;
    let length = session.duration_at(log.now());

    success(format!(
        "Clocked out at {} after {}.",
        session
            .stop
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default(),
        format_duration(length, false)
    ));
    info(format!(
        "Worked today: {}",
        format_duration(log.worked_time_today()?, false)
    ));
    Ok(())
}

/// Handle `toggle`: the single Start/Stop button.
pub fn toggle(cfg: &Config) -> AppResult<()> {
    if open_log(cfg)?.is_active()? {
        clock_out(cfg)
    } else {
        clock_in(cfg)
    }
}
