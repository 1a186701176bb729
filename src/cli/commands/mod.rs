pub mod clock;
pub mod config;
pub mod edit;
pub mod editor;
pub mod init;
pub mod stats;
pub mod status;

use crate::config::Config;
use crate::core::SessionLog;
use crate::errors::AppResult;
use crate::store::CsvStore;

/// Engine over the configured CSV log (created if missing).
pub(crate) fn open_log(cfg: &Config) -> AppResult<SessionLog<CsvStore>> {
    SessionLog::open(cfg.log_path(), cfg.hours_per_day)
}
