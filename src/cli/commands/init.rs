use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CsvStore, SessionStore};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (an existing file is left alone)
///  - the session log (header only, when missing)
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing worktime…");

    if cfg.save_if_missing()? {
        success(format!("Config file: {}", Config::config_file().display()));
    } else {
        info(format!(
            "Config file already present: {}",
            Config::config_file().display()
        ));
    }

    let store = CsvStore::open(cfg.log_path())?;
    let sessions = store.load()?;
    success(format!(
        "Session log: {} ({} sessions)",
        store.location(),
        sessions.len()
    ));

    Ok(())
}
