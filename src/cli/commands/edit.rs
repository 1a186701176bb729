use crate::cli::commands::editor;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CsvStore, SessionStore};
use crate::ui::messages::{error, info};

/// Handle `edit`: hand-edit the session log, then check it still loads.
pub fn handle(cfg: &Config, requested_editor: Option<&str>) -> AppResult<()> {
    let store = CsvStore::open(cfg.log_path())?;

    editor::launch(store.path(), requested_editor)?;

    match store.load() {
        Ok(sessions) => info(format!("{} sessions in {}", sessions.len(), store.location())),
        Err(e) => {
            error(format!("The edited log cannot be used: {e}"));
            return Err(e);
        }
    }
    Ok(())
}
