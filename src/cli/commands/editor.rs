use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Editor used when neither `--editor` nor `$EDITOR` / `$VISUAL` is set.
pub fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in the requested editor, falling back to the default one.
pub fn launch(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    if run(&editor, path) {
        success(format!("{} edited using '{}'", path.display(), editor));
        return Ok(());
    }

    if editor == fallback {
        return Err(AppError::Editor(format!(
            "failed to edit {} using '{}'",
            path.display(),
            editor
        )));
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        editor, fallback
    ));
    if run(&fallback, path) {
        success(format!("{} edited using fallback '{}'", path.display(), fallback));
        Ok(())
    } else {
        Err(AppError::Editor(format!(
            "failed to edit {} using fallback '{}'",
            path.display(),
            fallback
        )))
    }
}

fn run(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
