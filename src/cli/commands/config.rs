use crate::cli::commands::editor;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(
    cfg: &Config,
    print_config: bool,
    edit_config: bool,
    requested_editor: Option<&str>,
) -> AppResult<()> {
    let path = Config::config_file();

    if print_config || !edit_config {
        println!("📄 Current configuration ({}):\n", path.display());
        print!("{}", cfg.to_yaml()?);
    }

    if edit_config {
        if cfg.save_if_missing()? {
            info(format!("Created {}", path.display()));
        }
        editor::launch(&path, requested_editor)?;
    }

    Ok(())
}
