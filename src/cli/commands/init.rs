use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "configuration file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    info("Initializing rTimeclock…");

    let cfg = Config::default();
    cfg.save(path)?;

    success(format!("Config file: {}", path.display()));
    for acc in &cfg.accounts {
        info(format!(
            "Demo account '{}' ({}, {})",
            acc.username, acc.display_name, acc.role_title
        ));
    }

    Ok(())
}
