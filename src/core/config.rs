use crate::config::Config;
use crate::config::check::{account_problems, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (defaults included).
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report missing keys and account problems. Returns the problem count.
    pub fn check(path: &Path, cfg: &Config) -> AppResult<usize> {
        let mut count = 0;

        if path.exists() {
            let raw = fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
            for key in missing_keys(&raw) {
                warning(format!("Missing key '{key}' (default value in use)"));
                count += 1;
            }
        } else {
            info(format!(
                "No configuration file at {}: built-in defaults in use.",
                path.display()
            ));
        }

        for problem in account_problems(cfg) {
            warning(problem);
            count += 1;
        }

        if count == 0 {
            success("Configuration OK");
        }

        Ok(count)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor exited with {s}"))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
