use crate::core::auth::password_digest;
use crate::errors::{AppError, AppResult};
use crate::models::account::UserAccount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub accounts: Vec<UserAccount>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
    #[serde(default = "default_hours_decimals")]
    pub hours_decimals: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> bool {
    true
}
fn default_hours_decimals() -> usize {
    2
}
fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accounts: demo_accounts(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
            hours_decimals: default_hours_decimals(),
            chart_width: default_chart_width(),
        }
    }
}

/// Accounts written by `init` and used when no config file exists.
pub fn demo_accounts() -> Vec<UserAccount> {
    let account = |user: &str, pwd: &str, name: &str, role: &str, shares: &[(&str, f64)]| {
        UserAccount {
            username: user.to_string(),
            password_digest: password_digest(user, pwd),
            display_name: name.to_string(),
            role_title: role.to_string(),
            contract_shares: shares
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
        }
    };

    vec![
        account(
            "maria",
            "maria123",
            "Maria Souza",
            "Research Analyst",
            &[("A", 70.0), ("B", 30.0)],
        ),
        account(
            "joao",
            "joao123",
            "João Lima",
            "Project Coordinator",
            &[("Projetos", 50.0), ("Ensino", 50.0)],
        ),
    ]
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or(home)
                .join("rtimeclock")
        } else {
            home.join(".rtimeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Resolve the config path: explicit override or the standard location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
