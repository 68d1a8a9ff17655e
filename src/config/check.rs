//! `config --check`: report missing keys and inconsistent accounts.

use crate::config::Config;
use serde_yaml::Value;
use std::collections::HashSet;

const KNOWN_KEYS: [&str; 5] = [
    "accounts",
    "separator_char",
    "show_weekday",
    "hours_decimals",
    "chart_width",
];

/// Top-level keys absent from the raw YAML (defaults will be used).
pub fn missing_keys(raw_yaml: &str) -> Vec<&'static str> {
    let Ok(Value::Mapping(map)) = serde_yaml::from_str::<Value>(raw_yaml) else {
        return KNOWN_KEYS.to_vec();
    };

    KNOWN_KEYS
        .iter()
        .filter(|k| !map.contains_key(**k))
        .copied()
        .collect()
}

/// Human-readable problems in the account list.
pub fn account_problems(cfg: &Config) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for acc in &cfg.accounts {
        if acc.username.trim().is_empty() {
            problems.push("account with empty username".to_string());
            continue;
        }
        if !seen.insert(acc.username.as_str()) {
            problems.push(format!("duplicate username '{}'", acc.username));
        }
        if !acc.shares_are_complete() {
            problems.push(format!(
                "contract shares of '{}' add up to {}% instead of 100%",
                acc.username,
                acc.shares_total()
            ));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_keys() {
        let missing = missing_keys("accounts: []\nchart_width: 20\n");
        assert_eq!(missing, vec!["separator_char", "show_weekday", "hours_decimals"]);
    }

    #[test]
    fn reports_incomplete_shares_and_duplicates() {
        let mut cfg = Config::default();
        let mut acc = cfg.accounts[0].clone();
        acc.contract_shares.insert("C".into(), 10.0);
        cfg.accounts.push(acc);

        let problems = account_problems(&cfg);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("duplicate"));
        assert!(problems[1].contains("110"));
    }

    #[test]
    fn default_config_is_clean() {
        assert!(account_problems(&Config::default()).is_empty());
    }
}
