use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An employee account as declared in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password_digest: String,
    pub display_name: String,
    #[serde(default)]
    pub role_title: String,
    /// contract name → percentage of worked hours
    #[serde(default)]
    pub contract_shares: BTreeMap<String, f64>,
}

impl UserAccount {
    pub fn shares_total(&self) -> f64 {
        self.contract_shares.values().sum()
    }

    /// Contract shares are expected to add up to 100%.
    pub fn shares_are_complete(&self) -> bool {
        self.contract_shares.is_empty() || (self.shares_total() - 100.0).abs() < 1e-6
    }
}
