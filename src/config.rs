// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::store::Storage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SETTINGS_KEY: &str = "settings";

/// User preferences, kept next to the collections in the same store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Profile name used to greet the user.
    pub name: String,
    /// Display code printed next to amounts. No conversion happens.
    pub currency: String,
    /// Warn when fixed expenses exceed this share (percent) of monthly income.
    pub fixed_expense_alert_pct: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            currency: "BRL".to_string(),
            fixed_expense_alert_pct: Decimal::from(50),
        }
    }
}

impl Settings {
    pub const KEYS: [&'static str; 3] = ["name", "currency", "fixed_expense_alert_pct"];

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        let settings = match storage.read(SETTINGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::Corrupt {
                key: SETTINGS_KEY.to_string(),
                source,
            })?,
            None => Settings::default(),
        };
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        let raw = serde_json::to_string(self).map_err(Error::Encode)?;
        storage.write(SETTINGS_KEY, &raw)
    }

    /// Drops the stored settings so the next load starts from defaults.
    pub fn reset(storage: &dyn Storage) -> Result<()> {
        storage.remove(SETTINGS_KEY)?;
        debug!("settings reset");
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim() {
            "name" => {
                if value.is_empty() {
                    return Err(Error::MissingField("name"));
                }
                self.name = value.to_string();
            }
            "currency" => {
                if value.is_empty() {
                    return Err(Error::MissingField("currency"));
                }
                self.currency = value.to_uppercase();
            }
            "fixed_expense_alert_pct" => {
                let pct = value
                    .parse::<Decimal>()
                    .ok()
                    .filter(|p| *p >= Decimal::ZERO)
                    .ok_or_else(|| Error::InvalidSetting {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                self.fixed_expense_alert_pct = pct;
            }
            other => return Err(Error::UnknownSetting(other.to_string())),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (Self::KEYS[0], self.name.clone()),
            (Self::KEYS[1], self.currency.clone()),
            (Self::KEYS[2], self.fixed_expense_alert_pct.to_string()),
        ]
    }
}
