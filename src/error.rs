// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required field was left blank.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// An amount that has to be strictly positive was not.
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    #[error("amount {0} would overflow the stored balance")]
    AmountOverflow(Decimal),

    #[error("unknown category '{0}' (use fixed|variable|daily|extraordinary)")]
    UnknownCategory(String),

    #[error("unknown investment type '{0}' (use fixed-income|stocks|real-estate-funds|crypto)")]
    UnknownInvestmentKind(String),

    #[error("unknown setting '{0}' (use name|currency|fixed_expense_alert_pct)")]
    UnknownSetting(String),

    #[error("invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },

    /// A stored value could not be decoded.
    #[error("stored data under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode data: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
