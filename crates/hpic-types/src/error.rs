// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HpicError {
    #[error("Row {row}: missing required field '{field}'")]
    MissingField { field: String, row: usize },

    #[error("Row {row}: missing density column for ion species '{species}'")]
    MissingSpeciesDensity { species: String, row: usize },

    #[error("Row {row}: column '{column}' is not a finite number: {value:?}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Ion species '{0}' registered more than once")]
    DuplicateSpecies(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HpicResult<T> = Result<T, HpicError>;
