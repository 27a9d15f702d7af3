// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Data Row
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{COL_B_ANGLE, COL_B_MAGNITUDE, COL_SEPARATION, COL_TE, COL_TI};
use crate::error::{HpicError, HpicResult};
use std::collections::HashMap;

/// One sample of SOLPS target data, addressed by column header.
/// Absent columns and empty cells are simply not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRow {
    /// Zero-based position in the input table.
    pub index: usize,
    values: HashMap<String, f64>,
}

impl DataRow {
    pub fn new(index: usize) -> Self {
        DataRow {
            index,
            values: HashMap::new(),
        }
    }

    /// Builder-style insert, mostly for fixtures.
    pub fn with(mut self, column: impl Into<String>, value: f64) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: f64) {
        self.values.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Required column; a missing value names the field and row.
    pub fn field(&self, column: &str) -> HpicResult<f64> {
        self.get(column).ok_or_else(|| HpicError::MissingField {
            field: column.to_string(),
            row: self.index,
        })
    }

    /// Density column of an ion species.
    pub fn species_density(&self, species: &str) -> HpicResult<f64> {
        self.get(species)
            .ok_or_else(|| HpicError::MissingSpeciesDensity {
                species: species.to_string(),
                row: self.index,
            })
    }

    /// |B| [T]
    pub fn b_magnitude(&self) -> HpicResult<f64> {
        self.field(COL_B_MAGNITUDE)
    }

    /// Field angle [deg]
    pub fn b_angle(&self) -> HpicResult<f64> {
        self.field(COL_B_ANGLE)
    }

    /// Te [eV]
    pub fn electron_temperature(&self) -> HpicResult<f64> {
        self.field(COL_TE)
    }

    /// Ti [eV]
    pub fn ion_temperature(&self) -> HpicResult<f64> {
        self.field(COL_TI)
    }

    /// Signed distance from the strike point [m]
    pub fn separation(&self) -> HpicResult<f64> {
        self.field(COL_SEPARATION)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
