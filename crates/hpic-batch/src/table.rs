// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — SOLPS Table Loader
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Delimited SOLPS target-profile tables.
//!
//! Only the columns of interest are kept. A column of interest that is
//! absent from the header is not an error here; the row accessor reports
//! it (with the row index) when the serializer asks for it.

use hpic_types::constants::PHYSICAL_COLUMNS;
use hpic_types::error::{HpicError, HpicResult};
use hpic_types::row::DataRow;
use hpic_types::species::SpeciesRegistry;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Physical columns plus one density column per registered species.
pub fn columns_of_interest(species: &SpeciesRegistry) -> Vec<String> {
    PHYSICAL_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(species.names().map(str::to_string))
        .collect()
}

/// Rows of a SOLPS table filtered to the columns of interest, in file order.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    /// Columns of interest that were found in the header.
    pub columns: Vec<String>,
    pub rows: Vec<DataRow>,
}

impl DataTable {
    pub fn from_path(
        path: impl AsRef<Path>,
        columns: &[String],
        delimiter: u8,
    ) -> HpicResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| HpicError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, columns, delimiter)
    }

    pub fn from_reader<R: Read>(reader: R, columns: &[String], delimiter: u8) -> HpicResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let selected: Vec<(usize, &String)> = columns
            .iter()
            .filter_map(|wanted| {
                headers
                    .iter()
                    .position(|h| h == wanted.as_str())
                    .map(|idx| (idx, wanted))
            })
            .collect();

        let mut rows = Vec::new();
        for (row_idx, record) in rdr.records().enumerate() {
            let record = record?;
            let mut row = DataRow::new(row_idx);
            for &(col_idx, name) in &selected {
                let raw = record.get(col_idx).unwrap_or("");
                if raw.is_empty() {
                    continue;
                }
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| HpicError::InvalidValue {
                        column: name.clone(),
                        row: row_idx,
                        value: raw.to_string(),
                    })?;
                row.insert(name.clone(), value);
            }
            rows.push(row);
        }

        let found: Vec<String> = selected.into_iter().map(|(_, name)| name.clone()).collect();
        debug!(
            rows = rows.len(),
            columns = found.len(),
            wanted = columns.len(),
            "loaded SOLPS table"
        );
        Ok(DataTable {
            columns: found,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Columns of interest absent from the header.
    pub fn missing_columns<'a>(&self, wanted: &'a [String]) -> Vec<&'a str> {
        wanted
            .iter()
            .filter(|w| !self.columns.iter().any(|c| c == *w))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpic_types::constants::{COL_B_MAGNITUDE, COL_SEPARATION, COL_TE};

    const SAMPLE: &str = "\
|B| (T),Bangle (deg),Te (eV),Ti (eV),L-Lsep (m),D,ne (m-3)
2.1,88.0,20.0,25.0,-0.05,1.0e19,1.1e19
2.2,87.5,30.0,35.0,0.0,2.0e19,2.1e19
2.3,87.0,40.0,45.0,0.05,3.0e19,3.1e19
";

    fn wanted() -> Vec<String> {
        columns_of_interest(&SpeciesRegistry::default())
    }

    #[test]
    fn test_columns_of_interest_order() {
        let cols = wanted();
        assert_eq!(cols.len(), 6);
        assert_eq!(cols[0], COL_B_MAGNITUDE);
        assert_eq!(cols[4], COL_SEPARATION);
        assert_eq!(cols[5], "D");
    }

    #[test]
    fn test_load_filters_columns_and_keeps_order() {
        let table = DataTable::from_reader(SAMPLE.as_bytes(), &wanted(), b',').unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns.len(), 6);
        for (i, row) in table.rows.iter().enumerate() {
            assert_eq!(row.index, i);
            assert!(!row.contains("ne (m-3)"));
            assert_eq!(row.len(), 6);
        }
        assert_eq!(table.rows[0].separation().unwrap(), -0.05);
        assert_eq!(table.rows[2].field(COL_TE).unwrap(), 40.0);
        assert_eq!(table.rows[1].species_density("D").unwrap(), 2.0e19);
    }

    #[test]
    fn test_missing_column_is_reported_not_fatal() {
        let text = "|B| (T),Bangle (deg),Te (eV),Ti (eV),L-Lsep (m)\n1,2,3,4,5\n";
        let cols = wanted();
        let table = DataTable::from_reader(text.as_bytes(), &cols, b',').unwrap();
        assert_eq!(table.missing_columns(&cols), vec!["D"]);
        assert!(table.rows[0].species_density("D").is_err());
    }

    #[test]
    fn test_whitespace_and_custom_delimiter() {
        let text = " |B| (T) ; Bangle (deg) ;Te (eV);Ti (eV);L-Lsep (m);D\n 1.5 ; 80 ;10;12; 0.2 ;4e18\n";
        let table = DataTable::from_reader(text.as_bytes(), &wanted(), b';').unwrap();
        assert_eq!(table.rows[0].b_magnitude().unwrap(), 1.5);
        assert_eq!(table.rows[0].species_density("D").unwrap(), 4e18);
    }

    #[test]
    fn test_empty_cell_is_missing_field() {
        let text = "|B| (T),Bangle (deg),Te (eV),Ti (eV),L-Lsep (m),D\n1,2,,4,5,6\n";
        let table = DataTable::from_reader(text.as_bytes(), &wanted(), b',').unwrap();
        let err = table.rows[0].electron_temperature().unwrap_err();
        assert!(matches!(err, HpicError::MissingField { row: 0, .. }));
    }

    #[test]
    fn test_non_numeric_cell_is_error() {
        let text = "|B| (T),Bangle (deg),Te (eV),Ti (eV),L-Lsep (m),D\n1,2,hot,4,5,6\n";
        let err = DataTable::from_reader(text.as_bytes(), &wanted(), b',').unwrap_err();
        match err {
            HpicError::InvalidValue { column, row, value } => {
                assert_eq!(column, COL_TE);
                assert_eq!(row, 0);
                assert_eq!(value, "hot");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_cell_is_error() {
        for (cell, col) in [("nan", COL_B_MAGNITUDE), ("inf", COL_TE), ("-Infinity", COL_TE)] {
            let text = if col == COL_TE {
                format!("|B| (T),Bangle (deg),Te (eV),Ti (eV),L-Lsep (m),D\n1,2,{cell},4,5,6\n")
            } else {
                format!("|B| (T),Bangle (deg),Te (eV),Ti (eV),L-Lsep (m),D\n{cell},2,3,4,5,6\n")
            };
            let err = DataTable::from_reader(text.as_bytes(), &wanted(), b',').unwrap_err();
            match err {
                HpicError::InvalidValue { column, row, value } => {
                    assert_eq!(column, col);
                    assert_eq!(row, 0);
                    assert_eq!(value, cell);
                }
                other => panic!("expected InvalidValue for {cell}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nan_separation_is_rejected_before_naming_a_job() {
        let text = "|B| (T),Bangle (deg),Te (eV),Ti (eV),L-Lsep (m),D\n1,2,3,4,5,1e19\nnan,1,2,3,NaN,1e19\n";
        let err = DataTable::from_reader(text.as_bytes(), &wanted(), b',').unwrap_err();
        assert!(matches!(err, HpicError::InvalidValue { row: 1, .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = DataTable::from_path("/nonexistent/solps.csv", &wanted(), b',').unwrap_err();
        assert!(matches!(err, HpicError::Filesystem { .. }));
    }
}
