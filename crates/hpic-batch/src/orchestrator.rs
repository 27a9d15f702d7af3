// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Job Orchestrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One hPIC job per SOLPS row, plus the driver script that runs them.
//!
//! Layout under the output root:
//!
//! ```text
//! hpic_results/<label>/<simulation_id>/     one per row
//! scripts/run-hpic-<label>.sh               executable driver
//! ```
//!
//! Rows are processed in table order and the first failing row aborts the
//! batch. The driver script is written only after every row succeeded.

use crate::cmdline::{self, CommandLine};
use crate::identity;
use crate::script::{self, DriverScript};
use crate::table::{columns_of_interest, DataTable};
use hpic_types::config::HpicConfig;
use hpic_types::constants::{DEFAULT_RESULTS_DIR, DEFAULT_SCRIPTS_DIR, DEFAULT_SOLVER};
use hpic_types::error::{HpicError, HpicResult};
use hpic_types::row::DataRow;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Where output goes and which solver the script calls.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Directory the script is meant to be run from.
    pub root: PathBuf,
    /// Results directory, relative to `root`.
    pub results_dir: PathBuf,
    /// Script directory, relative to `root`.
    pub scripts_dir: PathBuf,
    pub solver: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            scripts_dir: PathBuf::from(DEFAULT_SCRIPTS_DIR),
            solver: DEFAULT_SOLVER.to_string(),
        }
    }
}

impl OutputLayout {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> HpicResult<()> {
        let plain = |p: &Path| {
            p.components().next().is_some()
                && p
                    .components()
                    .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        };
        if !plain(self.results_dir.as_path()) {
            return Err(HpicError::ConfigError(format!(
                "results directory must be a relative path below the output root, got {}",
                self.results_dir.display()
            )));
        }
        if self.scripts_dir.as_os_str().is_empty() {
            return Err(HpicError::ConfigError(
                "scripts directory must not be empty".into(),
            ));
        }
        if self.solver.is_empty() || self.solver.chars().any(char::is_whitespace) {
            return Err(HpicError::ConfigError(format!(
                "solver must be a single word, got {:?}",
                self.solver
            )));
        }
        Ok(())
    }

    /// `<results_dir>/<label>`, relative to the root.
    pub fn data_set_dir(&self, data_set_label: &str) -> PathBuf {
        self.results_dir.join(data_set_label)
    }

    pub fn script_path(&self, data_set_label: &str) -> PathBuf {
        self.root
            .join(&self.scripts_dir)
            .join(script::script_file_name(data_set_label))
    }
}

/// Dataset label: the input file name up to its first `.`.
///
/// `/data/solps_case1.v2.csv` → `solps_case1`.
pub fn data_set_label(datafile: &Path) -> HpicResult<String> {
    let name = datafile
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            HpicError::ConfigError(format!(
                "cannot derive dataset label from {}",
                datafile.display()
            ))
        })?;
    let label = name.split('.').next().unwrap_or_default();
    if label.is_empty() {
        return Err(HpicError::ConfigError(format!(
            "dataset label of {} is empty",
            datafile.display()
        )));
    }
    Ok(label.to_string())
}

/// A fully specified hPIC invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationJob {
    pub simulation_id: String,
    pub command_line: CommandLine,
    /// Relative to the output root.
    pub output_directory: PathBuf,
}

impl SimulationJob {
    pub fn build(row: &DataRow, config: &HpicConfig, data_set_dir: &Path) -> HpicResult<Self> {
        let command_line = cmdline::build_command_line(row, config)?;
        let simulation_id = identity::simulation_id_for(row)?;
        Ok(Self {
            output_directory: data_set_dir.join(&simulation_id),
            simulation_id,
            command_line,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub data_set_label: String,
    pub script_path: PathBuf,
    /// In table order.
    pub jobs: Vec<SimulationJob>,
}

fn ensure_dir(path: &Path) -> HpicResult<()> {
    std::fs::create_dir_all(path).map_err(|source| HpicError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

/// Build every job of `table`, create the job directories and write the
/// driver script.
pub fn configure_simulations(
    data_set_label: &str,
    table: &DataTable,
    config: &HpicConfig,
    layout: &OutputLayout,
) -> HpicResult<BatchSummary> {
    config.validate()?;
    layout.validate()?;

    let data_set_dir = layout.data_set_dir(data_set_label);
    ensure_dir(&layout.root.join(&data_set_dir))?;
    info!(
        "Configuring {} hPIC simulations for dataset '{}'",
        table.len(),
        data_set_label
    );

    let mut driver = DriverScript::new();
    let mut jobs = Vec::with_capacity(table.len());
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(table.len());

    for row in &table.rows {
        let job = SimulationJob::build(row, config, &data_set_dir)?;
        if !seen_ids.insert(job.simulation_id.clone()) {
            warn!(
                "Row {} reuses simulation id '{}'; its job shares a directory with an earlier row",
                row.index, job.simulation_id
            );
        }

        ensure_dir(&layout.root.join(&job.output_directory))?;
        driver.push_job(
            &job.simulation_id,
            &job.output_directory,
            &layout.solver,
            &job.command_line.render(),
        )?;
        debug!(row = row.index, id = %job.simulation_id, "queued hPIC job");
        jobs.push(job);
    }

    let script_path = layout.script_path(data_set_label);
    driver.write(&script_path)?;
    info!(
        "Wrote {} jobs to {}",
        driver.len(),
        script_path.display()
    );

    Ok(BatchSummary {
        data_set_label: data_set_label.to_string(),
        script_path,
        jobs,
    })
}

/// Load `datafile` and configure its batch.
pub fn configure_from_file(
    datafile: &Path,
    config: &HpicConfig,
    layout: &OutputLayout,
    delimiter: u8,
) -> HpicResult<BatchSummary> {
    let label = data_set_label(datafile)?;
    let wanted = columns_of_interest(&config.species);
    let table = DataTable::from_path(datafile, &wanted, delimiter)?;
    for missing in table.missing_columns(&wanted) {
        warn!("Column '{}' not found in {}", missing, datafile.display());
    }
    configure_simulations(&label, &table, config, layout)
}
