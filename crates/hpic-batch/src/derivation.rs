// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Parameter Derivation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-row hPIC parameters.
//!
//! Discretization, boundary and RF values currently come straight from the
//! run configuration. Every function still takes the row so a per-row
//! derivation (e.g. domain size from the local Debye length) can slot in
//! without touching the serializer.

use hpic_types::config::HpicConfig;
use hpic_types::error::HpicResult;
use hpic_types::row::DataRow;

/// The five numerical discretization parameters, in hPIC argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discretization {
    pub domain_debye_lengths: u32,
    pub grid_points_per_debye_length: u32,
    pub time_steps_per_gyroperiod: u32,
    pub ion_transit_times: u32,
    pub particles_per_cell: u32,
}

impl Discretization {
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.domain_debye_lengths,
            self.grid_points_per_debye_length,
            self.time_steps_per_gyroperiod,
            self.ion_transit_times,
            self.particles_per_cell,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RfWave {
    /// [rad/s]
    pub angular_frequency: f64,
    pub voltage_right: f64,
    pub voltage_left: f64,
}

/// Ion triple as hPIC reads it: `Ai Zi n_i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesParameters {
    pub mass_number: u32,
    pub charge_number: i32,
    /// Number density [m⁻³]
    pub density: f64,
}

pub fn domain_debye_lengths(_row: &DataRow, config: &HpicConfig) -> u32 {
    config.discretization.domain_debye_lengths
}

pub fn grid_points_per_debye_length(_row: &DataRow, config: &HpicConfig) -> u32 {
    config.discretization.grid_points_per_debye_length
}

pub fn time_steps_per_gyroperiod(_row: &DataRow, config: &HpicConfig) -> u32 {
    config.discretization.time_steps_per_gyroperiod
}

pub fn ion_transit_times(_row: &DataRow, config: &HpicConfig) -> u32 {
    config.discretization.ion_transit_times
}

pub fn particles_per_cell(_row: &DataRow, config: &HpicConfig) -> u32 {
    config.discretization.particles_per_cell
}

pub fn discretization(row: &DataRow, config: &HpicConfig) -> Discretization {
    Discretization {
        domain_debye_lengths: domain_debye_lengths(row, config),
        grid_points_per_debye_length: grid_points_per_debye_length(row, config),
        time_steps_per_gyroperiod: time_steps_per_gyroperiod(row, config),
        ion_transit_times: ion_transit_times(row, config),
        particles_per_cell: particles_per_cell(row, config),
    }
}

pub fn boundary_conditions(_row: &DataRow, config: &HpicConfig) -> BoundaryConditions {
    BoundaryConditions {
        left: config.boundary.left_value,
        right: config.boundary.right_value,
    }
}

pub fn rf_wave(_row: &DataRow, config: &HpicConfig) -> RfWave {
    RfWave {
        angular_frequency: config.rf_wave.angular_frequency,
        voltage_right: config.rf_wave.voltage_right,
        voltage_left: config.rf_wave.voltage_left,
    }
}

/// One triple per registered species, in registry order.
///
/// Fails on the first species whose density column is missing; never
/// substitutes zero.
pub fn species_parameters(row: &DataRow, config: &HpicConfig) -> HpicResult<Vec<SpeciesParameters>> {
    config
        .species
        .iter()
        .map(|species| {
            Ok(SpeciesParameters {
                mass_number: species.mass_number,
                charge_number: species.charge_number,
                density: row.species_density(&species.name)?,
            })
        })
        .collect()
}
