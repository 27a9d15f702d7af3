// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{HpicError, HpicResult};
use crate::species::SpeciesRegistry;
use serde::{Deserialize, Serialize};

/// Run-wide settings shared by every generated hPIC job.
/// Every section is optional in JSON; omitted sections take the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HpicConfig {
    #[serde(default)]
    pub discretization: DiscretizationConfig,
    #[serde(default)]
    pub boundary: BoundaryConfig,
    #[serde(default)]
    pub rf_wave: RfWaveConfig,
    #[serde(default)]
    pub cadence: OutputCadence,
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub species: SpeciesRegistry,
}

/// Numerical discretization of one hPIC run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizationConfig {
    /// Domain size in Debye lengths (default: 50)
    #[serde(default = "default_domain_debye_lengths")]
    pub domain_debye_lengths: u32,
    /// Grid points per Debye length (default: 1)
    #[serde(default = "default_grid_points_per_debye_length")]
    pub grid_points_per_debye_length: u32,
    /// Time steps per ion gyroperiod (default: 20)
    #[serde(default = "default_time_steps_per_gyroperiod")]
    pub time_steps_per_gyroperiod: u32,
    /// Number of ion transit times to simulate (default: 1)
    #[serde(default = "default_ion_transit_times")]
    pub ion_transit_times: u32,
    /// Macro-particles per cell (default: 500)
    #[serde(default = "default_particles_per_cell")]
    pub particles_per_cell: u32,
}

fn default_domain_debye_lengths() -> u32 {
    50
}
fn default_grid_points_per_debye_length() -> u32 {
    1
}
fn default_time_steps_per_gyroperiod() -> u32 {
    20
}
fn default_ion_transit_times() -> u32 {
    1
}
fn default_particles_per_cell() -> u32 {
    500
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        DiscretizationConfig {
            domain_debye_lengths: default_domain_debye_lengths(),
            grid_points_per_debye_length: default_grid_points_per_debye_length(),
            time_steps_per_gyroperiod: default_time_steps_per_gyroperiod(),
            ion_transit_times: default_ion_transit_times(),
            particles_per_cell: default_particles_per_cell(),
        }
    }
}

/// Potential at the left/right domain boundaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    #[serde(default)]
    pub left_value: f64,
    #[serde(default)]
    pub right_value: f64,
}

/// RF wave driving the right/left walls. All zero disables RF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RfWaveConfig {
    /// Angular frequency [rad/s]
    #[serde(default)]
    pub angular_frequency: f64,
    #[serde(default)]
    pub voltage_right: f64,
    #[serde(default)]
    pub voltage_left: f64,
}

/// How many times over the run hPIC prints or saves each output kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputCadence {
    /// Info lines printed to stdout (default: 10)
    #[serde(default = "default_info_prints")]
    pub info_prints: u32,
    /// GRIDDATA snapshots (default: 50)
    #[serde(default = "default_saves")]
    pub grid_saves: u32,
    /// PARTICLEDATA snapshots (default: 50)
    #[serde(default = "default_saves")]
    pub particle_saves: u32,
    /// Fluid moment snapshots (default: 50)
    #[serde(default = "default_saves")]
    pub fluid_saves: u32,
}

fn default_info_prints() -> u32 {
    10
}
fn default_saves() -> u32 {
    50
}

impl Default for OutputCadence {
    fn default() -> Self {
        OutputCadence {
            info_prints: default_info_prints(),
            grid_saves: default_saves(),
            particle_saves: default_saves(),
            fluid_saves: default_saves(),
        }
    }
}

/// Segment type of a PUMI submesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshKind {
    #[serde(rename = "uniform")]
    Uniform,
    #[serde(rename = "leftBL")]
    LeftBoundaryLayer,
    #[serde(rename = "rightBL")]
    RightBoundaryLayer,
}

impl MeshKind {
    /// Tag hPIC expects on its command line.
    pub fn tag(self) -> &'static str {
        match self {
            MeshKind::Uniform => "uniform",
            MeshKind::LeftBoundaryLayer => "leftBL",
            MeshKind::RightBoundaryLayer => "rightBL",
        }
    }
}

/// One contiguous region of the 1D mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submesh {
    #[serde(default = "default_mesh_kind")]
    pub kind: MeshKind,
    /// Debye lengths covered by this submesh; ignored for `uniform`.
    #[serde(default = "default_submesh_debye_lengths")]
    pub debye_lengths: u32,
    /// Element count of this submesh.
    #[serde(default = "default_submesh_elements")]
    pub elements: u32,
    /// Minimum-size cells per Debye length (leftBL/rightBL only).
    #[serde(default)]
    pub min_cells_per_debye_length: u32,
}

fn default_mesh_kind() -> MeshKind {
    MeshKind::Uniform
}
fn default_submesh_debye_lengths() -> u32 {
    50
}
fn default_submesh_elements() -> u32 {
    60
}

impl Default for Submesh {
    fn default() -> Self {
        Submesh {
            kind: default_mesh_kind(),
            debye_lengths: default_submesh_debye_lengths(),
            elements: default_submesh_elements(),
            min_cells_per_debye_length: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    #[serde(default = "default_submeshes")]
    pub submeshes: Vec<Submesh>,
}

fn default_submeshes() -> Vec<Submesh> {
    vec![Submesh::default()]
}

impl Default for MeshConfig {
    fn default() -> Self {
        MeshConfig {
            submeshes: default_submeshes(),
        }
    }
}

impl HpicConfig {
    /// Load from JSON file and validate.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> HpicResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HpicResult<()> {
        let d = &self.discretization;
        for (name, value) in [
            ("domain_debye_lengths", d.domain_debye_lengths),
            ("grid_points_per_debye_length", d.grid_points_per_debye_length),
            ("time_steps_per_gyroperiod", d.time_steps_per_gyroperiod),
            ("ion_transit_times", d.ion_transit_times),
            ("particles_per_cell", d.particles_per_cell),
        ] {
            if value == 0 {
                return Err(HpicError::ConfigError(format!(
                    "discretization.{name} must be >= 1"
                )));
            }
        }

        let c = &self.cadence;
        for (name, value) in [
            ("info_prints", c.info_prints),
            ("grid_saves", c.grid_saves),
            ("particle_saves", c.particle_saves),
            ("fluid_saves", c.fluid_saves),
        ] {
            if value == 0 {
                return Err(HpicError::ConfigError(format!(
                    "cadence.{name} must be >= 1"
                )));
            }
        }

        let b = &self.boundary;
        let rf = &self.rf_wave;
        if !b.left_value.is_finite() || !b.right_value.is_finite() {
            return Err(HpicError::ConfigError(
                "boundary values must be finite".into(),
            ));
        }
        if !rf.angular_frequency.is_finite()
            || !rf.voltage_right.is_finite()
            || !rf.voltage_left.is_finite()
        {
            return Err(HpicError::ConfigError(
                "RF wave parameters must be finite".into(),
            ));
        }

        if self.mesh.submeshes.is_empty() {
            return Err(HpicError::ConfigError(
                "mesh requires at least one submesh".into(),
            ));
        }
        for (idx, sub) in self.mesh.submeshes.iter().enumerate() {
            if sub.elements == 0 {
                return Err(HpicError::ConfigError(format!(
                    "mesh.submeshes[{idx}] requires elements >= 1"
                )));
            }
        }

        self.species.validate()
    }
}
