// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Magnetic field magnitude column (T).
pub const COL_B_MAGNITUDE: &str = "|B| (T)";

/// Magnetic field angle to the surface (deg).
pub const COL_B_ANGLE: &str = "Bangle (deg)";

/// Electron temperature (eV).
pub const COL_TE: &str = "Te (eV)";

/// Ion temperature (eV).
pub const COL_TI: &str = "Ti (eV)";

/// Signed distance from the strike point along the target (m).
pub const COL_SEPARATION: &str = "L-Lsep (m)";

/// Physical columns every row must carry, in the order they are serialized
/// (separation last; it only feeds the simulation id).
pub const PHYSICAL_COLUMNS: [&str; 5] = [
    COL_B_MAGNITUDE,
    COL_B_ANGLE,
    COL_TE,
    COL_TI,
    COL_SEPARATION,
];

/// Solver executable invoked by the driver script.
pub const DEFAULT_SOLVER: &str = "hpic";

/// Root directory for all simulation output.
pub const DEFAULT_RESULTS_DIR: &str = "hpic_results";

/// Directory that receives the generated driver scripts.
pub const DEFAULT_SCRIPTS_DIR: &str = "scripts";
