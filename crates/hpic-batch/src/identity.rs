// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Simulation Identity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One hPIC simulation per position relative to the strike point.
//!
//! The id doubles as the job directory name, so it only ever contains
//! `[a-z0-9._]`. Two rows with the same sign and the same separation at
//! millimetre resolution map to the same id.

use crate::cmdline::format_fixed;
use hpic_types::error::HpicResult;
use hpic_types::row::DataRow;

/// `plus_0.125m_separation`, `minus_2.500m_separation`, ...
///
/// Zero (and -0.0) is `minus`.
pub fn simulation_id(separation: f64) -> String {
    let sign = if separation > 0.0 { "plus" } else { "minus" };
    format!("{sign}_{}m_separation", format_fixed(separation.abs(), 3))
}

pub fn simulation_id_for(row: &DataRow) -> HpicResult<String> {
    Ok(simulation_id(row.separation()?))
}
