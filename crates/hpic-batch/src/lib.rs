// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — hPIC Batch Configuration
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! SOLPS target profiles → hPIC jobs.
//!
//! Derivation and identity feed the command-line serializer; the
//! orchestrator turns a whole table into job directories and a driver script.

pub mod cmdline;
pub mod derivation;
pub mod identity;
pub mod mesh;
pub mod orchestrator;
pub mod script;
pub mod table;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global `fmt` subscriber. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hpic_batch=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
