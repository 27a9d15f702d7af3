// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — hPIC Command-Line Serializer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Positional argument list for `hpic -command_line`.
//!
//! Token order:
//!
//! ```text
//! SimID
//! p1 p2 p3 p4 p5                     discretization, integers
//! B0 psi Te Ti                       %.5f
//! BC_left BC_right                   %.5f
//! Omega V_rf_right V_rf_left         %.2f
//! k_info k_grid k_part k_fluid       integers
//! Ai Zi n_i                          per species, n_i as %.5e
//! N "type" "p1" "Nel" "p2min"        mesh block, see `mesh`
//! ```
//!
//! hPIC parses this positionally and is whitespace- and quote-sensitive,
//! so formatting here is pinned by byte-exact tests.

use crate::derivation;
use crate::identity;
use crate::mesh;
use hpic_types::config::HpicConfig;
use hpic_types::error::HpicResult;
use hpic_types::row::DataRow;
use std::fmt;

/// A single command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Written as-is.
    Bare(String),
    /// Written wrapped in double quotes.
    Quoted(String),
}

impl Token {
    pub fn value(&self) -> &str {
        match self {
            Token::Bare(s) | Token::Quoted(s) => s,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bare(s) => f.write_str(s),
            Token::Quoted(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Join tokens with single spaces, no leading or trailing whitespace.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&token.to_string());
    }
    out
}

/// Ordered hPIC arguments for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandLine {
    tokens: Vec<Token>,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_bare(&mut self, value: impl Into<String>) {
        self.push(Token::Bare(value.into()));
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn render(&self) -> String {
        render_tokens(&self.tokens)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Extend<Token> for CommandLine {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

/// Fixed-point with `digits` decimals (`%.Nf`).
pub fn format_fixed(value: f64, digits: usize) -> String {
    match non_finite(value) {
        Some(text) => text.to_string(),
        None => format!("{value:.digits$}"),
    }
}

/// C spelling of NaN and the infinities; `None` for finite values.
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

/// Scientific notation in the C/Python `%.Ne` shape: `1.23456e+19`,
/// `5.00000e-03`. The exponent always carries a sign and at least two digits.
pub fn format_scientific(value: f64, digits: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let raw = format!("{value:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, magnitude) = match exponent.strip_prefix('-') {
                Some(m) => ('-', m),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{magnitude:0>2}")
        }
        None => raw,
    }
}

/// Build the full argument list for one row.
///
/// Every field is read before anything else is derived, so a row with a
/// missing column fails without producing a partial command line.
pub fn build_command_line(row: &DataRow, config: &HpicConfig) -> HpicResult<CommandLine> {
    let sim_id = identity::simulation_id_for(row)?;
    let plasma = [
        row.b_magnitude()?,
        row.b_angle()?,
        row.electron_temperature()?,
        row.ion_temperature()?,
    ];
    let species = derivation::species_parameters(row, config)?;

    let discretization = derivation::discretization(row, config);
    let boundary = derivation::boundary_conditions(row, config);
    let rf = derivation::rf_wave(row, config);
    let cadence = &config.cadence;

    let mut cla = CommandLine::new();
    cla.push_bare(sim_id);

    for p in discretization.as_array() {
        cla.push_bare(p.to_string());
    }
    for x in plasma {
        cla.push_bare(format_fixed(x, 5));
    }
    cla.push_bare(format_fixed(boundary.left, 5));
    cla.push_bare(format_fixed(boundary.right, 5));

    for x in [rf.angular_frequency, rf.voltage_right, rf.voltage_left] {
        cla.push_bare(format_fixed(x, 2));
    }

    for k in [
        cadence.info_prints,
        cadence.grid_saves,
        cadence.particle_saves,
        cadence.fluid_saves,
    ] {
        cla.push_bare(k.to_string());
    }

    for ion in &species {
        cla.push_bare(ion.mass_number.to_string());
        cla.push_bare(ion.charge_number.to_string());
        cla.push_bare(format_scientific(ion.density, 5));
    }

    cla.extend(mesh::mesh_tokens(&config.mesh));
    Ok(cla)
}

/// Serialized argument string and the simulation id it starts with.
pub fn format_hpic_command_line_args(
    row: &DataRow,
    config: &HpicConfig,
) -> HpicResult<(String, String)> {
    let cla = build_command_line(row, config)?;
    let sim_id = cla
        .tokens()
        .first()
        .map(|t| t.value().to_string())
        .unwrap_or_default();
    Ok((cla.render(), sim_id))
}

/// Logical token count for `species` ion species and `submeshes` submeshes.
pub fn expected_token_count(species: usize, submeshes: usize) -> usize {
    1 + 5 + 4 + 2 + 3 + 4 + 3 * species + 1 + 4 * submeshes
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpic_types::constants::{COL_B_ANGLE, COL_B_MAGNITUDE, COL_SEPARATION, COL_TE, COL_TI};
    use hpic_types::error::HpicError;
    use hpic_types::species::{IonSpecies, SpeciesRegistry};

    fn sample_row() -> DataRow {
        DataRow::new(0)
            .with(COL_B_MAGNITUDE, 2.345678)
            .with(COL_B_ANGLE, 87.5)
            .with(COL_TE, 25.0)
            .with(COL_TI, 30.123456)
            .with(COL_SEPARATION, 0.125)
            .with("D", 1.23456e19)
    }

    #[test]
    fn test_full_command_line_bytes() {
        let (args, sim_id) =
            format_hpic_command_line_args(&sample_row(), &HpicConfig::default()).unwrap();
        assert_eq!(sim_id, "plus_0.125m_separation");
        assert_eq!(
            args,
            "plus_0.125m_separation 50 1 20 1 500 \
             2.34568 87.50000 25.00000 30.12346 \
             0.00000 0.00000 \
             0.00 0.00 0.00 \
             10 50 50 50 \
             2 1 1.23456e+19 \
             1 \"uniform\" \"50\" \"60\" \"0\""
        );
    }

    #[test]
    fn test_species_segment() {
        let (args, _) =
            format_hpic_command_line_args(&sample_row(), &HpicConfig::default()).unwrap();
        assert!(args.contains(" 50 50 50 2 1 1.23456e+19 1 \"uniform\""));
    }

    #[test]
    fn test_multiple_species_follow_registry_order() {
        let mut cfg = HpicConfig::default();
        cfg.species = SpeciesRegistry::from_species(vec![
            IonSpecies::new("D", 2, 1),
            IonSpecies::new("C+6", 12, 6),
        ])
        .unwrap();
        let row = sample_row().with("C+6", 5.0e16);
        let cla = build_command_line(&row, &cfg).unwrap();
        assert_eq!(cla.len(), expected_token_count(2, 1));
        assert!(cla
            .render()
            .contains("2 1 1.23456e+19 12 6 5.00000e+16 1 \"uniform\""));
    }

    #[test]
    fn test_token_count_default() {
        let cla = build_command_line(&sample_row(), &HpicConfig::default()).unwrap();
        assert_eq!(cla.len(), 1 + 5 + 4 + 2 + 3 + 4 + 3 + 1 + 4);
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let (args, _) =
            format_hpic_command_line_args(&sample_row(), &HpicConfig::default()).unwrap();
        assert!(args.ends_with("\"0\""));
        assert!(!args.contains("  "));
    }

    #[test]
    fn test_missing_species_column_is_error() {
        let row = DataRow::new(5)
            .with(COL_B_MAGNITUDE, 1.0)
            .with(COL_B_ANGLE, 1.0)
            .with(COL_TE, 1.0)
            .with(COL_TI, 1.0)
            .with(COL_SEPARATION, 1.0);
        let err = build_command_line(&row, &HpicConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            HpicError::MissingSpeciesDensity { ref species, row: 5 } if species == "D"
        ));
    }

    #[test]
    fn test_missing_physical_field_is_error() {
        let row = DataRow::new(1)
            .with(COL_B_MAGNITUDE, 1.0)
            .with(COL_TE, 1.0)
            .with(COL_TI, 1.0)
            .with(COL_SEPARATION, 1.0)
            .with("D", 1e19);
        let err = build_command_line(&row, &HpicConfig::default()).unwrap_err();
        assert!(
            matches!(err, HpicError::MissingField { ref field, row: 1 } if field == COL_B_ANGLE)
        );
    }

    #[test]
    fn test_format_scientific_python_shape() {
        assert_eq!(format_scientific(1.23456e19, 5), "1.23456e+19");
        assert_eq!(format_scientific(5.0e-3, 5), "5.00000e-03");
        assert_eq!(format_scientific(0.0, 5), "0.00000e+00");
        assert_eq!(format_scientific(-4.2e120, 2), "-4.20e+120");
        assert_eq!(format_scientific(f64::NAN, 5), "nan");
        assert_eq!(format_scientific(f64::NEG_INFINITY, 5), "-inf");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(2.345678, 5), "2.34568");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(-1.5, 5), "-1.50000");
    }

    #[test]
    fn test_non_finite_uses_c_spelling() {
        assert_eq!(format_fixed(f64::NAN, 5), "nan");
        assert_eq!(format_fixed(f64::INFINITY, 2), "inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 5), "-inf");
        assert_eq!(format_scientific(f64::INFINITY, 5), "inf");
    }

    #[test]
    fn test_push_and_push_bare_render_alike() {
        let mut a = CommandLine::new();
        a.push(Token::Bare("50".into()));
        a.push(Token::Quoted("uniform".into()));
        let mut b = CommandLine::new();
        b.push_bare("50");
        b.extend([Token::Quoted("uniform".into())]);
        assert_eq!(a, b);
        assert_eq!(a.render(), "50 \"uniform\"");
    }

    #[test]
    fn test_nonzero_rf_and_boundary() {
        let mut cfg = HpicConfig::default();
        cfg.boundary.left_value = -3.0;
        cfg.rf_wave.angular_frequency = 8.5e7;
        cfg.rf_wave.voltage_right = 12.25;
        let (args, _) = format_hpic_command_line_args(&sample_row(), &cfg).unwrap();
        assert!(args.contains(" -3.00000 0.00000 85000000.00 12.25 0.00 10 50 50 50 "));
    }
}
