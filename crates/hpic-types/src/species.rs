// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Ion Species Registry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ion species tracked in the input table.
//!
//! Each registered species contributes one density column (named after the
//! species) and one `Ai Zi n_i` triple on the solver command line. The
//! registry keeps insertion order because the solver reads the triples
//! positionally.

use crate::error::{HpicError, HpicResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single ion species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IonSpecies {
    /// Species name; also the density column header.
    pub name: String,
    /// Mass number.
    #[serde(rename = "Ai")]
    pub mass_number: u32,
    /// Charge number.
    #[serde(rename = "Zi")]
    pub charge_number: i32,
}

impl IonSpecies {
    pub fn new(name: impl Into<String>, mass_number: u32, charge_number: i32) -> Self {
        Self {
            name: name.into(),
            mass_number,
            charge_number,
        }
    }
}

/// Ordered species registry. Immutable once a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<IonSpecies>", into = "Vec<IonSpecies>")]
pub struct SpeciesRegistry {
    species: Vec<IonSpecies>,
}

impl SpeciesRegistry {
    pub fn empty() -> Self {
        Self {
            species: Vec::new(),
        }
    }

    /// Build a registry, rejecting duplicate names.
    pub fn from_species(species: Vec<IonSpecies>) -> HpicResult<Self> {
        let mut registry = Self::empty();
        for s in species {
            registry.insert(s)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, species: IonSpecies) -> HpicResult<()> {
        if species.name.trim().is_empty() {
            return Err(HpicError::ConfigError(
                "ion species name must not be empty".into(),
            ));
        }
        if self.get(&species.name).is_some() {
            return Err(HpicError::DuplicateSpecies(species.name));
        }
        self.species.push(species);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&IonSpecies> {
        self.species.iter().find(|s| s.name == name)
    }

    /// Species in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, IonSpecies> {
        self.species.iter()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.iter().map(|s| s.name.as_str())
    }

    pub fn validate(&self) -> HpicResult<()> {
        if self.species.is_empty() {
            return Err(HpicError::ConfigError(
                "species registry must contain at least one ion species".into(),
            ));
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.species.len());
        for s in &self.species {
            if !seen.insert(s.name.as_str()) {
                return Err(HpicError::DuplicateSpecies(s.name.clone()));
            }
        }
        Ok(())
    }
}

/// Deuterium only.
impl Default for SpeciesRegistry {
    fn default() -> Self {
        Self {
            species: vec![IonSpecies::new("D", 2, 1)],
        }
    }
}

impl TryFrom<Vec<IonSpecies>> for SpeciesRegistry {
    type Error = HpicError;

    fn try_from(species: Vec<IonSpecies>) -> HpicResult<Self> {
        Self::from_species(species)
    }
}

impl From<SpeciesRegistry> for Vec<IonSpecies> {
    fn from(registry: SpeciesRegistry) -> Self {
        registry.species
    }
}

impl<'a> IntoIterator for &'a SpeciesRegistry {
    type Item = &'a IonSpecies;
    type IntoIter = std::slice::Iter<'a, IonSpecies>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}
