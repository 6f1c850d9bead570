// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Material
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Material compositions handed to the transport engine.
//!
//! A material is a density plus an ordered list of nuclides with atom
//! fractions. Elements are expanded to their naturally abundant isotopes
//! when added, so the exported composition only ever names nuclides.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, FissionError, FissionResult};

/// Engine-side material identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    #[serde(rename = "g/cm3")]
    GramPerCc,
}

impl DensityUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            DensityUnit::GramPerCc => "g/cm3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclideFraction {
    pub name: String,
    /// Atom fraction, not normalised.
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub density: f64,
    pub density_unit: DensityUnit,
    pub nuclides: Vec<NuclideFraction>,
    /// Thermal scattering tables, e.g. `c_H_in_H2O`.
    pub sab: Vec<String>,
}

/// Natural isotopic abundances (atom fraction) for the elements the
/// reference library uses. IUPAC 2013 representative values.
const NATURAL_ABUNDANCE: &[(&str, &[(&str, f64)])] = &[
    ("C", &[("C12", 0.9893), ("C13", 0.0107)]),
    ("N", &[("N14", 0.99636), ("N15", 0.00364)]),
    ("O", &[("O16", 0.99757), ("O17", 0.00038), ("O18", 0.00205)]),
    ("Si", &[("Si28", 0.92223), ("Si29", 0.04685), ("Si30", 0.03092)]),
    ("Ar", &[("Ar36", 0.003336), ("Ar38", 0.000629), ("Ar40", 0.996035)]),
    (
        "Cr",
        &[
            ("Cr50", 0.04345),
            ("Cr52", 0.83789),
            ("Cr53", 0.09501),
            ("Cr54", 0.02365),
        ],
    ),
    ("Mn", &[("Mn55", 1.0)]),
    (
        "Fe",
        &[
            ("Fe54", 0.05845),
            ("Fe56", 0.91754),
            ("Fe57", 0.02119),
            ("Fe58", 0.00282),
        ],
    ),
    (
        "Ni",
        &[
            ("Ni58", 0.68077),
            ("Ni60", 0.26223),
            ("Ni61", 0.011399),
            ("Ni62", 0.036346),
            ("Ni64", 0.009255),
        ],
    ),
    (
        "Zr",
        &[
            ("Zr90", 0.5145),
            ("Zr91", 0.1122),
            ("Zr92", 0.1715),
            ("Zr94", 0.1738),
            ("Zr96", 0.0280),
        ],
    ),
];

/// Isotopes and abundances of a natural element, if tabulated.
pub fn natural_isotopes(element: &str) -> Option<&'static [(&'static str, f64)]> {
    NATURAL_ABUNDANCE
        .iter()
        .find(|(symbol, _)| *symbol == element)
        .map(|(_, isotopes)| *isotopes)
}

impl Material {
    pub fn new(id: MaterialId, name: impl Into<String>) -> Self {
        Material {
            id,
            name: name.into(),
            density: 0.0,
            density_unit: DensityUnit::GramPerCc,
            nuclides: Vec::new(),
            sab: Vec::new(),
        }
    }

    /// Add a nuclide. Repeated names accumulate into one entry.
    pub fn add_nuclide(&mut self, nuclide: &str, fraction: f64) -> FissionResult<()> {
        if !fraction.is_finite() || fraction < 0.0 {
            return Err(FissionError::ConfigError(format!(
                "material '{}': fraction for {nuclide} must be finite and >= 0, got {fraction}",
                self.name
            )));
        }
        if nuclide.is_empty() {
            return Err(FissionError::ConfigError(format!(
                "material '{}': empty nuclide name",
                self.name
            )));
        }
        match self.nuclides.iter_mut().find(|n| n.name == nuclide) {
            Some(existing) => existing.fraction += fraction,
            None => self.nuclides.push(NuclideFraction {
                name: nuclide.to_string(),
                fraction,
            }),
        }
        Ok(())
    }

    /// Add a natural element, expanded to isotopes by abundance.
    pub fn add_element(&mut self, element: &str, fraction: f64) -> FissionResult<()> {
        let isotopes = natural_isotopes(element).ok_or_else(|| {
            FissionError::ConfigError(format!(
                "material '{}': no natural abundance data for element '{element}'",
                self.name
            ))
        })?;
        for (nuclide, abundance) in isotopes {
            self.add_nuclide(nuclide, fraction * abundance)?;
        }
        Ok(())
    }

    pub fn add_s_alpha_beta(&mut self, table: &str) {
        if !self.sab.iter().any(|t| t == table) {
            self.sab.push(table.to_string());
        }
    }

    pub fn set_density(&mut self, unit: DensityUnit, value: f64) -> FissionResult<()> {
        self.density = require_positive(&format!("material '{}' density", self.name), value)?;
        self.density_unit = unit;
        Ok(())
    }

    /// Sum of atom fractions as entered.
    pub fn total_fraction(&self) -> f64 {
        self.nuclides.iter().map(|n| n.fraction).sum()
    }

    pub fn fraction_of(&self, nuclide: &str) -> Option<f64> {
        self.nuclides
            .iter()
            .find(|n| n.name == nuclide)
            .map(|n| n.fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abundance_tables_sum_to_one() {
        for (element, isotopes) in NATURAL_ABUNDANCE {
            let sum: f64 = isotopes.iter().map(|(_, a)| a).sum();
            assert!(
                (sum - 1.0).abs() < 1e-3,
                "{element} abundances sum to {sum}"
            );
        }
    }

    #[test]
    fn test_add_element_expands_isotopes() {
        let mut zirc = Material::new(MaterialId(2), "zirc");
        zirc.add_element("Zr", 1.0).unwrap();
        assert_eq!(zirc.nuclides.len(), 5);
        assert!((zirc.fraction_of("Zr90").unwrap() - 0.5145).abs() < 1e-12);
        assert!((zirc.total_fraction() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_repeated_nuclide_accumulates() {
        let mut m = Material::new(MaterialId(1), "mix");
        m.add_nuclide("O16", 1.0).unwrap();
        m.add_element("O", 1.0).unwrap();
        assert_eq!(m.nuclides.len(), 3);
        assert!((m.fraction_of("O16").unwrap() - 1.99757).abs() < 1e-12);
    }

    #[test]
    fn test_negative_fraction_rejected() {
        let mut m = Material::new(MaterialId(1), "bad");
        assert!(m.add_nuclide("H1", -0.1).is_err());
        assert!(m.add_nuclide("H1", f64::NAN).is_err());
        assert!(m.nuclides.is_empty());
    }

    #[test]
    fn test_unknown_element_rejected() {
        let mut m = Material::new(MaterialId(1), "bad");
        match m.add_element("Xx", 1.0) {
            Err(FissionError::ConfigError(msg)) => assert!(msg.contains("Xx")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_density_must_be_positive() {
        let mut m = Material::new(MaterialId(1), "water");
        assert!(m.set_density(DensityUnit::GramPerCc, 0.0).is_err());
        m.set_density(DensityUnit::GramPerCc, 1.0).unwrap();
        assert_eq!(m.density_unit.as_str(), "g/cm3");
    }
}
