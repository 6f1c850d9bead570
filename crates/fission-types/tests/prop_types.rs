// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Property-Based Tests (proptest) for fission-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for fission-types using proptest.
//!
//! Covers: element expansion conservation, config validation ranges.

use fission_types::config::CaseConfig;
use fission_types::material::{natural_isotopes, Material, MaterialId};
use proptest::prelude::*;

const ELEMENTS: [&str; 10] = ["C", "N", "O", "Si", "Ar", "Cr", "Mn", "Fe", "Ni", "Zr"];

// ── Element Expansion ────────────────────────────────────────────────

proptest! {
    /// Expanding an element preserves its total atom fraction.
    #[test]
    fn element_expansion_conserves_fraction(
        idx in 0usize..ELEMENTS.len(),
        fraction in 0.0f64..10.0,
    ) {
        let element = ELEMENTS[idx];
        let mut m = Material::new(MaterialId(1), "m");
        m.add_element(element, fraction).unwrap();

        let isotopes = natural_isotopes(element).unwrap();
        prop_assert_eq!(m.nuclides.len(), isotopes.len());
        prop_assert!((m.total_fraction() - fraction).abs() < 1e-3 * fraction.max(1.0),
            "{} expanded to {} for fraction {}", element, m.total_fraction(), fraction);
    }

    /// Expanding the same element twice doubles each isotope entry.
    #[test]
    fn element_expansion_accumulates(
        idx in 0usize..ELEMENTS.len(),
        fraction in 0.01f64..5.0,
    ) {
        let element = ELEMENTS[idx];
        let mut once = Material::new(MaterialId(1), "once");
        once.add_element(element, fraction).unwrap();
        let mut twice = Material::new(MaterialId(2), "twice");
        twice.add_element(element, fraction).unwrap();
        twice.add_element(element, fraction).unwrap();

        prop_assert_eq!(once.nuclides.len(), twice.nuclides.len());
        for (a, b) in once.nuclides.iter().zip(twice.nuclides.iter()) {
            prop_assert_eq!(&a.name, &b.name);
            prop_assert!((2.0 * a.fraction - b.fraction).abs() < 1e-12);
        }
    }
}

// ── Config Validation ────────────────────────────────────────────────

proptest! {
    /// Any positive grid size and valid batch split is accepted.
    #[test]
    fn config_accepts_valid_ranges(
        grid_size in 1usize..40,
        batches in 2u32..500,
        particles in 1u64..100_000,
    ) {
        let inactive = batches / 2;
        let json = format!(
            r#"{{"core": {{"grid_size": {grid_size}}},
                "run": {{"batches": {batches}, "inactive": {inactive}, "particles": {particles}}}}}"#
        );
        let cfg = CaseConfig::from_json(&json).unwrap();
        prop_assert_eq!(cfg.core.grid_size, grid_size);
        prop_assert_eq!(cfg.run.inactive, inactive);
    }

    /// Non-positive pitches are always rejected.
    #[test]
    fn config_rejects_non_positive_pitch(pitch in -10.0f64..=0.0) {
        let json = format!(r#"{{"pin": {{"pitch": {pitch:?}}}}}"#);
        prop_assert!(CaseConfig::from_json(&json).is_err());
    }
}
