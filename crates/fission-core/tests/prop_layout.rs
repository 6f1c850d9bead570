// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Property-Based Tests (proptest) for layout synthesis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the core layout synthesizer.
//!
//! Covers: cardinality, monotonicity, rotation symmetry, idempotence.

use fission_core::layout::{corner_distance, enclosing_radius, synthesize};
use ndarray::Array2;
use proptest::prelude::*;

fn rotate90(mask: &Array2<bool>) -> Array2<bool> {
    let n = mask.nrows();
    Array2::from_shape_fn((n, n), |(i, j)| mask[[n - 1 - j, i]])
}

// ── Cardinality ──────────────────────────────────────────────────────

proptest! {
    /// Exactly min(target, grid²) positions are selected.
    #[test]
    fn cardinality_matches_clamped_target(
        grid in 1usize..24,
        pitch in 0.1f64..50.0,
        target in 0usize..700,
    ) {
        let layout = synthesize(grid, pitch, Some(target)).unwrap();
        prop_assert_eq!(layout.fuel_count(), target.min(grid * grid));
        prop_assert_eq!(layout.mask.dim(), (grid, grid));
    }

    /// Radius is the largest selected corner distance plus one.
    #[test]
    fn radius_bounds_every_selected_corner(
        grid in 1usize..20,
        pitch in 0.1f64..30.0,
        target in 1usize..400,
    ) {
        let layout = synthesize(grid, pitch, Some(target)).unwrap();
        for ((i, j), &fuel) in layout.mask.indexed_iter() {
            if fuel {
                prop_assert!(corner_distance(i, j, grid, pitch) + 1.0 <= layout.enclosing_radius + 1e-12);
            }
        }
        let recomputed = enclosing_radius(&layout.mask, pitch);
        prop_assert!((recomputed - layout.enclosing_radius).abs() < 1e-12);
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────

proptest! {
    /// Raising the target only adds positions and never shrinks the radius.
    #[test]
    fn selection_and_radius_are_monotone(
        grid in 1usize..20,
        pitch in 0.1f64..30.0,
        a in 0usize..400,
        b in 0usize..400,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let small = synthesize(grid, pitch, Some(lo)).unwrap();
        let large = synthesize(grid, pitch, Some(hi)).unwrap();
        for (s, l) in small.mask.iter().zip(large.mask.iter()) {
            prop_assert!(!*s || *l);
        }
        prop_assert!(small.enclosing_radius <= large.enclosing_radius);
    }
}

// ── Symmetry ─────────────────────────────────────────────────────────

proptest! {
    /// A full grid is invariant under 90° rotation.
    #[test]
    fn full_grid_is_rotation_symmetric(grid in 1usize..24, pitch in 0.1f64..30.0) {
        let layout = synthesize(grid, pitch, None).unwrap();
        prop_assert_eq!(rotate90(&layout.mask), layout.mask);
    }

    /// Selecting every position within a corner-distance shell gives a
    /// rotation-symmetric mask regardless of tie order.
    #[test]
    fn complete_shells_are_rotation_symmetric(
        grid in 1usize..20,
        pitch in 0.1f64..30.0,
        shell in 0usize..400,
    ) {
        let n = grid * grid;
        let mut distances: Vec<f64> = (0..n)
            .map(|k| corner_distance(k / grid, k % grid, grid, pitch))
            .collect();
        distances.sort_by(|a, b| a.total_cmp(b));
        let cutoff = distances[shell % n];
        let target = distances.iter().filter(|&&d| d <= cutoff).count();

        let layout = synthesize(grid, pitch, Some(target)).unwrap();
        prop_assert_eq!(rotate90(&layout.mask), layout.mask.clone());
    }
}

// ── Idempotence ──────────────────────────────────────────────────────

proptest! {
    /// Same inputs, same layout.
    #[test]
    fn synthesis_is_idempotent(
        grid in 1usize..20,
        pitch in 0.1f64..30.0,
        target in proptest::option::of(0usize..400),
    ) {
        let first = synthesize(grid, pitch, target).unwrap();
        let second = synthesize(grid, pitch, target).unwrap();
        prop_assert_eq!(first, second);
    }
}
