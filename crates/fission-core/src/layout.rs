// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Core Layout Synthesis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Circular core footprint on a square assembly grid.
//!
//! Positions are ranked by the distance from the core axis to the far
//! corner of their square footprint, so a radius that clears the worst
//! corner clears the whole assembly. Grid row 0 is the top row (max y).

use fission_types::constants::RADIUS_MARGIN;
use fission_types::error::{require_positive, FissionError, FissionResult};
use ndarray::Array2;
use serde::Serialize;

/// Fuel/reflector selection and the barrel radius that encloses it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreLayout {
    /// `true` where a fuel assembly sits. Shape `(grid_size, grid_size)`.
    pub mask: Array2<bool>,
    /// Largest selected corner distance plus [`RADIUS_MARGIN`].
    pub enclosing_radius: f64,
}

impl CoreLayout {
    pub fn grid_size(&self) -> usize {
        self.mask.nrows()
    }

    pub fn fuel_count(&self) -> usize {
        self.mask.iter().filter(|&&f| f).count()
    }

    /// One text row per grid row, `#` for fuel and `.` for reflector.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.mask.len() * 2 + self.grid_size());
        for row in self.mask.rows() {
            let line: Vec<&str> = row.iter().map(|&f| if f { "#" } else { "." }).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

/// Distance from the origin to the far corner of cell `(row, col)`.
pub fn corner_distance(row: usize, col: usize, grid_size: usize, pitch: f64) -> f64 {
    let half = (grid_size as f64 - 1.0) / 2.0;
    let cx = (col as f64 - half) * pitch;
    let cy = (half - row as f64) * pitch;
    let dx = cx.abs() + pitch / 2.0;
    let dy = cy.abs() + pitch / 2.0;
    (dx * dx + dy * dy).sqrt()
}

/// Enclosing radius of the `true` cells of `mask`; [`RADIUS_MARGIN`] when none.
pub fn enclosing_radius(mask: &Array2<bool>, pitch: f64) -> f64 {
    let grid_size = mask.nrows();
    let max_corner = mask
        .indexed_iter()
        .filter(|&(_, &fuel)| fuel)
        .map(|((i, j), _)| corner_distance(i, j, grid_size, pitch))
        .fold(0.0_f64, f64::max);
    max_corner + RADIUS_MARGIN
}

/// Select the `target_count` grid positions nearest the axis.
///
/// `None` selects every position; a target above `grid_size²` is clamped.
/// Ties in corner distance keep row-major order.
pub fn synthesize(
    grid_size: usize,
    assembly_pitch: f64,
    target_count: Option<usize>,
) -> FissionResult<CoreLayout> {
    if grid_size == 0 {
        return Err(FissionError::InvalidGridSize(grid_size));
    }
    require_positive("assembly pitch", assembly_pitch)?;

    let n_positions = grid_size * grid_size;
    let mut ranked: Vec<(f64, usize, usize)> = Vec::with_capacity(n_positions);
    for i in 0..grid_size {
        for j in 0..grid_size {
            ranked.push((corner_distance(i, j, grid_size, assembly_pitch), i, j));
        }
    }
    // sort_by is stable: equal distances stay in row-major order.
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n_selected = target_count.map_or(n_positions, |t| t.min(n_positions));
    let mut mask = Array2::from_elem((grid_size, grid_size), false);
    let mut max_corner = 0.0_f64;
    for &(dist, i, j) in &ranked[..n_selected] {
        mask[[i, j]] = true;
        max_corner = max_corner.max(dist);
    }
    let enclosing_radius = max_corner + RADIUS_MARGIN;

    log::info!(
        "core layout: {grid_size}x{grid_size} grid, {n_selected} fuel positions, enclosing radius {enclosing_radius:.3}"
    );

    Ok(CoreLayout {
        mask,
        enclosing_radius,
    })
}
