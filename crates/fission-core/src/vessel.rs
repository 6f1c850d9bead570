// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Vessel and Exterior
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cylindrical barrel around the core and the vacuum-bounded world box.

use std::f64::consts::PI;

use fission_types::constants::WORLD_MARGIN;
use fission_types::error::{require_positive, FissionResult};
use fission_types::material::MaterialId;

/// Annulus `inner_radius < r < inner_radius + thickness`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselShell {
    pub inner_radius: f64,
    pub thickness: f64,
    pub material: MaterialId,
}

impl VesselShell {
    pub fn new(inner_radius: f64, thickness: f64, material: MaterialId) -> FissionResult<Self> {
        require_positive("vessel inner radius", inner_radius)?;
        require_positive("vessel thickness", thickness)?;
        Ok(VesselShell {
            inner_radius,
            thickness,
            material,
        })
    }

    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.thickness
    }

    pub fn annulus_area(&self) -> f64 {
        PI * (self.outer_radius().powi(2) - self.inner_radius.powi(2))
    }
}

/// Square world `|x|, |y| < half_width`, `|z| < height / 2`, filled with
/// `material` outside the vessel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exterior {
    pub half_width: f64,
    pub height: f64,
    pub material: MaterialId,
}

impl Exterior {
    /// World box clearing the vessel by [`WORLD_MARGIN`].
    pub fn around(vessel: &VesselShell, height: f64, material: MaterialId) -> FissionResult<Self> {
        require_positive("core height", height)?;
        Ok(Exterior {
            half_width: vessel.outer_radius() + WORLD_MARGIN,
            height,
            material,
        })
    }

    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }
}
