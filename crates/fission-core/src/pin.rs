// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Pin Cell
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fuel pin: pellet, cladding annulus, moderator.

use std::f64::consts::PI;

use fission_geometry::{Fill, GeometryBuilder, Region, UniverseId};
use fission_types::error::{require_positive, FissionError, FissionResult};
use fission_types::material::MaterialId;

/// Materials of the three pin regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMaterials {
    pub fuel: MaterialId,
    pub cladding: MaterialId,
    pub moderator: MaterialId,
}

/// Three concentric regions inside a `pitch × pitch` lattice cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PinCell {
    pub fuel_radius: f64,
    pub cladding_radius: f64,
    pub pitch: f64,
    pub materials: PinMaterials,
}

impl PinCell {
    /// Requires `0 < fuel_radius < cladding_radius <= pitch / 2`.
    pub fn new(
        fuel_radius: f64,
        cladding_radius: f64,
        pitch: f64,
        materials: PinMaterials,
    ) -> FissionResult<Self> {
        require_positive("fuel radius", fuel_radius)?;
        require_positive("cladding radius", cladding_radius)?;
        require_positive("pin pitch", pitch)?;
        if fuel_radius >= cladding_radius {
            return Err(FissionError::ConfigError(format!(
                "fuel radius {fuel_radius} must be smaller than cladding radius {cladding_radius}"
            )));
        }
        if cladding_radius > pitch / 2.0 {
            return Err(FissionError::ConfigError(format!(
                "cladding radius {cladding_radius} does not fit in pitch {pitch}"
            )));
        }
        Ok(PinCell {
            fuel_radius,
            cladding_radius,
            pitch,
            materials,
        })
    }

    /// Areas of fuel, cladding and moderator; they sum to `pitch²`.
    pub fn region_areas(&self) -> [f64; 3] {
        let fuel = PI * self.fuel_radius * self.fuel_radius;
        let clad_outer = PI * self.cladding_radius * self.cladding_radius;
        [fuel, clad_outer - fuel, self.pitch * self.pitch - clad_outer]
    }

    /// Cells `fuel`, `cladding`, `moderator` in one universe. The
    /// moderator cell is unbounded outward; the containing lattice element
    /// clips it to the pitch square.
    pub fn build(&self, b: &mut GeometryBuilder) -> UniverseId {
        let fuel_cyl = b.z_cylinder(self.fuel_radius, None);
        let clad_cyl = b.z_cylinder(self.cladding_radius, None);
        let fuel = b.cell(
            Some("fuel"),
            Fill::Material(self.materials.fuel),
            Some(Region::below(fuel_cyl)),
        );
        let cladding = b.cell(
            Some("cladding"),
            Fill::Material(self.materials.cladding),
            Some(Region::above(fuel_cyl) & Region::below(clad_cyl)),
        );
        let moderator = b.cell(
            Some("moderator"),
            Fill::Material(self.materials.moderator),
            Some(Region::above(clad_cyl)),
        );
        b.universe(Some("Fuel Pin"), vec![fuel, cladding, moderator])
    }
}

/// Single moderator cell filling all space: guide tubes and reflector.
pub fn build_moderator_universe(
    b: &mut GeometryBuilder,
    name: &str,
    moderator: MaterialId,
) -> UniverseId {
    let cell = b.cell(None, Fill::Material(moderator), None);
    b.universe(Some(name), vec![cell])
}
