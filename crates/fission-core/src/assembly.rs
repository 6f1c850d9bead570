// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Fuel Assembly
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Square pin lattice with guide tubes, wrapped in a wall and a water gap.
//!
//! ```text
//!   ┌──────────── gap ─────────────┐
//!   │ ┌────────── wall ──────────┐ │
//!   │ │  size × size pin lattice │ │
//!   │ └──────────────────────────┘ │
//!   └──────────────────────────────┘
//! ```

use fission_geometry::{BoundaryType, Fill, GeometryBuilder, RectangularPrism, UniverseId};
use fission_types::error::{require_non_negative, FissionError, FissionResult};
use fission_types::material::MaterialId;
use ndarray::Array2;

use crate::pin::{build_moderator_universe, PinCell};

/// Assembly side length the center-and-corners pattern was laid out for.
pub const REFERENCE_ASSEMBLY_SIZE: usize = 17;

/// Smallest size for which the five center-and-corners positions are distinct.
pub const MIN_PATTERN_SIZE: usize = 9;

/// Lattice positions `(row, col)` occupied by water guide tubes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideTubePattern {
    positions: Vec<(usize, usize)>,
}

impl GuideTubePattern {
    pub fn new(positions: Vec<(usize, usize)>) -> Self {
        GuideTubePattern { positions }
    }

    pub fn empty() -> Self {
        GuideTubePattern {
            positions: Vec::new(),
        }
    }

    /// Centre plus four points three pins in from each corner.
    ///
    /// The offsets are those of a 17×17 assembly; other sizes get the same
    /// formula but it no longer matches a real guide-tube layout.
    pub fn center_and_corners(size: usize) -> FissionResult<Self> {
        if size < MIN_PATTERN_SIZE {
            return Err(FissionError::ConfigError(format!(
                "center-and-corners guide tubes need assembly size >= {MIN_PATTERN_SIZE}, got {size}"
            )));
        }
        if size != REFERENCE_ASSEMBLY_SIZE {
            log::warn!(
                "center-and-corners guide-tube pattern is laid out for {REFERENCE_ASSEMBLY_SIZE}x{REFERENCE_ASSEMBLY_SIZE}; applying it to {size}x{size}"
            );
        }
        let center = size / 2;
        let far = size - 4;
        Ok(GuideTubePattern {
            positions: vec![(center, center), (3, 3), (3, far), (far, 3), (far, far)],
        })
    }

    pub fn positions(&self) -> &[(usize, usize)] {
        &self.positions
    }

    /// Every position inside the lattice, none repeated.
    fn validate(&self, size: usize) -> FissionResult<()> {
        if let Some(&(row, col)) = self.positions.iter().find(|&&(r, c)| r >= size || c >= size) {
            return Err(FissionError::GridOutOfBounds { row, col });
        }
        for (k, pos) in self.positions.iter().enumerate() {
            if self.positions[..k].contains(pos) {
                return Err(FissionError::ConfigError(format!(
                    "guide-tube position ({}, {}) listed twice",
                    pos.0, pos.1
                )));
            }
        }
        Ok(())
    }
}

/// Occupant of one assembly lattice position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSlot {
    Fuel,
    GuideTube,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub pin: PinCell,
    pub size: usize,
    pub wall_thickness: f64,
    pub gap_thickness: f64,
    pub wall_material: MaterialId,
    pub guide_tubes: GuideTubePattern,
}

impl Assembly {
    /// Wall is cladding material, gap is moderator.
    pub fn new(
        pin: PinCell,
        size: usize,
        wall_thickness: f64,
        gap_thickness: f64,
        guide_tubes: GuideTubePattern,
    ) -> FissionResult<Self> {
        if size == 0 {
            return Err(FissionError::ConfigError(
                "assembly size must be >= 1".to_string(),
            ));
        }
        require_non_negative("wall thickness", wall_thickness)?;
        require_non_negative("gap thickness", gap_thickness)?;
        guide_tubes.validate(size)?;
        let wall_material = pin.materials.cladding;
        Ok(Assembly {
            pin,
            size,
            wall_thickness,
            gap_thickness,
            wall_material,
            guide_tubes,
        })
    }

    /// Width of the bare pin lattice.
    pub fn lattice_width(&self) -> f64 {
        self.pin.pitch * self.size as f64
    }

    /// Lattice plus wall.
    pub fn wall_width(&self) -> f64 {
        self.lattice_width() + 2.0 * self.wall_thickness
    }

    /// Assembly-to-assembly pitch in a core lattice.
    pub fn outer_pitch(&self) -> f64 {
        self.lattice_width() + 2.0 * (self.wall_thickness + self.gap_thickness)
    }

    pub fn slots(&self) -> Array2<PinSlot> {
        let mut slots = Array2::from_elem((self.size, self.size), PinSlot::Fuel);
        for &(r, c) in self.guide_tubes.positions() {
            slots[[r, c]] = PinSlot::GuideTube;
        }
        slots
    }

    pub fn fuel_pin_count(&self) -> usize {
        self.slots().iter().filter(|&&s| s == PinSlot::Fuel).count()
    }

    /// Areas of lattice, wall ring and gap ring; they sum to `outer_pitch²`.
    pub fn region_areas(&self) -> [f64; 3] {
        let lattice = self.lattice_width().powi(2);
        let wall = self.wall_width().powi(2);
        let outer = self.outer_pitch().powi(2);
        [lattice, wall - lattice, outer - wall]
    }

    /// Pin universe, guide-tube universe, pin lattice, then the
    /// `lattice_cell` / `wall_cell` / `gap_cell` assembly universe.
    pub fn build(&self, b: &mut GeometryBuilder) -> UniverseId {
        let fuel_pin = self.pin.build(b);
        let guide_tube = build_moderator_universe(b, "Water Guide Tube", self.pin.materials.moderator);
        let universes = self.slots().mapv(|slot| match slot {
            PinSlot::Fuel => fuel_pin,
            PinSlot::GuideTube => guide_tube,
        });
        let lattice = b.centred_lattice(Some("Pin Lattice"), self.pin.pitch, universes, None);

        let inner = RectangularPrism::new(
            b,
            self.lattice_width(),
            self.lattice_width(),
            BoundaryType::Transmission,
        );
        let wall = RectangularPrism::new(b, self.wall_width(), self.wall_width(), BoundaryType::Transmission);

        let lattice_cell = b.cell(Some("lattice_cell"), Fill::Lattice(lattice), Some(inner.inside()));
        let wall_cell = b.cell(
            Some("wall_cell"),
            Fill::Material(self.wall_material),
            Some(inner.outside() & wall.inside()),
        );
        let gap_cell = b.cell(
            Some("gap_cell"),
            Fill::Material(self.pin.materials.moderator),
            Some(wall.outside()),
        );
        b.universe(Some("Fuel Assembly"), vec![lattice_cell, wall_cell, gap_cell])
    }
}
