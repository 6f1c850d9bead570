// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Core Lattice
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Assembly-level lattice driven by a selection mask.

use fission_geometry::{GeometryBuilder, LatticeId};
use fission_types::error::{FissionError, FissionResult};
use ndarray::Array2;

use crate::assembly::Assembly;
use crate::pin::build_moderator_universe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreSlot {
    Fuel,
    Reflector,
}

impl CoreSlot {
    fn from_mask(fuel: bool) -> Self {
        if fuel {
            CoreSlot::Fuel
        } else {
            CoreSlot::Reflector
        }
    }
}

/// `grid_size × grid_size` slots on the outer assembly pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreLattice {
    pub assembly: Assembly,
    pub slots: Array2<CoreSlot>,
}

impl CoreLattice {
    /// Map `mask` onto core slots. The mask must be `grid_size × grid_size`.
    pub fn from_mask(assembly: Assembly, mask: &Array2<bool>, grid_size: usize) -> FissionResult<Self> {
        if grid_size == 0 {
            return Err(FissionError::InvalidGridSize(grid_size));
        }
        let (rows, cols) = mask.dim();
        if rows != grid_size || cols != grid_size {
            return Err(FissionError::MaskShape {
                expected: grid_size,
                rows,
                cols,
            });
        }
        Ok(CoreLattice {
            assembly,
            slots: mask.mapv(CoreSlot::from_mask),
        })
    }

    pub fn grid_size(&self) -> usize {
        self.slots.nrows()
    }

    pub fn pitch(&self) -> f64 {
        self.assembly.outer_pitch()
    }

    /// Side of the square bounding the lattice.
    pub fn width(&self) -> f64 {
        self.pitch() * self.grid_size() as f64
    }

    pub fn fuel_count(&self) -> usize {
        self.slots.iter().filter(|&&s| s == CoreSlot::Fuel).count()
    }

    /// Total fuel and reflector slot areas; they sum to `width²`.
    pub fn slot_areas(&self) -> [f64; 2] {
        let slot = self.pitch().powi(2);
        let fuel = self.fuel_count();
        let reflector = self.slots.len() - fuel;
        [fuel as f64 * slot, reflector as f64 * slot]
    }

    /// Build the assembly and reflector universes once, then index them by
    /// slot. The reflector also fills everything outside the array.
    pub fn build(&self, b: &mut GeometryBuilder) -> LatticeId {
        let assembly = self.assembly.build(b);
        let reflector = build_moderator_universe(b, "Reflector", self.assembly.pin.materials.moderator);
        let universes = self.slots.mapv(|slot| match slot {
            CoreSlot::Fuel => assembly,
            CoreSlot::Reflector => reflector,
        });
        b.centred_lattice(Some("Core Lattice"), self.pitch(), universes, Some(reflector))
    }
}
