// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Material Library
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The five reference materials shared by every case.

use fission_core::hierarchy::CoreMaterials;
use fission_core::pin::PinMaterials;
use fission_types::error::{FissionError, FissionResult};
use fission_types::material::{DensityUnit, Material, MaterialId};

pub const FUEL: &str = "fuel";
pub const ZIRC: &str = "zirc";
pub const WATER: &str = "water";
pub const STEEL: &str = "steel";
pub const AIR: &str = "air";

/// Materials in ID order. IDs are fixed so that every case exports the
/// same ID for the same material.
#[derive(Debug, Clone)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
}

impl MaterialLibrary {
    /// UO2 fuel, zircaloy, light water, stainless steel, dry air.
    pub fn standard() -> FissionResult<Self> {
        let mut fuel = Material::new(MaterialId(1), FUEL);
        fuel.add_nuclide("U235", 0.05)?;
        fuel.add_nuclide("U238", 0.95)?;
        fuel.add_nuclide("O16", 2.0)?;
        fuel.set_density(DensityUnit::GramPerCc, 10.0)?;

        let mut zirc = Material::new(MaterialId(2), ZIRC);
        zirc.add_element("Zr", 1.0)?;
        zirc.set_density(DensityUnit::GramPerCc, 6.5)?;

        let mut water = Material::new(MaterialId(3), WATER);
        water.add_nuclide("H1", 2.0)?;
        water.add_nuclide("O16", 1.0)?;
        water.set_density(DensityUnit::GramPerCc, 1.0)?;
        water.add_s_alpha_beta("c_H_in_H2O");

        let mut steel = Material::new(MaterialId(4), STEEL);
        for (element, fraction) in [
            ("Fe", 0.68),
            ("Cr", 0.18),
            ("Ni", 0.10),
            ("Mn", 0.02),
            ("Si", 0.01),
            ("C", 0.01),
        ] {
            steel.add_element(element, fraction)?;
        }
        steel.set_density(DensityUnit::GramPerCc, 7.9)?;

        let mut air = Material::new(MaterialId(5), AIR);
        for (element, fraction) in [
            ("N", 0.784431),
            ("O", 0.210748),
            ("Ar", 0.004671),
            ("C", 0.000150),
        ] {
            air.add_element(element, fraction)?;
        }
        air.set_density(DensityUnit::GramPerCc, 0.001225)?;

        Ok(MaterialLibrary {
            materials: vec![fuel, zirc, water, steel, air],
        })
    }

    pub fn get(&self, name: &str) -> FissionResult<&Material> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| FissionError::ConfigError(format!("no material named '{name}'")))
    }

    pub fn id(&self, name: &str) -> FissionResult<MaterialId> {
        Ok(self.get(name)?.id)
    }

    /// Clones of the named materials, in the order given.
    pub fn select(&self, names: &[&str]) -> FissionResult<Vec<Material>> {
        names.iter().map(|n| self.get(n).cloned()).collect()
    }

    pub fn pin_materials(&self) -> FissionResult<PinMaterials> {
        Ok(PinMaterials {
            fuel: self.id(FUEL)?,
            cladding: self.id(ZIRC)?,
            moderator: self.id(WATER)?,
        })
    }

    pub fn core_materials(&self) -> FissionResult<CoreMaterials> {
        Ok(CoreMaterials {
            fuel: self.id(FUEL)?,
            cladding: self.id(ZIRC)?,
            moderator: self.id(WATER)?,
            vessel: self.id(STEEL)?,
            exterior: self.id(AIR)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}
