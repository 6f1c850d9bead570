// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Case 2: Infinite Pin Cell
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One pin in a periodic square: an infinite lattice of identical pins.

use fission_core::pin::PinCell;
use fission_geometry::{BoundaryType, Fill, GeometryBuilder, RectangularPrism};
use fission_types::config::{CaseConfig, CaseKind};
use fission_types::error::FissionResult;

use crate::materials::{MaterialLibrary, FUEL, WATER, ZIRC};
use crate::model::Model;
use crate::settings::{Settings, Source};
use crate::tallies::{Filter, Tally, TallySet};

/// Axial half-extent of the source box; the pin is unbounded in z.
const SOURCE_HALF_HEIGHT: f64 = 1e6;

pub(crate) fn build(cfg: &CaseConfig, lib: &MaterialLibrary) -> FissionResult<Model> {
    let pin = PinCell::new(
        cfg.pin.fuel_radius,
        cfg.pin.cladding_radius,
        cfg.pin.pitch,
        lib.pin_materials()?,
    )?;
    let mut b = GeometryBuilder::new();
    let pin_universe = pin.build(&mut b);
    let prism = RectangularPrism::new(&mut b, pin.pitch, pin.pitch, BoundaryType::Periodic);
    let root_cell = b.cell(None, Fill::Universe(pin_universe), Some(prism.inside()));
    let root = b.universe(None, vec![root_cell]);
    let geometry = b.finish(root)?;

    let half = pin.pitch / 2.0;
    let source = Source::fissionable_box(
        [-half, -half, -SOURCE_HALF_HEIGHT],
        [half, half, SOURCE_HALF_HEIGHT],
    );

    let energy = Filter::log_energy();
    let fuel_flux = Tally::new("fuel_flux")
        .filter(Filter::cells_named(&geometry, &["fuel"])?)
        .filter(energy.clone())
        .score("flux");
    let mod_flux = Tally::new("mod_flux")
        .filter(Filter::cells_named(&geometry, &["moderator"])?)
        .filter(energy)
        .score("flux");

    Ok(Model {
        case: CaseKind::InfinitePincell,
        materials: lib.select(&[FUEL, ZIRC, WATER])?,
        geometry,
        settings: Settings::eigenvalue(&cfg.run, source)?,
        tallies: TallySet::new(vec![fuel_flux, mod_flux])?,
        cross_sections: cfg.cross_sections.clone(),
        fuel_assemblies: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_pin_with_shared_energy_filter() {
        let cfg = CaseConfig {
            case: CaseKind::InfinitePincell,
            ..CaseConfig::default()
        };
        let lib = MaterialLibrary::standard().unwrap();
        let model = build(&cfg, &lib).unwrap();
        let periodic = model
            .geometry
            .surfaces
            .iter()
            .filter(|s| s.boundary == BoundaryType::Periodic)
            .count();
        assert_eq!(periodic, 4);
        // fuel cell, moderator cell, shared energy filter.
        assert_eq!(model.tallies.filters.len(), 3);
        assert!(model.settings.source.fissionable_only);
        assert_eq!(model.materials.len(), 3);
    }
}
