// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Case 1: Infinite Medium
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fuel in a reflective box: no leakage, so the eigenvalue is k-infinity.

use fission_geometry::{BoundaryType, Fill, GeometryBuilder, RectangularPrism, ZSlab};
use fission_types::config::{CaseConfig, CaseKind};
use fission_types::error::FissionResult;

use crate::materials::{MaterialLibrary, FUEL, WATER};
use crate::model::Model;
use crate::settings::{Settings, Source};
use crate::tallies::{Filter, Tally, TallySet};

pub(crate) fn build(cfg: &CaseConfig, lib: &MaterialLibrary) -> FissionResult<Model> {
    let width = cfg.infinite_medium.width;
    let mut b = GeometryBuilder::new();
    let prism = RectangularPrism::new(&mut b, width, width, BoundaryType::Reflective);
    let slab = ZSlab::new(&mut b, width, BoundaryType::Reflective);
    let fuel = b.cell(
        Some("fuel"),
        Fill::Material(lib.id(FUEL)?),
        Some(prism.inside() & slab.inside()),
    );
    let root = b.universe(None, vec![fuel]);
    let geometry = b.finish(root)?;

    let flux = Tally::new("flux_tally")
        .filter(Filter::log_energy())
        .score("flux");

    Ok(Model {
        case: CaseKind::InfiniteMedium,
        materials: lib.select(&[FUEL, WATER])?,
        geometry,
        settings: Settings::eigenvalue(&cfg.run, Source::point([0.0, 0.0, 0.0]))?,
        tallies: TallySet::new(vec![flux])?,
        cross_sections: cfg.cross_sections.clone(),
        fuel_assemblies: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflective_box() {
        let cfg = CaseConfig {
            case: CaseKind::InfiniteMedium,
            ..CaseConfig::default()
        };
        let lib = MaterialLibrary::standard().unwrap();
        let model = build(&cfg, &lib).unwrap();
        assert_eq!(model.geometry.surfaces.len(), 6);
        assert!(model
            .geometry
            .surfaces
            .iter()
            .all(|s| s.boundary == BoundaryType::Reflective));
        assert_eq!(model.geometry.cells.len(), 1);
        let loc = model.geometry.locate([4.9, -4.9, 4.9]).unwrap();
        assert_eq!(loc.fill, Fill::Material(lib.id(FUEL).unwrap()));
        assert!(model.geometry.locate([5.1, 0.0, 0.0]).is_none());
    }
}
