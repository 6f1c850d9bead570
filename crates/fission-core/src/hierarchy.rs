// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Spatial Hierarchy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Composes pin → assembly → core inside the vessel and world box, and
//! lowers the result to CSG.
//!
//! Ownership runs outward-in: the hierarchy owns the core lattice, which
//! owns its assembly, which owns its pin cell.

use fission_geometry::{
    BoundaryType, Fill, Geometry, GeometryBuilder, RectangularPrism, Region, ZSlab,
};
use fission_types::config::CaseConfig;
use fission_types::error::FissionResult;
use fission_types::material::MaterialId;
use ndarray::Array2;

use crate::assembly::{Assembly, GuideTubePattern};
use crate::core_lattice::CoreLattice;
use crate::layout::enclosing_radius;
use crate::pin::{PinCell, PinMaterials};
use crate::vessel::{Exterior, VesselShell};

/// Fixed dimensions of every level.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreSpec {
    pub fuel_radius: f64,
    pub cladding_radius: f64,
    pub pin_pitch: f64,
    pub assembly_size: usize,
    pub guide_tubes: GuideTubePattern,
    pub wall_thickness: f64,
    pub gap_thickness: f64,
    /// Derived from the fuel-marked positions when `None`.
    pub vessel_inner_radius: Option<f64>,
    pub vessel_thickness: f64,
    pub height: f64,
    pub grid_size: usize,
}

impl CoreSpec {
    /// Missing `assembly.guide_tubes` falls back to the center-and-corners
    /// pattern.
    pub fn from_config(cfg: &CaseConfig) -> FissionResult<Self> {
        let guide_tubes = match &cfg.assembly.guide_tubes {
            Some(positions) => {
                GuideTubePattern::new(positions.iter().map(|&[r, c]| (r, c)).collect())
            }
            None => GuideTubePattern::center_and_corners(cfg.assembly.size)?,
        };
        Ok(CoreSpec {
            fuel_radius: cfg.pin.fuel_radius,
            cladding_radius: cfg.pin.cladding_radius,
            pin_pitch: cfg.pin.pitch,
            assembly_size: cfg.assembly.size,
            guide_tubes,
            wall_thickness: cfg.assembly.wall_thickness,
            gap_thickness: cfg.assembly.gap_thickness,
            vessel_inner_radius: cfg.core.vessel_inner_radius,
            vessel_thickness: cfg.core.vessel_thickness,
            height: cfg.core.height,
            grid_size: cfg.core.grid_size,
        })
    }

    pub fn pin_cell(&self, materials: PinMaterials) -> FissionResult<PinCell> {
        PinCell::new(self.fuel_radius, self.cladding_radius, self.pin_pitch, materials)
    }

    pub fn assembly(&self, materials: PinMaterials) -> FissionResult<Assembly> {
        Assembly::new(
            self.pin_cell(materials)?,
            self.assembly_size,
            self.wall_thickness,
            self.gap_thickness,
            self.guide_tubes.clone(),
        )
    }

    /// Assembly-to-assembly pitch implied by the pin and shell dimensions.
    pub fn assembly_pitch(&self) -> f64 {
        self.pin_pitch * self.assembly_size as f64
            + 2.0 * (self.wall_thickness + self.gap_thickness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreMaterials {
    pub fuel: MaterialId,
    pub cladding: MaterialId,
    pub moderator: MaterialId,
    pub vessel: MaterialId,
    pub exterior: MaterialId,
}

impl CoreMaterials {
    pub fn pin(&self) -> PinMaterials {
        PinMaterials {
            fuel: self.fuel,
            cladding: self.cladding,
            moderator: self.moderator,
        }
    }
}

/// One level of the hierarchy, innermost first in [`SpatialHierarchy::nodes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    PinCell(&'a PinCell),
    Assembly(&'a Assembly),
    Core(&'a CoreLattice),
    VesselShell(&'a VesselShell),
    Exterior(&'a Exterior),
}

impl Node<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            Node::PinCell(_) => "pin cell",
            Node::Assembly(_) => "assembly",
            Node::Core(_) => "core",
            Node::VesselShell(_) => "vessel shell",
            Node::Exterior(_) => "exterior",
        }
    }

    /// Cross-sectional area of the node's bounding shape.
    pub fn area(&self) -> f64 {
        match self {
            Node::PinCell(p) => p.pitch.powi(2),
            Node::Assembly(a) => a.outer_pitch().powi(2),
            Node::Core(c) => c.width().powi(2),
            Node::VesselShell(v) => v.annulus_area(),
            Node::Exterior(e) => e.width().powi(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpatialHierarchy {
    pub core: CoreLattice,
    pub vessel: VesselShell,
    pub exterior: Exterior,
}

/// Build the hierarchy for `mask` and derive the vessel around it.
pub fn compose(
    spec: &CoreSpec,
    mask: &Array2<bool>,
    materials: &CoreMaterials,
) -> FissionResult<SpatialHierarchy> {
    let assembly = spec.assembly(materials.pin())?;
    let pitch = assembly.outer_pitch();
    let core = CoreLattice::from_mask(assembly, mask, spec.grid_size)?;

    let derived = enclosing_radius(mask, pitch);
    let inner_radius = match spec.vessel_inner_radius {
        Some(r) => {
            if r < derived {
                log::warn!(
                    "vessel inner radius {r:.3} is smaller than the fuel footprint radius {derived:.3}; assemblies will be clipped"
                );
            }
            r
        }
        None => derived,
    };
    let vessel = VesselShell::new(inner_radius, spec.vessel_thickness, materials.vessel)?;
    let exterior = Exterior::around(&vessel, spec.height, materials.exterior)?;

    log::info!(
        "composed core: {} fuel assemblies on a {}x{} grid, pitch {pitch:.3}, vessel {:.3}..{:.3}",
        core.fuel_count(),
        spec.grid_size,
        spec.grid_size,
        vessel.inner_radius,
        vessel.outer_radius()
    );

    Ok(SpatialHierarchy {
        core,
        vessel,
        exterior,
    })
}

impl SpatialHierarchy {
    pub fn nodes(&self) -> Vec<Node<'_>> {
        vec![
            Node::PinCell(&self.core.assembly.pin),
            Node::Assembly(&self.core.assembly),
            Node::Core(&self.core),
            Node::VesselShell(&self.vessel),
            Node::Exterior(&self.exterior),
        ]
    }

    /// Root universe of three cells: `core` inside the barrel, `barrel`
    /// between the barrel cylinders, `air` out to the vacuum world box.
    pub fn to_geometry(&self) -> FissionResult<Geometry> {
        let mut b = GeometryBuilder::new();
        let lattice = self.core.build(&mut b);

        let barrel_inner = b.z_cylinder(self.vessel.inner_radius, Some("barrel_inner"));
        let barrel_outer = b.z_cylinder(self.vessel.outer_radius(), Some("barrel_outer"));
        let world = RectangularPrism::with_names(
            &mut b,
            self.exterior.width(),
            self.exterior.width(),
            BoundaryType::Vacuum,
            [Some("min_x"), Some("max_x"), Some("min_y"), Some("max_y")],
        );
        let slab = ZSlab::new(&mut b, self.exterior.height, BoundaryType::Vacuum);

        let core = b.cell(
            Some("core"),
            Fill::Lattice(lattice),
            Some(Region::below(barrel_inner) & slab.inside()),
        );
        let barrel = b.cell(
            Some("barrel"),
            Fill::Material(self.vessel.material),
            Some(Region::above(barrel_inner) & Region::below(barrel_outer) & slab.inside()),
        );
        let air = b.cell(
            Some("air"),
            Fill::Material(self.exterior.material),
            Some(Region::above(barrel_outer) & world.inside() & slab.inside()),
        );
        let root = b.universe(Some("Root"), vec![core, barrel, air]);
        b.finish(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::synthesize;
    use fission_types::error::FissionError;

    fn materials() -> CoreMaterials {
        CoreMaterials {
            fuel: MaterialId(1),
            cladding: MaterialId(2),
            moderator: MaterialId(3),
            vessel: MaterialId(4),
            exterior: MaterialId(5),
        }
    }

    fn small_spec() -> CoreSpec {
        CoreSpec {
            fuel_radius: 0.39,
            cladding_radius: 0.45,
            pin_pitch: 1.26,
            assembly_size: 3,
            guide_tubes: GuideTubePattern::empty(),
            wall_thickness: 0.2,
            gap_thickness: 0.1,
            vessel_inner_radius: None,
            vessel_thickness: 5.0,
            height: 400.0,
            grid_size: 3,
        }
    }

    #[test]
    fn test_vessel_derived_from_fuel_only() {
        let spec = small_spec();
        let layout = synthesize(3, spec.assembly_pitch(), Some(1)).unwrap();
        let h = compose(&spec, &layout.mask, &materials()).unwrap();
        assert!((h.vessel.inner_radius - layout.enclosing_radius).abs() < 1e-12);
        let p = spec.assembly_pitch();
        let expected = (2.0 * (p / 2.0).powi(2)).sqrt() + 1.0;
        assert!((h.vessel.inner_radius - expected).abs() < 1e-12);
        assert_eq!(h.exterior.half_width, h.vessel.outer_radius() + 10.0);
    }

    #[test]
    fn test_supplied_radius_is_kept() {
        let mut spec = small_spec();
        spec.vessel_inner_radius = Some(2.0);
        let layout = synthesize(3, spec.assembly_pitch(), None).unwrap();
        let h = compose(&spec, &layout.mask, &materials()).unwrap();
        assert_eq!(h.vessel.inner_radius, 2.0);
    }

    #[test]
    fn test_mask_shape_error() {
        let spec = small_spec();
        let mask = Array2::from_elem((4, 4), true);
        assert!(matches!(
            compose(&spec, &mask, &materials()),
            Err(FissionError::MaskShape { expected: 3, rows: 4, cols: 4 })
        ));
    }

    #[test]
    fn test_nodes_innermost_first() {
        let spec = small_spec();
        let layout = synthesize(3, spec.assembly_pitch(), Some(5)).unwrap();
        let h = compose(&spec, &layout.mask, &materials()).unwrap();
        let labels: Vec<&str> = h.nodes().iter().map(Node::label).collect();
        assert_eq!(
            labels,
            vec!["pin cell", "assembly", "core", "vessel shell", "exterior"]
        );
        let areas: Vec<f64> = h.nodes().iter().map(Node::area).collect();
        assert!((areas[0] - 1.26 * 1.26).abs() < 1e-12);
        assert!((areas[2] - 9.0 * areas[1]).abs() < 1e-9);
    }

    #[test]
    fn test_geometry_locates_each_layer() {
        let spec = small_spec();
        let layout = synthesize(3, spec.assembly_pitch(), Some(1)).unwrap();
        let h = compose(&spec, &layout.mask, &materials()).unwrap();
        let g = h.to_geometry().unwrap();
        let p = spec.assembly_pitch();

        assert_eq!(g.locate([0.0, 0.0, 0.0]).unwrap().fill, Fill::Material(MaterialId(1)));
        // Inner edge of the right-hand slot is reflector water, still
        // inside the barrel.
        assert!(0.55 * p < h.vessel.inner_radius);
        assert_eq!(g.locate([0.55 * p, 0.0, 0.0]).unwrap().fill, Fill::Material(MaterialId(3)));
        let barrel_mid = h.vessel.inner_radius + h.vessel.thickness / 2.0;
        assert_eq!(g.locate([barrel_mid, 0.0, 0.0]).unwrap().fill, Fill::Material(MaterialId(4)));
        let air = h.vessel.outer_radius() + 1.0;
        assert_eq!(g.locate([air, 0.0, 0.0]).unwrap().fill, Fill::Material(MaterialId(5)));
        // Beyond the world box nothing is found.
        assert!(g.locate([h.exterior.half_width + 1.0, 0.0, 0.0]).is_none());
        assert!(g.locate([0.0, 0.0, 250.0]).is_none());

        assert_eq!(g.surface_by_name("barrel_outer").unwrap().boundary, BoundaryType::Transmission);
        assert_eq!(g.surface_by_name("z_max").unwrap().boundary, BoundaryType::Vacuum);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let spec = small_spec();
        let layout = synthesize(3, spec.assembly_pitch(), Some(5)).unwrap();
        let a = compose(&spec, &layout.mask, &materials()).unwrap();
        let b = compose(&spec, &layout.mask, &materials()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_geometry().unwrap(), b.to_geometry().unwrap());
    }

    #[test]
    fn test_from_config_defaults_to_reference_pattern() {
        let cfg = CaseConfig::default();
        let spec = CoreSpec::from_config(&cfg).unwrap();
        assert_eq!(spec.guide_tubes.positions().len(), 5);
        assert!((spec.assembly_pitch() - 22.02).abs() < 1e-12);
        assert_eq!(spec.grid_size, 17);
    }
}
