// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Composite Surfaces
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Origin-centred rectangular prism and axial slab.

use crate::geometry::GeometryBuilder;
use crate::region::Region;
use crate::surface::{BoundaryType, SurfaceId, SurfaceKind};

/// Four axis planes bounding `|x| < width/2`, `|y| < height/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangularPrism {
    pub min_x: SurfaceId,
    pub max_x: SurfaceId,
    pub min_y: SurfaceId,
    pub max_y: SurfaceId,
}

impl RectangularPrism {
    pub fn new(b: &mut GeometryBuilder, width: f64, height: f64, boundary: BoundaryType) -> Self {
        Self::with_names(b, width, height, boundary, [None; 4])
    }

    /// `names` in order `min_x, max_x, min_y, max_y`.
    pub fn with_names(
        b: &mut GeometryBuilder,
        width: f64,
        height: f64,
        boundary: BoundaryType,
        names: [Option<&str>; 4],
    ) -> Self {
        let hx = width / 2.0;
        let hy = height / 2.0;
        RectangularPrism {
            min_x: b.surface(SurfaceKind::XPlane { x0: -hx }, boundary, names[0]),
            max_x: b.surface(SurfaceKind::XPlane { x0: hx }, boundary, names[1]),
            min_y: b.surface(SurfaceKind::YPlane { y0: -hy }, boundary, names[2]),
            max_y: b.surface(SurfaceKind::YPlane { y0: hy }, boundary, names[3]),
        }
    }

    pub fn inside(&self) -> Region {
        Region::above(self.min_x)
            & Region::below(self.max_x)
            & Region::above(self.min_y)
            & Region::below(self.max_y)
    }

    pub fn outside(&self) -> Region {
        Region::below(self.min_x)
            | Region::above(self.max_x)
            | Region::below(self.min_y)
            | Region::above(self.max_y)
    }
}

/// Two z-planes at `±height/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZSlab {
    pub z_min: SurfaceId,
    pub z_max: SurfaceId,
}

impl ZSlab {
    pub fn new(b: &mut GeometryBuilder, height: f64, boundary: BoundaryType) -> Self {
        ZSlab {
            z_min: b.surface(SurfaceKind::ZPlane { z0: -height / 2.0 }, boundary, Some("z_min")),
            z_max: b.surface(SurfaceKind::ZPlane { z0: height / 2.0 }, boundary, Some("z_max")),
        }
    }

    pub fn inside(&self) -> Region {
        Region::above(self.z_min) & Region::below(self.z_max)
    }
}
