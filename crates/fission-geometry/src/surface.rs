// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Surfaces
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Quadric surfaces used by the deck: axis planes and z-cylinders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryType {
    #[default]
    Transmission,
    Vacuum,
    Reflective,
    Periodic,
}

impl BoundaryType {
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryType::Transmission => "transmission",
            BoundaryType::Vacuum => "vacuum",
            BoundaryType::Reflective => "reflective",
            BoundaryType::Periodic => "periodic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceKind {
    XPlane { x0: f64 },
    YPlane { y0: f64 },
    ZPlane { z0: f64 },
    ZCylinder { x0: f64, y0: f64, r: f64 },
}

impl SurfaceKind {
    /// Engine type keyword.
    pub fn type_name(&self) -> &'static str {
        match self {
            SurfaceKind::XPlane { .. } => "x-plane",
            SurfaceKind::YPlane { .. } => "y-plane",
            SurfaceKind::ZPlane { .. } => "z-plane",
            SurfaceKind::ZCylinder { .. } => "z-cylinder",
        }
    }

    /// Coefficients in engine order.
    pub fn coeffs(&self) -> Vec<f64> {
        match *self {
            SurfaceKind::XPlane { x0 } => vec![x0],
            SurfaceKind::YPlane { y0 } => vec![y0],
            SurfaceKind::ZPlane { z0 } => vec![z0],
            SurfaceKind::ZCylinder { x0, y0, r } => vec![x0, y0, r],
        }
    }

    /// Signed surface function; negative on the `-` side.
    pub fn evaluate(&self, p: [f64; 3]) -> f64 {
        match *self {
            SurfaceKind::XPlane { x0 } => p[0] - x0,
            SurfaceKind::YPlane { y0 } => p[1] - y0,
            SurfaceKind::ZPlane { z0 } => p[2] - z0,
            SurfaceKind::ZCylinder { x0, y0, r } => {
                let dx = p[0] - x0;
                let dy = p[1] - y0;
                dx * dx + dy * dy - r * r
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub id: SurfaceId,
    pub name: Option<String>,
    pub kind: SurfaceKind,
    pub boundary: BoundaryType,
}
