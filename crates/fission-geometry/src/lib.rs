// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Fission Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Constructive solid geometry model consumed by the transport engine.
//!
//! Surfaces bound half-spaces, regions combine half-spaces, cells fill a
//! region with a material, universe or lattice, and universes collect cells.
//! Everything lives in a flat arena indexed by typed IDs assigned in
//! creation order, so identical build sequences give identical geometry.

pub mod geometry;
pub mod prism;
pub mod region;
pub mod surface;

pub use geometry::{
    Cell, CellId, Fill, Geometry, GeometryBuilder, LatticeId, Location, RectLattice, Universe,
    UniverseId,
};
pub use prism::{RectangularPrism, ZSlab};
pub use region::{Region, Side};
pub use surface::{BoundaryType, Surface, SurfaceId, SurfaceKind};
