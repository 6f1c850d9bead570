// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Regions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boolean combinations of half-spaces.
//!
//! `a & b` intersects, `a | b` unites, `!a` complements. Rendering follows
//! the engine's region syntax: `-3 4 (1 | -2)`.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use serde::{Deserialize, Serialize};

use crate::surface::{Surface, SurfaceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Negative,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Region {
    Half(SurfaceId, Side),
    Intersection(Vec<Region>),
    Union(Vec<Region>),
    Complement(Box<Region>),
}

impl Region {
    pub fn below(surface: SurfaceId) -> Self {
        Region::Half(surface, Side::Negative)
    }

    pub fn above(surface: SurfaceId) -> Self {
        Region::Half(surface, Side::Positive)
    }

    /// Point membership. `surface` resolves IDs; points exactly on a
    /// surface count as the positive side.
    pub fn contains<'a, F>(&self, p: [f64; 3], surface: &F) -> bool
    where
        F: Fn(SurfaceId) -> Option<&'a Surface>,
    {
        match self {
            Region::Half(id, side) => match surface(*id) {
                Some(s) => {
                    let value = s.kind.evaluate(p);
                    match side {
                        Side::Negative => value < 0.0,
                        Side::Positive => value >= 0.0,
                    }
                }
                None => false,
            },
            Region::Intersection(parts) => parts.iter().all(|r| r.contains(p, surface)),
            Region::Union(parts) => parts.iter().any(|r| r.contains(p, surface)),
            Region::Complement(inner) => !inner.contains(p, surface),
        }
    }

    /// Every surface referenced, in first-appearance order.
    pub fn surfaces(&self) -> Vec<SurfaceId> {
        let mut out = Vec::new();
        self.collect_surfaces(&mut out);
        out
    }

    fn collect_surfaces(&self, out: &mut Vec<SurfaceId>) {
        match self {
            Region::Half(id, _) => {
                if !out.contains(id) {
                    out.push(*id);
                }
            }
            Region::Intersection(parts) | Region::Union(parts) => {
                for part in parts {
                    part.collect_surfaces(out);
                }
            }
            Region::Complement(inner) => inner.collect_surfaces(out),
        }
    }
}

impl BitAnd for Region {
    type Output = Region;

    fn bitand(self, rhs: Region) -> Region {
        match (self, rhs) {
            (Region::Intersection(mut a), Region::Intersection(b)) => {
                a.extend(b);
                Region::Intersection(a)
            }
            (Region::Intersection(mut a), r) => {
                a.push(r);
                Region::Intersection(a)
            }
            (l, Region::Intersection(b)) => {
                let mut parts = vec![l];
                parts.extend(b);
                Region::Intersection(parts)
            }
            (l, r) => Region::Intersection(vec![l, r]),
        }
    }
}

impl BitOr for Region {
    type Output = Region;

    fn bitor(self, rhs: Region) -> Region {
        match (self, rhs) {
            (Region::Union(mut a), Region::Union(b)) => {
                a.extend(b);
                Region::Union(a)
            }
            (Region::Union(mut a), r) => {
                a.push(r);
                Region::Union(a)
            }
            (l, Region::Union(b)) => {
                let mut parts = vec![l];
                parts.extend(b);
                Region::Union(parts)
            }
            (l, r) => Region::Union(vec![l, r]),
        }
    }
}

impl Not for Region {
    type Output = Region;

    fn not(self) -> Region {
        match self {
            Region::Half(id, Side::Negative) => Region::Half(id, Side::Positive),
            Region::Half(id, Side::Positive) => Region::Half(id, Side::Negative),
            Region::Complement(inner) => *inner,
            other => Region::Complement(Box::new(other)),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Half(id, Side::Negative) => write!(f, "-{id}"),
            Region::Half(id, Side::Positive) => write!(f, "{id}"),
            Region::Intersection(parts) => {
                for (k, part) in parts.iter().enumerate() {
                    if k > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Region::Union(parts) => {
                f.write_str("(")?;
                for (k, part) in parts.iter().enumerate() {
                    if k > 0 {
                        f.write_str(" | ")?;
                    }
                    match part {
                        Region::Intersection(_) => write!(f, "({part})")?,
                        _ => write!(f, "{part}")?,
                    }
                }
                f.write_str(")")
            }
            Region::Complement(inner) => write!(f, "~({inner})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{BoundaryType, SurfaceKind};

    fn plane(id: u32, x0: f64) -> Surface {
        Surface {
            id: SurfaceId(id),
            name: None,
            kind: SurfaceKind::XPlane { x0 },
            boundary: BoundaryType::Transmission,
        }
    }

    #[test]
    fn test_render_intersection_and_union() {
        let a = Region::above(SurfaceId(1));
        let b = Region::below(SurfaceId(2));
        let c = Region::below(SurfaceId(3));
        assert_eq!((a.clone() & b.clone()).to_string(), "1 -2");
        assert_eq!((a.clone() | b.clone()).to_string(), "(1 | -2)");
        assert_eq!(((a | b) & c).to_string(), "(1 | -2) -3");
    }

    #[test]
    fn test_intersection_flattens() {
        let r = Region::above(SurfaceId(1)) & Region::below(SurfaceId(2)) & Region::below(SurfaceId(3));
        match r {
            Region::Intersection(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected flat intersection, got {other:?}"),
        }
    }

    #[test]
    fn test_not_flips_halfspace() {
        assert_eq!(!Region::below(SurfaceId(4)), Region::above(SurfaceId(4)));
        let slab = Region::above(SurfaceId(1)) & Region::below(SurfaceId(2));
        assert_eq!((!slab.clone()).to_string(), "~(1 -2)");
        assert_eq!(!!slab.clone(), slab);
    }

    #[test]
    fn test_contains_slab() {
        let surfaces = [plane(1, -1.0), plane(2, 1.0)];
        let lookup = |id: SurfaceId| surfaces.iter().find(|s| s.id == id);
        let slab = Region::above(SurfaceId(1)) & Region::below(SurfaceId(2));
        assert!(slab.contains([0.0, 0.0, 0.0], &lookup));
        assert!(!slab.contains([2.0, 0.0, 0.0], &lookup));
        assert!((!slab).contains([2.0, 0.0, 0.0], &lookup));
    }

    #[test]
    fn test_surfaces_deduplicated() {
        let r = (Region::above(SurfaceId(1)) & Region::below(SurfaceId(2)))
            | Region::below(SurfaceId(1));
        assert_eq!(r.surfaces(), vec![SurfaceId(1), SurfaceId(2)]);
    }
}
