// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Layout and Composition Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use fission_core::assembly::GuideTubePattern;
use fission_core::hierarchy::{compose, CoreMaterials, CoreSpec};
use fission_core::layout::synthesize;
use fission_types::material::MaterialId;
use std::hint::black_box;

const ASSEMBLY_PITCH: f64 = 22.02;

fn reference_spec(grid_size: usize) -> CoreSpec {
    CoreSpec {
        fuel_radius: 0.39,
        cladding_radius: 0.45,
        pin_pitch: 1.26,
        assembly_size: 17,
        guide_tubes: GuideTubePattern::center_and_corners(17).expect("reference pattern"),
        wall_thickness: 0.2,
        gap_thickness: 0.1,
        vessel_inner_radius: None,
        vessel_thickness: 5.0,
        height: 400.0,
        grid_size,
    }
}

fn materials() -> CoreMaterials {
    CoreMaterials {
        fuel: MaterialId(1),
        cladding: MaterialId(2),
        moderator: MaterialId(3),
        vessel: MaterialId(4),
        exterior: MaterialId(5),
    }
}

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_synthesize");

    for &grid in &[17usize, 65, 257] {
        let target = grid * grid * 6 / 10;
        let label = format!("{grid}x{grid}_{target}fuel");
        group.bench_function(&label, |b| {
            b.iter(|| {
                let layout = synthesize(grid, ASSEMBLY_PITCH, Some(target))
                    .expect("synthesis should succeed");
                black_box(layout.enclosing_radius);
            })
        });
    }

    group.finish();
}

fn bench_compose_core(c: &mut Criterion) {
    let spec = reference_spec(17);
    let layout = synthesize(17, spec.assembly_pitch(), Some(177)).expect("reference layout");
    let mats = materials();

    c.bench_function("compose_and_lower_17x17_core", |b| {
        b.iter(|| {
            let h = compose(&spec, &layout.mask, &mats).expect("compose should succeed");
            let g = h.to_geometry().expect("lowering should succeed");
            black_box(g.cells.len());
        })
    });
}

criterion_group!(benches, bench_synthesize, bench_compose_core);
criterion_main!(benches);
