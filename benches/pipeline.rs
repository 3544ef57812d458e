//! Benchmarks for the cave generation stages.

use criterion::{criterion_group, criterion_main, Criterion};
use grotto::algo::extrude::extrude_walls;
use grotto::algo::outline::extract_outlines;
use grotto::algo::triangulate::triangulate;
use grotto::field::{generate_seeded, random_fill, smooth, Seed};
use grotto::grid::SquareGrid;
use grotto::{generate, CaveConfig};

const WIDTH: usize = 128;
const HEIGHT: usize = 96;

fn bench_field(c: &mut Criterion) {
    let filled = random_fill(WIDTH, HEIGHT, 47, 7);

    c.bench_function("random_fill_128x96", |b| {
        b.iter(|| random_fill(WIDTH, HEIGHT, 47, 7))
    });

    c.bench_function("smooth_5_sequential", |b| b.iter(|| smooth(&filled, 5, false)));

    c.bench_function("smooth_5_parallel", |b| b.iter(|| smooth(&filled, 5, true)));
}

fn bench_marching_squares(c: &mut Criterion) {
    let field = generate_seeded(WIDTH, HEIGHT, 47, 5, 7, true);
    let grid = SquareGrid::build(&field, 1.0).unwrap();
    let floor = triangulate(&grid);
    let outlines = extract_outlines(floor.mesh.vertices(), &floor.adjacency, floor.interior.clone());

    c.bench_function("grid_build", |b| b.iter(|| SquareGrid::build(&field, 1.0).unwrap()));

    c.bench_function("triangulate", |b| b.iter(|| triangulate(&grid)));

    c.bench_function("extract_outlines", |b| {
        b.iter(|| {
            extract_outlines(
                floor.mesh.vertices(),
                &floor.adjacency,
                floor.interior.clone(),
            )
        })
    });

    c.bench_function("extrude_walls", |b| {
        b.iter(|| extrude_walls(&outlines, floor.mesh.vertices(), 5.0))
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = CaveConfig::new(WIDTH, HEIGHT).with_seed(Seed::text("bench"));
    c.bench_function("generate_128x96", |b| b.iter(|| generate(&config).unwrap()));
}

criterion_group!(benches, bench_field, bench_marching_squares, bench_generate);
criterion_main!(benches);
