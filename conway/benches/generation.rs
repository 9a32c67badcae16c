use conway::{patterns, Cell, DenseGrid, Dimensions, Grid, SparseGrid};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Gun in the corner of grids of growing size: dense cost follows the area,
/// sparse cost follows the population.
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [64usize, 256, 1024] {
        let dims = Dimensions::new(size, size).unwrap();

        group.bench_with_input(BenchmarkId::new("dense", size), &dims, |b, &dims| {
            let mut grid = DenseGrid::new(dims);
            grid.insert_cells(&patterns::gun(), Cell::new(1, 1));
            b.iter(|| {
                grid.generation();
                black_box(grid.population())
            })
        });

        group.bench_with_input(BenchmarkId::new("sparse", size), &dims, |b, &dims| {
            let mut grid = SparseGrid::bounded(dims);
            grid.insert_cells(&patterns::gun(), Cell::new(1, 1));
            b.iter(|| {
                grid.generation();
                black_box(grid.population())
            })
        });
    }

    group.finish();
}

fn bench_random_field(c: &mut Criterion) {
    let dims = Dimensions::new(256, 256).unwrap();
    let field = patterns::random(256, patterns::DEFAULT_DENSITY, &mut patterns::default_rng(Some(7))).unwrap();

    c.bench_function("dense_random_256", |b| {
        let mut grid = DenseGrid::new(dims);
        grid.insert_cells(&field, Cell::new(0, 0));
        b.iter(|| grid.generation())
    });

    c.bench_function("sparse_random_256", |b| {
        let mut grid = SparseGrid::bounded(dims);
        grid.insert_cells(&field, Cell::new(0, 0));
        b.iter(|| grid.generation())
    });
}

criterion_group!(benches, bench_generation, bench_random_field);
criterion_main!(benches);
