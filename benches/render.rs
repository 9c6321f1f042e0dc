#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num_cpus;

use criterion::Criterion;
use mandelbrot::{Grid, Region, Renderer};

fn seahorse_valley() -> Renderer {
    let grid = Grid::new(200, 200, Region::new(-0.76, 0.08, -0.72, 0.12)).unwrap();
    Renderer::new(grid, 500)
}

fn bench_single(c: &mut Criterion) {
    let renderer = seahorse_valley();
    c.bench_function("fill 200x200, one thread", move |b| {
        b.iter(|| renderer.render_single().unwrap())
    });
}

fn bench_threaded(c: &mut Criterion) {
    let renderer = seahorse_valley();
    let threads = num_cpus::get();
    c.bench_function("fill 200x200, all threads", move |b| {
        b.iter(|| renderer.render(threads).unwrap())
    });
}

criterion_group!(benches, bench_single, bench_threaded);
criterion_main!(benches);
