use criterion::{criterion_group, criterion_main, Criterion};

use rasterbrot_core::{Complex, Julia, Mandelbrot, Window};
use rasterbrot_raster::{rasterize, CancelToken};

fn bench_mandelbrot_parallel(c: &mut Criterion) {
    let fractal = Mandelbrot::new(256);
    let window = Window::default();

    c.bench_function("mandelbrot_512x384_4workers", |b| {
        b.iter(|| {
            let cancel = CancelToken::new();
            rasterize(&fractal, &window, 512, 384, 4, &cancel).unwrap()
        })
    });
}

fn bench_mandelbrot_single_worker(c: &mut Criterion) {
    let fractal = Mandelbrot::new(256);
    let window = Window::default();

    c.bench_function("mandelbrot_512x384_1worker", |b| {
        b.iter(|| {
            let cancel = CancelToken::new();
            rasterize(&fractal, &window, 512, 384, 1, &cancel).unwrap()
        })
    });
}

fn bench_julia_parallel(c: &mut Criterion) {
    let fractal = Julia::new(Complex::new(-0.7, 0.27015), 2, 256).unwrap();
    let window = Window::default();

    c.bench_function("julia_512x384_4workers", |b| {
        b.iter(|| {
            let cancel = CancelToken::new();
            rasterize(&fractal, &window, 512, 384, 4, &cancel).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_mandelbrot_parallel,
    bench_mandelbrot_single_worker,
    bench_julia_parallel
);
criterion_main!(benches);
