use rasterbrot_core::{Complex, Fractal, Julia, Mandelbrot, Window};
use rasterbrot_raster::{rasterize, CancelToken, FractalKind, RasterConfig, RasterError};

#[test]
fn end_to_end_mandelbrot_grid() {
    let fractal = Mandelbrot::new(100);
    let window = Window::new(Complex::new(-2.0, -1.25), Complex::new(0.5, 1.25)).unwrap();
    let cancel = CancelToken::new();

    let grid = rasterize(&fractal, &window, 200, 150, 4, &cancel).unwrap();

    assert_eq!(grid.width(), 200);
    assert_eq!(grid.height(), 150);
    assert_eq!(grid.values().len(), 200 * 150);
    assert!(grid.values().iter().all(|&v| v <= 100));

    // This view contains both in-set points (the main cardioid) and
    // escaping points, so the grid is not uniform.
    assert!(grid.values().iter().any(|&v| v == 100));
    assert!(grid.values().iter().any(|&v| v < 100));
}

#[test]
fn end_to_end_julia_grid() {
    let julia = Julia::new(Complex::new(0.742, 0.1), 2, 150).unwrap();
    let window = Window::default();
    let cancel = CancelToken::new();

    let grid = rasterize(&julia, &window, 100, 100, 5, &cancel).unwrap();

    assert_eq!(grid.values().len(), 100 * 100);
    assert!(grid.values().iter().all(|&v| v <= 150));
}

#[test]
fn grid_matches_direct_evaluation() {
    // Every cell must equal the evaluator applied to the mapped sample:
    // the parallel plumbing adds nothing and loses nothing.
    let fractal = Mandelbrot::new(40);
    let window = Window::default();
    let cancel = CancelToken::new();

    let width = 16u32;
    let height = 11u32;
    let grid = rasterize(&fractal, &window, width, height, 3, &cancel).unwrap();

    let inc_re = window.re_span() / width as f64;
    let inc_im = window.im_span() / height as f64;
    for row in 0..height {
        for col in 0..width {
            let c = Complex::new(
                window.min.re + col as f64 * inc_re,
                window.min.im + row as f64 * inc_im,
            );
            assert_eq!(
                grid.get(row, col),
                fractal.escape_time(c),
                "cell ({row}, {col})"
            );
        }
    }
}

#[test]
fn determinism_across_worker_counts() {
    let julia = Julia::new(Complex::new(-0.7, 0.27015), 2, 80).unwrap();
    let window = Window::default();
    let cancel = CancelToken::new();

    let reference = rasterize(&julia, &window, 33, 27, 1, &cancel).unwrap();
    for workers in [2, 4, 7, 20] {
        let grid = rasterize(&julia, &window, 33, 27, workers, &cancel).unwrap();
        assert_eq!(grid.values(), reference.values(), "workers = {workers}");
    }
}

#[test]
fn config_driven_run_matches_direct_call() {
    let config = RasterConfig {
        window: Window::default(),
        width: 24,
        height: 18,
        max_iterations: 60,
        num_workers: 4,
        fractal_kind: FractalKind::Mandelbrot,
        exponent: 2,
        julia_constant: Complex::new(0.742, 0.1),
    };
    let cancel = CancelToken::new();
    let from_config = config.rasterize(&cancel).unwrap();

    let direct = rasterize(
        &Mandelbrot::new(60),
        &Window::default(),
        24,
        18,
        4,
        &cancel,
    )
    .unwrap();

    assert_eq!(from_config.values(), direct.values());
}

#[test]
fn panicked_worker_surfaces_as_worker_failure() {
    // An evaluator that blows up on part of the window: the worker that
    // draws those samples dies, and the whole call must fail with
    // WorkerFailure instead of returning a half-filled grid.
    struct Faulty;

    impl Fractal for Faulty {
        fn escape_time(&self, point: Complex) -> u32 {
            if point.re > 1.0 {
                panic!("evaluator fault at {point}");
            }
            1
        }

        fn max_iterations(&self) -> u32 {
            1
        }
    }

    // The default window samples re up to 1.5, so the fault is reachable.
    let window = Window::default();
    let cancel = CancelToken::new();

    let err = rasterize(&Faulty, &window, 8, 8, 4, &cancel).unwrap_err();
    assert!(
        matches!(err, RasterError::WorkerFailure { .. }),
        "got {err:?}"
    );
}

#[test]
fn mid_run_cancellation_yields_no_grid() {
    // A cancel that lands during the run (or even before it) must
    // surface as Cancelled; the caller never sees a partial grid.
    let fractal = Mandelbrot::new(200_000);
    let window = Window::default();
    let cancel = CancelToken::new();

    std::thread::scope(|scope| {
        scope.spawn(|| {
            std::thread::sleep(std::time::Duration::from_millis(2));
            cancel.cancel();
        });
        let result = rasterize(&fractal, &window, 512, 512, 4, &cancel);
        assert!(matches!(result, Err(RasterError::Cancelled)));
    });
}
