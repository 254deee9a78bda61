use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::generate_fractal::errors::EvaluatorError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::coordinate_mapping::CoordinateMapping;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotEscapeGradient;

/// Renders pixel grids on a dedicated rayon pool.
///
/// The pool lives as long as the evaluator and is torn down when it is
/// dropped, so one evaluator should be created at startup and reused for
/// every render.
#[derive(Debug)]
pub struct FractalEvaluator {
    pool: ThreadPool,
}

impl FractalEvaluator {
    /// Builds a pool sized to the available hardware parallelism.
    pub fn new() -> Result<Self, EvaluatorError> {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        Self::with_threads(threads)
    }

    pub fn with_threads(threads: usize) -> Result<Self, EvaluatorError> {
        if threads == 0 {
            return Err(EvaluatorError::ZeroThreads);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("fractal-worker-{}", index))
            .build()?;

        debug!("fractal worker pool started with {} threads", threads);

        Ok(Self { pool })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Renders the Mandelbrot set for `mapping` into a fresh
    /// `width * height` buffer.
    ///
    /// # Panics
    /// Panics if `width`, `height` or `iterations` is zero.
    #[must_use]
    pub fn render(
        &self,
        width: u32,
        height: u32,
        mapping: CoordinateMapping,
        iterations: u32,
    ) -> PixelBuffer {
        let algorithm = MandelbrotAlgorithm::new(mapping, iterations)
            .expect("render requires a non-zero iteration budget");
        let colour_map = MandelbrotEscapeGradient::new(iterations)
            .expect("render requires a non-zero iteration budget");

        self.render_with(width, height, &algorithm, &colour_map)
    }

    /// Evaluates every pixel of the grid with `algorithm` and colours the
    /// result with `colour_map`. Rows are handed out to the pool, and each
    /// pixel is written at its own row-major slot, so the output does not
    /// depend on the pool size or on scheduling.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn render_with<Alg, CMap>(
        &self,
        width: u32,
        height: u32,
        algorithm: &Alg,
        colour_map: &CMap,
    ) -> PixelBuffer
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
    {
        assert!(
            width > 0 && height > 0,
            "render grid must be at least 1x1, got {}x{}",
            width,
            height
        );

        let mut pixel_buffer = PixelBuffer::new(width, height);
        let row_bytes = width as usize * BYTES_PER_PIXEL;

        self.pool.install(|| {
            pixel_buffer
                .buffer_mut()
                .par_chunks_mut(row_bytes)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, slot) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                        let value = algorithm.compute(Point {
                            x: x as i32,
                            y: y as i32,
                        });
                        let Colour { r, g, b } = colour_map.map(value);

                        slot[0] = r;
                        slot[1] = g;
                        slot[2] = b;
                    }
                });
        });

        pixel_buffer
    }
}
