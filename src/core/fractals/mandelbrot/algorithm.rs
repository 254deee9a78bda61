use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::coordinate_mapping::CoordinateMapping;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Iteration stops once `real + imag` of the orbit reaches this value.
///
/// This is not the textbook `|z|² < 4` test. The explorer's palette was
/// tuned against it, so output only matches when the sum rule is kept.
pub const BAILOUT_SUM: f64 = 40.0;

/// Escape-time evaluator producing, for each pixel, the number of
/// iterations survived before bailout (at most `max_iterations`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    mapping: CoordinateMapping,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        self.escape_count(self.mapping.pixel_to_complex(pixel))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(mapping: CoordinateMapping, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            mapping,
            max_iterations,
        })
    }

    /// The orbit starts at `c` itself rather than at zero.
    #[must_use]
    pub fn escape_count(&self, c: Complex) -> u32 {
        let mut z = c;
        let mut iteration = 0;

        while z.component_sum() < BAILOUT_SUM && iteration < self.max_iterations {
            z = z.square_add(c);
            iteration += 1;
        }

        iteration
    }
}
