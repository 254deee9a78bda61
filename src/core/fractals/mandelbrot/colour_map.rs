use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::f64::consts::PI;

/// Shapes the escape fraction `m = iterations / max_iterations` through a
/// quadratic (red), linear (green) and cosine (blue) curve, each reduced
/// modulo 255. A full budget wraps all three channels back to black.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotEscapeGradient {
    max_iterations: u32,
}

fn channel(value: f64) -> u8 {
    // `as` truncates toward zero, and value is never negative.
    ((value as u32) % 255) as u8
}

impl ColourMap<u32> for MandelbrotEscapeGradient {
    fn map(&self, iterations: u32) -> Colour {
        let m = f64::from(iterations) / f64::from(self.max_iterations);

        let linear = channel(255.0 * m);
        let cosine = channel(255.0 * (-(PI * m).cos() + 1.0) / 2.0);
        let quadratic = channel(255.0 * (m * m));

        Colour {
            r: quadratic,
            g: linear,
            b: cosine,
        }
    }
}

impl MandelbrotEscapeGradient {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_iterations() {
        assert_eq!(
            MandelbrotEscapeGradient::new(0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = MandelbrotEscapeGradient::new(100).unwrap();

        assert_eq!(mapper.map(100), Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_map_returns_black_at_zero_iterations() {
        let mapper = MandelbrotEscapeGradient::new(100).unwrap();

        assert_eq!(mapper.map(0), Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_map_channel_assignment() {
        // m = 0.6: quadratic 91.8, linear 153, cosine 166.9
        let mapper = MandelbrotEscapeGradient::new(10).unwrap();

        assert_eq!(mapper.map(6), Colour { r: 91, g: 153, b: 166 });
    }

    #[test]
    fn test_map_half_budget() {
        // m = 0.5: quadratic 63.75, linear 127.5, cosine 127.5
        let mapper = MandelbrotEscapeGradient::new(100).unwrap();

        assert_eq!(mapper.map(50), Colour { r: 63, g: 127, b: 127 });
    }

    #[test]
    fn test_channels_never_reach_255() {
        for max_iterations in [1, 2, 5, 7, 10, 100, 140, 999, 1000] {
            let mapper = MandelbrotEscapeGradient::new(max_iterations).unwrap();

            for iterations in 0..=max_iterations {
                let colour = mapper.map(iterations);

                assert!(colour.r <= 254);
                assert!(colour.g <= 254);
                assert!(colour.b <= 254);
            }
        }
    }
}
