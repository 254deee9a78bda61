use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// Affine map from pixel coordinates to the complex plane.
///
/// Pixel `(px, py)` maps to `(px * ratio + x_offset) + i(py * ratio + y_offset)`.
/// `ratio` is the width of one pixel in complex-plane units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateMapping {
    pub ratio: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl CoordinateMapping {
    #[must_use]
    pub fn new(ratio: f64, x_offset: f64, y_offset: f64) -> Self {
        Self {
            ratio,
            x_offset,
            y_offset,
        }
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: (f64::from(pixel.x) * self.ratio) + self.x_offset,
            imag: (f64::from(pixel.y) * self.ratio) + self.y_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_offsets() {
        let mapping = CoordinateMapping::new(0.01, -2.0, -1.5);

        assert_eq!(
            mapping.pixel_to_complex(Point { x: 0, y: 0 }),
            Complex::new(-2.0, -1.5)
        );
    }

    #[test]
    fn test_pixel_is_scaled_by_ratio() {
        let mapping = CoordinateMapping::new(0.5, 1.0, -1.0);
        let c = mapping.pixel_to_complex(Point { x: 4, y: 6 });

        assert_eq!(c.real, 3.0);
        assert_eq!(c.imag, 2.0);
    }

    #[test]
    fn test_unit_ratio_scenario() {
        let mapping = CoordinateMapping::new(1.0, -1.0, -1.0);

        assert_eq!(
            mapping.pixel_to_complex(Point { x: 0, y: 0 }),
            Complex::new(-1.0, -1.0)
        );
        assert_eq!(
            mapping.pixel_to_complex(Point { x: 1, y: 1 }),
            Complex::new(0.0, 0.0)
        );
    }
}
