/// A point in the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// One step of `z -> z² + c`, written out component-wise so the
    /// floating point operation order stays fixed.
    #[must_use]
    pub fn square_add(self, c: Complex) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag + c.real,
            imag: 2.0 * self.real * self.imag + c.imag,
        }
    }

    /// Sum of both components. Used as the escape-time bailout measure.
    #[must_use]
    pub fn component_sum(&self) -> f64 {
        self.real + self.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_add_from_origin_returns_c() {
        let c = Complex::new(-0.75, 0.1);

        assert_eq!(Complex::default().square_add(c), c);
    }

    #[test]
    fn test_square_add() {
        // (2 + 3i)² + (1 - 1i) = -5 + 12i + 1 - 1i = -4 + 11i
        let z = Complex::new(2.0, 3.0);
        let result = z.square_add(Complex::new(1.0, -1.0));

        assert_eq!(result.real, -4.0);
        assert_eq!(result.imag, 11.0);
    }

    #[test]
    fn test_square_add_negative_components() {
        // (-1 - 1i)² + (-1 - 1i) = 0 + 2i - 1 - 1i = -1 + 1i
        let z = Complex::new(-1.0, -1.0);
        let result = z.square_add(z);

        assert_eq!(result, Complex::new(-1.0, 1.0));
    }

    #[test]
    fn test_component_sum() {
        assert_eq!(Complex::new(3.0, 4.0).component_sum(), 7.0);
        assert_eq!(Complex::new(-3.0, 4.0).component_sum(), 1.0);
        assert_eq!(Complex::new(-3.0, -4.0).component_sum(), -7.0);
    }
}
