/// Step sizes and clamp bounds for view transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    /// Ratio is divided (zoom in) or multiplied (zoom out) by this.
    pub zoom_factor: f64,
    /// Smallest ratio, the deepest zoom double precision is trusted with.
    pub zoom_in_max: f64,
    /// Largest ratio.
    pub zoom_out_max: f64,
    pub iterations_factor: f64,
    pub iterations_min: u32,
    pub iterations_max: u32,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            zoom_factor: 2.0,
            zoom_in_max: 1.0e-18,
            zoom_out_max: 0.2,
            iterations_factor: 1.4,
            iterations_min: 5,
            iterations_max: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewLimits;

    #[test]
    fn default_limits_match_documented_values() {
        let limits = ViewLimits::default();

        assert_eq!(limits.zoom_factor, 2.0);
        assert_eq!(limits.zoom_in_max, 1.0e-18);
        assert_eq!(limits.zoom_out_max, 0.2);
        assert_eq!(limits.iterations_factor, 1.4);
        assert_eq!(limits.iterations_min, 5);
        assert_eq!(limits.iterations_max, 1000);
    }

    #[test]
    fn default_limits_are_consistent() {
        let limits = ViewLimits::default();

        assert!(limits.zoom_in_max > 0.0);
        assert!(limits.zoom_out_max > limits.zoom_in_max);
        assert!(limits.zoom_factor > 1.0);
        assert!(limits.iterations_factor > 1.0);
        assert!(limits.iterations_min > 0);
        assert!(limits.iterations_max >= limits.iterations_min);
    }
}
