use crate::config::errors::ConfigError;
use crate::core::data::coordinate_mapping::CoordinateMapping;
use crate::core::view::limits::ViewLimits;
use crate::core::view::view_state::ViewState;

/// Startup configuration of the explorer. Nothing here changes while the
/// explorer runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Render grid (and window) width in pixels.
    pub width: u32,
    /// Render grid (and window) height in pixels.
    pub height: u32,
    /// The initial view spans `1 / zoom` units horizontally.
    pub zoom: f64,
    /// Real part of the initial view centre.
    pub x_cam: f64,
    /// Subtracted from the initial vertical offset.
    pub y_cam: f64,
    pub initial_iterations: u32,
    pub limits: ViewLimits,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            zoom: 0.3,
            x_cam: -0.5,
            y_cam: 0.0,
            initial_iterations: 100,
            limits: ViewLimits::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroWindowSize {
                width: self.width,
                height: self.height,
            });
        }

        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(ConfigError::NonPositiveZoom(self.zoom));
        }

        if limits.zoom_factor.is_nan() || limits.zoom_factor <= 1.0 {
            return Err(ConfigError::ZoomFactorTooSmall(limits.zoom_factor));
        }

        if limits.iterations_factor.is_nan() || limits.iterations_factor <= 1.0 {
            return Err(ConfigError::IterationsFactorTooSmall(limits.iterations_factor));
        }

        if limits.zoom_in_max.is_nan()
            || limits.zoom_out_max.is_nan()
            || limits.zoom_in_max <= 0.0
            || limits.zoom_in_max > limits.zoom_out_max
        {
            return Err(ConfigError::InvalidRatioBounds {
                zoom_in_max: limits.zoom_in_max,
                zoom_out_max: limits.zoom_out_max,
            });
        }

        if limits.iterations_min == 0 || limits.iterations_min > limits.iterations_max {
            return Err(ConfigError::InvalidIterationBounds {
                min: limits.iterations_min,
                max: limits.iterations_max,
            });
        }

        if self.initial_iterations < limits.iterations_min
            || self.initial_iterations > limits.iterations_max
        {
            return Err(ConfigError::InitialIterationsOutOfBounds {
                iterations: self.initial_iterations,
                min: limits.iterations_min,
                max: limits.iterations_max,
            });
        }

        Ok(())
    }

    /// The view the explorer opens with: `1 / zoom` units across, centred
    /// horizontally on `x_cam`.
    #[must_use]
    pub fn initial_view_state(&self) -> ViewState {
        let width = f64::from(self.width);
        let height = f64::from(self.height);

        let x_axis = 1.0 / self.zoom;
        let y_axis = height / (width * self.zoom);

        let mapping = CoordinateMapping {
            ratio: x_axis / width,
            x_offset: (-x_axis / 2.0) + self.x_cam,
            y_offset: (-y_axis / 2.0) - self.y_cam,
        };

        ViewState::new(mapping, self.initial_iterations)
    }
}
