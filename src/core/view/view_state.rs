use crate::core::data::coordinate_mapping::CoordinateMapping;
use crate::core::data::point::Point;
use crate::core::view::input_event::InputEvent;
use crate::core::view::limits::ViewLimits;

/// What the explorer is currently looking at: the pixel mapping and the
/// iteration budget. Transitions return a new value and leave the old
/// one untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    mapping: CoordinateMapping,
    iterations: u32,
}

impl ViewState {
    #[must_use]
    pub fn new(mapping: CoordinateMapping, iterations: u32) -> Self {
        Self {
            mapping,
            iterations,
        }
    }

    #[must_use]
    pub fn mapping(&self) -> CoordinateMapping {
        self.mapping
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Applies one input event. The returned flag is `true` only when the
    /// view actually changed and needs to be redrawn.
    #[must_use]
    pub fn apply(self, event: InputEvent, limits: &ViewLimits) -> (Self, bool) {
        let next = match event {
            InputEvent::ZoomIn(pixel) => self.zoom_in(pixel, limits),
            InputEvent::ZoomOut(pixel) => self.zoom_out(pixel, limits),
            InputEvent::IterationsUp => self.with_iterations(
                limits
                    .iterations_max
                    .min((f64::from(self.iterations) * limits.iterations_factor) as u32),
            ),
            InputEvent::IterationsDown => self.with_iterations(
                limits
                    .iterations_min
                    .max((f64::from(self.iterations) / limits.iterations_factor) as u32),
            ),
            InputEvent::Ignored => None,
        };

        match next {
            Some(state) => (state, true),
            None => (self, false),
        }
    }

    // Zooming in shifts the offset by the new ratio, zooming out by the old
    // one. Every pan/zoom path depends on that pairing, so keep it as is.
    fn zoom_in(&self, pixel: Point, limits: &ViewLimits) -> Option<Self> {
        let old = self.mapping.ratio;
        let new = limits.zoom_in_max.max(old / limits.zoom_factor);

        if new == old {
            return None;
        }

        Some(Self {
            mapping: CoordinateMapping {
                ratio: new,
                x_offset: self.mapping.x_offset + f64::from(pixel.x) * new,
                y_offset: self.mapping.y_offset + f64::from(pixel.y) * new,
            },
            iterations: self.iterations,
        })
    }

    fn zoom_out(&self, pixel: Point, limits: &ViewLimits) -> Option<Self> {
        let old = self.mapping.ratio;
        let new = limits.zoom_out_max.min(old * limits.zoom_factor);

        if new == old {
            return None;
        }

        Some(Self {
            mapping: CoordinateMapping {
                ratio: new,
                x_offset: self.mapping.x_offset - f64::from(pixel.x) * old,
                y_offset: self.mapping.y_offset - f64::from(pixel.y) * old,
            },
            iterations: self.iterations,
        })
    }

    fn with_iterations(&self, iterations: u32) -> Option<Self> {
        if iterations == self.iterations {
            return None;
        }

        Some(Self {
            mapping: self.mapping,
            iterations,
        })
    }
}
