use crate::core::data::point::Point;

/// Discrete user input, already translated from raw window events.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Zoom in around the clicked pixel.
    ZoomIn(Point),
    /// Zoom out around the clicked pixel.
    ZoomOut(Point),
    IterationsUp,
    IterationsDown,
    /// Anything the explorer does not react to.
    Ignored,
}
