use crate::core::data::point::Point;

/// Per-pixel evaluation. Implementations must be pure: the same pixel
/// always yields the same value, whatever thread computes it.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
