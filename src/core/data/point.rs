/// A pixel position in the render grid, `(0, 0)` being the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
