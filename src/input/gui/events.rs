//! Translation of raw winit input into explorer input events.

use winit::event::{MouseButton, MouseScrollDelta};

use crate::core::data::point::Point;
use crate::core::view::input_event::InputEvent;

/// Left click zooms in, right click zooms out, other buttons do nothing.
#[must_use]
pub fn input_from_mouse_button(button: MouseButton, position: Point) -> InputEvent {
    match button {
        MouseButton::Left => InputEvent::ZoomIn(position),
        MouseButton::Right => InputEvent::ZoomOut(position),
        _ => InputEvent::Ignored,
    }
}

/// Scrolling up raises the iteration budget, scrolling down lowers it.
#[must_use]
pub fn input_from_scroll(delta: MouseScrollDelta) -> InputEvent {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        InputEvent::IterationsUp
    } else if vertical < 0.0 {
        InputEvent::IterationsDown
    } else {
        InputEvent::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    const POSITION: Point = Point { x: 120, y: 45 };

    #[test]
    fn test_left_button_zooms_in_at_position() {
        assert_eq!(
            input_from_mouse_button(MouseButton::Left, POSITION),
            InputEvent::ZoomIn(POSITION)
        );
    }

    #[test]
    fn test_right_button_zooms_out_at_position() {
        assert_eq!(
            input_from_mouse_button(MouseButton::Right, POSITION),
            InputEvent::ZoomOut(POSITION)
        );
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        for button in [
            MouseButton::Middle,
            MouseButton::Back,
            MouseButton::Forward,
            MouseButton::Other(8),
        ] {
            assert_eq!(input_from_mouse_button(button, POSITION), InputEvent::Ignored);
        }
    }

    #[test]
    fn test_line_scroll_direction() {
        assert_eq!(
            input_from_scroll(MouseScrollDelta::LineDelta(0.0, 1.0)),
            InputEvent::IterationsUp
        );
        assert_eq!(
            input_from_scroll(MouseScrollDelta::LineDelta(0.0, -1.0)),
            InputEvent::IterationsDown
        );
    }

    #[test]
    fn test_pixel_scroll_direction() {
        assert_eq!(
            input_from_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5))),
            InputEvent::IterationsUp
        );
        assert_eq!(
            input_from_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -3.0))),
            InputEvent::IterationsDown
        );
    }

    #[test]
    fn test_horizontal_scroll_is_ignored() {
        assert_eq!(
            input_from_scroll(MouseScrollDelta::LineDelta(2.0, 0.0)),
            InputEvent::Ignored
        );
    }
}
