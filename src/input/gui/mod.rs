//! GUI input adapter for interactive fractal exploration.
//!
//! A fixed-size winit window with a pixels framebuffer. Mouse buttons zoom,
//! the scroll wheel changes the iteration budget.

mod app;
pub mod events;

pub use app::run_gui;
