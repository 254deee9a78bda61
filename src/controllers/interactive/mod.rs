//! Interactive controller for the fractal explorer.
//!
//! Owns the current view and the fractal evaluator, turns input events into
//! view transitions and hands every redraw to a presenter port.

mod controller;
pub mod data;
pub mod ports;

pub use controller::ExplorerController;
pub use data::frame_data::FrameData;
pub use ports::presenter::FramePresenterPort;
