//! Input adapters for the fractal explorer.

pub mod gui;
