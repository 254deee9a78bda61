mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use adapters::pixel_format::{FrameSizeMismatch, write_rgba_frame};
pub use config::{ConfigError, ExplorerConfig};
pub use controllers::interactive::{ExplorerController, FrameData, FramePresenterPort};
pub use crate::core::actions::generate_fractal::errors::EvaluatorError;
pub use crate::core::actions::generate_fractal::fractal_evaluator::FractalEvaluator;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::coordinate_mapping::CoordinateMapping;
pub use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError,
};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::{BAILOUT_SUM, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotEscapeGradient;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::view::{InputEvent, ViewLimits, ViewState};

#[cfg(feature = "gui")]
pub use input::gui::events::{input_from_mouse_button, input_from_scroll};
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
#[cfg(feature = "gui")]
pub use presenters::pixels::presenter::PixelsPresenter;
