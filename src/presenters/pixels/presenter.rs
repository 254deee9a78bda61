use log::warn;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::adapters::pixel_format::write_rgba_frame;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::point::Point;

/// Shows rendered frames in a window through a `pixels` framebuffer of the
/// render grid's size. The surface scales it to the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    last_presented_generation: u64,
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: FrameData) {
        if frame.generation <= self.last_presented_generation {
            return;
        }

        match write_rgba_frame(&frame.pixel_buffer, self.pixels.frame_mut()) {
            Ok(()) => self.last_presented_generation = frame.generation,
            Err(err) => warn!("dropping frame {}: {}", frame.generation, err),
        }
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            last_presented_generation: 0,
        })
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    /// Converts a window cursor position into a framebuffer pixel. Positions
    /// outside the framebuffer snap to the nearest edge pixel.
    #[must_use]
    pub fn cursor_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point {
            x: x as i32,
            y: y as i32,
        }
    }
}
