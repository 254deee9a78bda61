use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn grid_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB pixels, three bytes per pixel, pixel `(x, y)` at
/// byte offset `(y * width + x) * 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; grid_to_buffer_size(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let grid_size = grid_to_buffer_size(width, height);

        if grid_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| Colour {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            })
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}
