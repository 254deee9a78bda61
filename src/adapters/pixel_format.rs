//! Pixel format conversion for display surfaces.

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::error::Error;
use std::fmt;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for FrameSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA frame holds {} bytes, pixel buffer needs {}",
            self.actual, self.expected
        )
    }
}

impl Error for FrameSizeMismatch {}

/// Expands an RGB pixel buffer into an opaque RGBA frame of the same size.
///
/// `frame` is left untouched if its length does not match.
pub fn write_rgba_frame(
    pixel_buffer: &PixelBuffer,
    frame: &mut [u8],
) -> Result<(), FrameSizeMismatch> {
    let pixels = pixel_buffer.buffer_size() / BYTES_PER_PIXEL;
    let expected = pixels * RGBA_BYTES_PER_PIXEL;

    if frame.len() != expected {
        return Err(FrameSizeMismatch {
            expected,
            actual: frame.len(),
        });
    }

    for (colour, dst_pixel) in pixel_buffer
        .colours()
        .zip(frame.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rgba_frame_known_values() {
        let pixel_buffer = PixelBuffer::from_data(
            2,
            2,
            vec![
                254, 0, 0, // red
                0, 254, 0, // green
                0, 0, 254, // blue
                91, 153, 166, // escaped at m = 0.6
            ],
        )
        .unwrap();
        let mut frame = vec![0; 16];

        write_rgba_frame(&pixel_buffer, &mut frame).unwrap();

        assert_eq!(
            frame,
            vec![254, 0, 0, 255, 0, 254, 0, 255, 0, 0, 254, 255, 91, 153, 166, 255]
        );
    }

    #[test]
    fn test_write_rgba_frame_single_pixel() {
        let pixel_buffer = PixelBuffer::from_data(1, 1, vec![128, 64, 32]).unwrap();
        let mut frame = vec![0; 4];

        write_rgba_frame(&pixel_buffer, &mut frame).unwrap();

        assert_eq!(frame, vec![128, 64, 32, 255]);
    }

    #[test]
    fn test_write_rgba_frame_rejects_wrong_frame_size() {
        let pixel_buffer = PixelBuffer::new(3, 3);
        let mut frame = vec![7; 12];

        let result = write_rgba_frame(&pixel_buffer, &mut frame);

        assert_eq!(
            result,
            Err(FrameSizeMismatch {
                expected: 36,
                actual: 12
            })
        );
        assert!(frame.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_frame_size_mismatch_display() {
        let err = FrameSizeMismatch {
            expected: 36,
            actual: 12,
        };

        assert_eq!(
            format!("{}", err),
            "RGBA frame holds 12 bytes, pixel buffer needs 36"
        );
    }
}
