use crate::core::data::pixel_buffer::PixelBuffer;

/// One rendered frame, tagged with the generation that produced it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
}
