use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every frame the controller renders. The frame, and the pixel
/// buffer in it, belong to the presenter from then on.
pub trait FramePresenterPort {
    fn present(&mut self, frame: FrameData);
}
