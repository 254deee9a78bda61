pub mod input_event;
pub mod limits;
pub mod view_state;

pub use input_event::InputEvent;
pub use limits::ViewLimits;
pub use view_state::ViewState;
