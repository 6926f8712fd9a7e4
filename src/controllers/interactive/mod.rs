//! Interactive controller for exploring the Mandelbrot set.
//!
//! Owns the viewport and render settings, runs renders on a background worker
//! thread and hands finished frames to a presenter port. Callers poll
//! `is_ready` and `progress` while a render is in flight.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::controller::ControllerError;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
