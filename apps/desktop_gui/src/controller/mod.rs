//! Controller layer: actions raised by the UI and their dispatch onto the compute controller.

pub mod events;
pub mod orchestration;
