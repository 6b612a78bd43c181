//! UI layer for the demo window: app shell and styling.

pub mod app;
pub mod theme;

pub use app::LongComputeApp;
