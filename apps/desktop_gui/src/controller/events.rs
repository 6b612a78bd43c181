//! Actions the window raises while rendering a frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ComputeOnUiThread,
    ComputeInBackground,
}

impl UiAction {
    pub fn name(self) -> &'static str {
        match self {
            Self::ComputeOnUiThread => "compute_on_ui_thread",
            Self::ComputeInBackground => "compute_in_background",
        }
    }
}
