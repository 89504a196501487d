//! Shared state types for the egui UI.

mod analysis;
mod status;

pub use analysis::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub analysis: AnalysisFormState,
    pub status: StatusBarState,
}
