//! Owns the UI state and the single prediction round-trip.

mod analysis;
pub(crate) mod jobs;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::egui_app::state::{StatusTone, UiState};
use crate::prediction::Predictor;

/// Maintains app state and bridges the prediction client to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    predictor: Arc<dyn Predictor>,
    jobs: jobs::ControllerJobs,
}

impl EguiController {
    /// Build a controller around an injected predictor and validate the
    /// initial (empty) input.
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            predictor,
            jobs: jobs::ControllerJobs::new(),
        };
        controller.validate_input();
        controller
    }

    /// Open the log directory in the platform file browser.
    pub fn open_logs_folder(&mut self) {
        let result = crate::app_dirs::logs_dir()
            .map_err(|err| err.to_string())
            .and_then(|dir| open::that(&dir).map_err(|err| err.to_string()));
        if let Err(err) = result {
            tracing::warn!(%err, "Failed to open logs folder");
            self.set_status(format!("Could not open logs: {err}"), StatusTone::Warning);
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}
