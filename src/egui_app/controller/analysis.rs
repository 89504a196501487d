use super::EguiController;
use super::jobs::{JobMessage, PredictionJobResult};
use crate::egui_app::state::{AnalysisPhase, StatusTone};
use crate::prediction::{self, GENERIC_FAILURE_MESSAGE};
use std::sync::mpsc::TryRecvError;

impl EguiController {
    /// Recompute whether the input may be submitted. Runs on every edit.
    pub fn validate_input(&mut self) {
        let form = &mut self.ui.analysis;
        form.submit_enabled = prediction::is_submittable(&form.input) && !form.phase.is_loading();
    }

    /// Empty the input, hide the panel and drop any in-flight result.
    pub fn clear(&mut self) {
        if let Some(request_id) = self.jobs.retire_pending() {
            tracing::debug!(request_id, "Cleared while a prediction was pending");
        }
        let form = &mut self.ui.analysis;
        form.input.clear();
        form.phase = AnalysisPhase::Idle;
        form.submit_enabled = true;
        form.focus_input_requested = true;
        self.set_status("Ready", StatusTone::Idle);
    }

    /// Replace the input with a sample's text without analyzing it.
    pub fn load_sample(&mut self, text: &str) {
        self.ui.analysis.input = text.to_string();
        self.ui.analysis.focus_input_requested = true;
        self.validate_input();
    }

    /// Replace the input with a sample's text and analyze it right away.
    pub fn load_sample_and_analyze(&mut self, text: &str) {
        self.ui.analysis.input = text.to_string();
        self.analyze();
    }

    /// Validate the input and submit it for classification.
    ///
    /// A too-short input shows the validation message without a request, and
    /// submit stays disabled until the input is long enough again.
    pub fn analyze(&mut self) {
        let text = match prediction::submission_text(&self.ui.analysis.input) {
            Ok(text) => text.to_string(),
            Err(err) => {
                self.jobs.retire_pending();
                self.ui.analysis.phase = AnalysisPhase::Error(err.to_string());
                self.validate_input();
                self.set_status(err.to_string(), StatusTone::Warning);
                return;
            }
        };

        self.ui.analysis.phase = AnalysisPhase::Loading;
        self.ui.analysis.submit_enabled = false;
        let chars = text.chars().count();
        let request_id = self.jobs.begin_prediction(self.predictor.clone(), text);
        tracing::info!(request_id, chars, "Submitting news text for analysis");
        self.set_status("Analyzing…", StatusTone::Busy);
    }

    /// True while the newest request has not produced a result yet.
    pub fn is_analysis_pending(&self) -> bool {
        self.jobs.pending_request().is_some()
    }

    /// Apply finished background work. Call once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            match self.jobs.try_recv_message() {
                Ok(message) => self.handle_job_message(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    pub(super) fn handle_job_message(&mut self, message: JobMessage) {
        match message {
            JobMessage::PredictionFinished(result) => self.apply_prediction_result(result),
        }
    }

    fn apply_prediction_result(&mut self, message: PredictionJobResult) {
        let PredictionJobResult { request_id, result } = message;
        if !self.jobs.complete(request_id) {
            tracing::debug!(request_id, "Dropping stale prediction result");
            return;
        }
        match result {
            Ok(prediction) => {
                tracing::info!(
                    request_id,
                    label = %prediction.label,
                    verdict = ?prediction.verdict,
                    "Prediction received"
                );
                self.set_status(format!("Verdict: {}", prediction.label), StatusTone::Info);
                self.ui.analysis.phase = AnalysisPhase::Result(prediction);
            }
            Err(err) => {
                tracing::error!(request_id, %err, "Prediction request failed");
                self.ui.analysis.phase = AnalysisPhase::Error(GENERIC_FAILURE_MESSAGE.to_string());
                self.set_status("Analysis failed", StatusTone::Error);
            }
        }
        self.validate_input();
    }
}
