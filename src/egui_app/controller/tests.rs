use super::jobs::{JobMessage, PredictionJobResult};
use super::*;
use crate::egui_app::state::{AnalysisPhase, PanelVariant};
use crate::prediction::{GENERIC_FAILURE_MESSAGE, PredictError, Prediction, Verdict};
use crate::samples;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

const NEWS: &str = "Local council approves budget for new public library";

/// Answers from a script and records every submitted text.
#[derive(Default)]
struct ScriptedPredictor {
    responses: Mutex<VecDeque<Result<Prediction, PredictError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedPredictor {
    fn with(responses: Vec<Result<Prediction, PredictError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Predictor for ScriptedPredictor {
    fn predict(&self, text: &str) -> Result<Prediction, PredictError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PredictError::Transport("script exhausted".into())))
    }
}

/// Blocks every call until the test drops the gate.
struct HeldPredictor {
    gate: Mutex<Receiver<()>>,
}

impl HeldPredictor {
    fn new() -> (Arc<Self>, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        (Arc::new(Self { gate: Mutex::new(rx) }), tx)
    }
}

impl Predictor for HeldPredictor {
    fn predict(&self, _text: &str) -> Result<Prediction, PredictError> {
        let _ = self.gate.lock().unwrap().recv();
        Err(PredictError::Transport("released".into()))
    }
}

/// Panics on every call, like a predictor with a bug.
struct PanickingPredictor;

impl Predictor for PanickingPredictor {
    fn predict(&self, _text: &str) -> Result<Prediction, PredictError> {
        panic!("predictor bug");
    }
}

fn finish_pending(controller: &mut EguiController) {
    let message = controller
        .jobs
        .recv_message_timeout(Duration::from_secs(5))
        .expect("prediction job finished");
    controller.handle_job_message(message);
}

fn inject(controller: &mut EguiController, request_id: u64, label: &str) {
    controller.handle_job_message(JobMessage::PredictionFinished(PredictionJobResult {
        request_id,
        result: Ok(Prediction::from_label(label, None)),
    }));
}

#[test]
fn startup_disables_submit_for_empty_input() {
    let controller = EguiController::new(ScriptedPredictor::with(Vec::new()));
    assert!(!controller.ui.analysis.submit_enabled);
    assert_eq!(controller.ui.analysis.phase, AnalysisPhase::Idle);
    assert!(!controller.ui.analysis.phase.panel_visible());
}

#[test]
fn validate_input_tracks_trimmed_length() {
    let mut controller = EguiController::new(ScriptedPredictor::with(Vec::new()));
    for (input, enabled) in [
        ("short", false),
        ("   123456789   ", false),
        ("0123456789", true),
        ("  0123456789\n", true),
        (NEWS, true),
    ] {
        controller.ui.analysis.input = input.to_string();
        controller.validate_input();
        assert_eq!(controller.ui.analysis.submit_enabled, enabled, "{input:?}");
    }
}

#[test]
fn forced_analyze_on_short_input_sends_nothing_and_keeps_submit_disabled() {
    let predictor = ScriptedPredictor::with(Vec::new());
    let mut controller = EguiController::new(predictor.clone());
    controller.ui.analysis.input = "  too short ".into();
    controller.analyze();

    assert_eq!(
        controller.ui.analysis.phase,
        AnalysisPhase::Error("Please enter at least 10 characters".into())
    );
    assert!(!controller.is_analysis_pending());
    assert!(!controller.ui.analysis.submit_enabled);
    assert!(predictor.calls().is_empty());
}

#[test]
fn fake_label_renders_fake_variant_with_raw_headline() {
    let predictor = ScriptedPredictor::with(vec![Ok(Prediction::from_label("Fake", None))]);
    let mut controller = EguiController::new(predictor.clone());
    controller.ui.analysis.input = format!("  {NEWS}  ");
    controller.validate_input();
    controller.analyze();

    assert_eq!(controller.ui.analysis.phase, AnalysisPhase::Loading);
    assert!(!controller.ui.analysis.submit_enabled);
    finish_pending(&mut controller);

    let AnalysisPhase::Result(prediction) = &controller.ui.analysis.phase else {
        panic!("expected result, got {:?}", controller.ui.analysis.phase);
    };
    assert_eq!(prediction.label, "Fake");
    assert_eq!(controller.ui.analysis.phase.variant(), Some(PanelVariant::Fake));
    assert!(controller.ui.analysis.submit_enabled);
    assert_eq!(predictor.calls(), vec![NEWS.to_string()]);
}

#[test]
fn real_label_renders_real_variant() {
    let predictor = ScriptedPredictor::with(vec![Ok(Prediction::from_label("Real", None))]);
    let mut controller = EguiController::new(predictor);
    controller.ui.analysis.input = NEWS.into();
    controller.analyze();
    finish_pending(&mut controller);

    assert_eq!(controller.ui.analysis.phase.variant(), Some(PanelVariant::Real));
    assert_eq!(controller.ui.status.text, "Verdict: Real");
}

#[test]
fn unrecognized_label_renders_unknown_variant() {
    let predictor = ScriptedPredictor::with(vec![Ok(Prediction::from_label("Satire", None))]);
    let mut controller = EguiController::new(predictor);
    controller.ui.analysis.input = NEWS.into();
    controller.analyze();
    finish_pending(&mut controller);

    let AnalysisPhase::Result(prediction) = &controller.ui.analysis.phase else {
        panic!("expected result");
    };
    assert_eq!(prediction.verdict, Verdict::Unknown("Satire".into()));
    assert_eq!(controller.ui.analysis.phase.variant(), Some(PanelVariant::Unknown));
}

#[test]
fn transport_failures_render_generic_error() {
    let predictor = ScriptedPredictor::with(vec![
        Err(PredictError::Status {
            code: 500,
            body: r#"{"prediction": "Real"}"#.into(),
        }),
        Err(PredictError::Transport("connection refused".into())),
        Err(PredictError::MissingPrediction),
    ]);
    let mut controller = EguiController::new(predictor);
    controller.ui.analysis.input = NEWS.into();
    for _ in 0..3 {
        controller.analyze();
        finish_pending(&mut controller);
        assert_eq!(
            controller.ui.analysis.phase,
            AnalysisPhase::Error(GENERIC_FAILURE_MESSAGE.into())
        );
        assert!(controller.ui.analysis.submit_enabled);
    }
}

#[test]
fn try_sample_loads_exact_text_and_submits_it() {
    let predictor = ScriptedPredictor::with(vec![Ok(Prediction::from_label("FAKE", None))]);
    let mut controller = EguiController::new(predictor.clone());
    let card = samples::sample_card(0).unwrap();

    controller.load_sample_and_analyze(card.text);
    assert_eq!(controller.ui.analysis.input, card.text);
    finish_pending(&mut controller);

    assert_eq!(predictor.calls(), vec![card.text.to_string()]);
    assert_eq!(controller.ui.analysis.phase.variant(), Some(PanelVariant::Fake));
}

#[test]
fn load_sample_only_fills_input() {
    let predictor = ScriptedPredictor::with(Vec::new());
    let mut controller = EguiController::new(predictor.clone());
    let card = samples::sample_card(1).unwrap();

    controller.load_sample(card.text);

    assert_eq!(controller.ui.analysis.input, card.text);
    assert!(controller.ui.analysis.submit_enabled);
    assert!(controller.ui.analysis.focus_input_requested);
    assert!(!controller.is_analysis_pending());
    assert_eq!(controller.ui.analysis.phase, AnalysisPhase::Idle);
    assert!(predictor.calls().is_empty());
}

#[test]
fn clear_resets_from_any_state_and_is_idempotent() {
    let predictor = ScriptedPredictor::with(vec![Ok(Prediction::from_label("Real", None))]);
    let mut controller = EguiController::new(predictor);
    controller.ui.analysis.input = NEWS.into();
    controller.analyze();
    finish_pending(&mut controller);
    assert!(controller.ui.analysis.phase.panel_visible());

    controller.clear();
    let once = controller.ui.clone();
    controller.clear();

    assert_eq!(controller.ui, once);
    assert!(controller.ui.analysis.input.is_empty());
    assert!(!controller.ui.analysis.phase.panel_visible());
    assert!(controller.ui.analysis.submit_enabled);
    assert!(controller.ui.analysis.focus_input_requested);
}

#[test]
fn stale_result_never_overwrites_newer_request() {
    let (predictor, _gate) = HeldPredictor::new();
    let mut controller = EguiController::new(predictor);
    controller.ui.analysis.input = NEWS.into();
    controller.analyze();
    controller.load_sample_and_analyze(samples::sample_card(2).unwrap().text);

    inject(&mut controller, 1, "Real");
    assert_eq!(controller.ui.analysis.phase, AnalysisPhase::Loading);
    assert!(controller.is_analysis_pending());

    inject(&mut controller, 2, "Fake");
    assert_eq!(controller.ui.analysis.phase.variant(), Some(PanelVariant::Fake));
    assert!(!controller.is_analysis_pending());

    inject(&mut controller, 1, "Real");
    assert_eq!(controller.ui.analysis.phase.variant(), Some(PanelVariant::Fake));
}

#[test]
fn late_result_after_clear_is_ignored() {
    let (predictor, _gate) = HeldPredictor::new();
    let mut controller = EguiController::new(predictor);
    controller.ui.analysis.input = NEWS.into();
    controller.analyze();
    controller.clear();

    inject(&mut controller, 1, "Fake");

    assert_eq!(controller.ui.analysis.phase, AnalysisPhase::Idle);
    assert!(controller.ui.analysis.input.is_empty());
}

#[test]
fn editing_during_loading_keeps_submit_disabled() {
    let (predictor, _gate) = HeldPredictor::new();
    let mut controller = EguiController::new(predictor);
    controller.ui.analysis.input = NEWS.into();
    controller.analyze();

    controller.ui.analysis.input.push_str(" today");
    controller.validate_input();

    assert!(!controller.ui.analysis.submit_enabled);
}

#[test]
fn panicking_predictor_ends_loading_with_generic_error() {
    let mut controller = EguiController::new(Arc::new(PanickingPredictor));
    controller.ui.analysis.input = NEWS.into();
    controller.analyze();
    assert!(controller.is_analysis_pending());

    finish_pending(&mut controller);

    assert!(!controller.is_analysis_pending());
    assert_eq!(
        controller.ui.analysis.phase,
        AnalysisPhase::Error(GENERIC_FAILURE_MESSAGE.into())
    );
    assert!(controller.ui.analysis.submit_enabled);
}
