use crate::prediction::{Prediction, Verdict};

/// Visible state of the result panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Panel hidden.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    Result(Prediction),
    /// User-facing message; never the raw transport error.
    Error(String),
}

/// Visual treatment of the result panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVariant {
    Loading,
    Fake,
    Real,
    Unknown,
    Error,
}

impl AnalysisPhase {
    pub fn panel_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn variant(&self) -> Option<PanelVariant> {
        match self {
            Self::Idle => None,
            Self::Loading => Some(PanelVariant::Loading),
            Self::Result(prediction) => Some(match prediction.verdict {
                Verdict::Fake => PanelVariant::Fake,
                Verdict::Real => PanelVariant::Real,
                Verdict::Unknown(_) => PanelVariant::Unknown,
            }),
            Self::Error(_) => Some(PanelVariant::Error),
        }
    }
}

/// Text input plus the result panel it drives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisFormState {
    /// Raw, untrimmed input text.
    pub input: String,
    pub submit_enabled: bool,
    pub phase: AnalysisPhase,
    /// Ask the renderer to focus the text field on the next frame.
    pub focus_input_requested: bool,
}

impl AnalysisFormState {
    pub fn trimmed_chars(&self) -> usize {
        self.input.trim().chars().count()
    }
}
