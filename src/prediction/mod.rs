//! Fake/real news classification through the remote `/predict` endpoint.
//!
//! [`Predictor`] is the seam the UI controller talks to; [`api::HttpPredictor`]
//! is the production implementation.

pub mod api;

pub use api::{HttpPredictor, PredictError};

/// Minimum trimmed character count accepted for analysis.
pub const MIN_INPUT_CHARS: usize = 10;

/// Message shown for every transport-level failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to analyze the news. Please try again later.";

/// Local rejection of input that is too short to analyze.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter at least {min} characters")]
    TooShort { min: usize, found: usize },
}

/// Trim the raw input and check it meets the minimum length.
pub fn submission_text(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    let found = trimmed.chars().count();
    if found < MIN_INPUT_CHARS {
        return Err(ValidationError::TooShort {
            min: MIN_INPUT_CHARS,
            found,
        });
    }
    Ok(trimmed)
}

/// True when the raw input would pass [`submission_text`].
pub fn is_submittable(raw: &str) -> bool {
    submission_text(raw).is_ok()
}

/// Outcome class derived from the endpoint's label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Fake,
    Real,
    /// A label the client does not recognize, kept verbatim.
    Unknown(String),
}

impl Verdict {
    /// Fold a label into a verdict, ignoring ASCII case.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("fake") {
            Self::Fake
        } else if label.eq_ignore_ascii_case("real") {
            Self::Real
        } else {
            Self::Unknown(label.to_string())
        }
    }

    /// Fixed explanatory sentence rendered under the headline.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Fake => "This news appears to be fake or misleading",
            Self::Real => "This news appears to be legitimate",
            Self::Unknown(_) => "The model returned an unrecognized label",
        }
    }
}

/// A successful classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    /// Label exactly as returned by the endpoint.
    pub label: String,
    pub verdict: Verdict,
    /// Displayable confidence, when the endpoint reports a real one.
    pub confidence: Option<String>,
}

impl Prediction {
    pub fn from_label(label: impl Into<String>, confidence: Option<String>) -> Self {
        let label = label.into();
        Self {
            verdict: Verdict::from_label(&label),
            label,
            confidence,
        }
    }
}

/// Anything that can classify a piece of news text.
pub trait Predictor: Send + Sync {
    fn predict(&self, text: &str) -> Result<Prediction, PredictError>;
}
