//! Wire contract and HTTP client for the `/predict` endpoint.

use serde::{Deserialize, Serialize};

use super::{Prediction, Predictor};
use crate::config::PredictSettings;
use crate::http_client;

/// Error bodies are only logged, so keep them short.
const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

#[derive(Clone, Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Response has no `prediction` label")]
    MissingPrediction,
    #[error("Prediction worker panicked: {0}")]
    WorkerPanicked(String),
}

#[derive(Debug, Deserialize)]
struct PredictResponseWire {
    #[serde(default)]
    prediction: Option<serde_json::Value>,
    #[serde(default)]
    confidence: Option<serde_json::Value>,
}

/// Blocking client for a single prediction endpoint.
#[derive(Clone, Debug)]
pub struct HttpPredictor {
    agent: ureq::Agent,
    endpoint: String,
    max_response_bytes: usize,
}

impl HttpPredictor {
    pub fn new(settings: &PredictSettings) -> Self {
        Self {
            agent: http_client::agent_for(settings),
            endpoint: settings.endpoint.trim().to_string(),
            max_response_bytes: settings.max_response_bytes,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, text: &str) -> Result<Prediction, PredictError> {
        let request = self
            .agent
            .post(&self.endpoint)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(PredictRequest { text }) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_lossy(response, MAX_ERROR_BODY_BYTES);
                return Err(PredictError::Status { code, body });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictError::Transport(err.to_string()));
            }
        };

        // ureq only reports >= 400 as `Error::Status`; unfollowed 1xx/3xx land here.
        let code = response.status();
        if !(200..300).contains(&code) {
            let body = http_client::read_response_lossy(response, MAX_ERROR_BODY_BYTES);
            return Err(PredictError::Status { code, body });
        }

        let bytes = http_client::read_response_bytes(response, self.max_response_bytes)
            .map_err(|err| PredictError::Transport(err.to_string()))?;
        parse_predict_response(&bytes)
    }
}

pub(crate) fn parse_predict_response(body: &[u8]) -> Result<Prediction, PredictError> {
    let wire: PredictResponseWire = serde_json::from_slice(body).map_err(|err| {
        PredictError::InvalidResponse(format!("{err}: {}", String::from_utf8_lossy(body).trim()))
    })?;
    let label = match wire.prediction {
        Some(serde_json::Value::String(label)) => label,
        Some(other) => {
            return Err(PredictError::InvalidResponse(format!(
                "`prediction` must be a string, got {other}"
            )));
        }
        None => return Err(PredictError::MissingPrediction),
    };
    if label.trim().is_empty() {
        return Err(PredictError::InvalidResponse(
            "`prediction` is empty".to_string(),
        ));
    }
    Ok(Prediction::from_label(
        label,
        wire.confidence.as_ref().and_then(display_confidence),
    ))
}

fn display_confidence(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Number(number) => {
            let value = number.as_f64()?;
            if (0.0..=1.0).contains(&value) {
                Some(format!("{:.1}%", value * 100.0))
            } else {
                Some(number.to_string())
            }
        }
        serde_json::Value::String(text) => {
            let text = text.trim();
            if text.is_empty() || text.eq_ignore_ascii_case("n/a") {
                None
            } else {
                Some(text.to_string())
            }
        }
        _ => None,
    }
}
