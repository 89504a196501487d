use std::sync::{
    Arc,
    mpsc::{Receiver, Sender, TryRecvError},
};
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use crate::prediction::{PredictError, Prediction, Predictor};

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<Prediction, PredictError>,
}

/// Background work and the generation token that guards the result panel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    pending_request: Option<u64>,
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| text.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            pending_request: None,
        }
    }

    /// Start a prediction on a worker thread. The returned id supersedes any
    /// request that is still in flight.
    pub(super) fn begin_prediction(&mut self, predictor: Arc<dyn Predictor>, text: String) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        if let Some(previous) = self.pending_request.replace(request_id) {
            tracing::debug!(previous, request_id, "Superseding in-flight prediction");
        }
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| predictor.predict(&text)))
                .unwrap_or_else(|payload| Err(PredictError::WorkerPanicked(panic_message(&*payload))));
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                request_id,
                result,
            }));
        });
        request_id
    }

    /// Forget the pending request so its result is dropped on arrival.
    pub(super) fn retire_pending(&mut self) -> Option<u64> {
        self.pending_request.take()
    }

    /// Accept a finished request if it is the newest one.
    pub(super) fn complete(&mut self, request_id: u64) -> bool {
        if self.pending_request == Some(request_id) {
            self.pending_request = None;
            true
        } else {
            false
        }
    }

    pub(super) fn pending_request(&self) -> Option<u64> {
        self.pending_request
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn recv_message_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<JobMessage, std::sync::mpsc::RecvTimeoutError> {
        self.message_rx.recv_timeout(timeout)
    }
}
