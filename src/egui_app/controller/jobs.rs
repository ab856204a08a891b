use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::predict::{self, PredictError, PredictionResponse};

pub(crate) enum JobMessage {
    PredictFinished(PredictResult),
}

#[derive(Debug)]
pub(crate) struct PredictResult {
    pub(crate) result: Result<PredictionResponse, PredictError>,
}

/// Owns the background job channel and the single-request latch.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    predict_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            predict_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn predict_in_progress(&self) -> bool {
        self.predict_in_progress
    }

    /// Start one prediction request on a worker thread.
    ///
    /// Refuses while a request is already in flight; the UI additionally
    /// disables the trigger, so this latch is the second line of defense
    /// against double submission.
    pub(super) fn begin_predict(&mut self, base_url: String, text: String) {
        if self.predict_in_progress {
            return;
        }
        self.predict_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = predict::predict(&base_url, &text);
            let _ = tx.send(JobMessage::PredictFinished(PredictResult { result }));
        });
    }

    pub(super) fn clear_predict(&mut self) {
        self.predict_in_progress = false;
    }
}
