use std::sync::mpsc::TryRecvError;

use super::jobs::JobMessage;
use super::EguiController;
use crate::egui_app::state::AnalysisPhase;

/// Validation message for empty or whitespace-only input.
const EMPTY_INPUT_MESSAGE: &str = "Please paste some text.";

fn over_limit_message(count: usize, limit: usize) -> String {
    format!("Input is too long: {count} characters (limit {limit}).")
}

impl EguiController {
    /// Validate the current input and start a prediction request.
    ///
    /// Validation failures never reach the network. While a request is in
    /// flight the call is a no-op.
    pub fn analyze(&mut self) {
        // The latch also covers a request left in flight by a mid-flight
        // clear(); a new submission must wait for it to drain.
        if self.ui.analyzer.phase.is_loading() || self.jobs.predict_in_progress() {
            return;
        }
        if self.ui.analyzer.input.trim().is_empty() {
            self.ui.analyzer.phase = AnalysisPhase::Failure(EMPTY_INPUT_MESSAGE.to_string());
            return;
        }
        let count = self.input_char_count();
        let limit = self.settings.max_input_chars;
        if count > limit {
            self.ui.analyzer.phase = AnalysisPhase::Failure(over_limit_message(count, limit));
            return;
        }
        let trimmed = self.ui.analyzer.input.trim().to_string();
        self.ui.analyzer.phase = AnalysisPhase::Loading;
        tracing::info!("Submitting {count} chars for prediction");
        self.jobs
            .begin_predict(self.settings.api_base_url.clone(), trimmed);
    }

    /// Reset text, error, and result in one update.
    pub fn clear(&mut self) {
        self.ui.analyzer.input.clear();
        self.ui.analyzer.phase = AnalysisPhase::Idle;
    }

    /// Drop a stale result or error once the user starts editing again.
    pub fn note_input_edited(&mut self) {
        if !self.ui.analyzer.phase.is_loading() {
            self.ui.analyzer.phase = AnalysisPhase::Idle;
        }
    }

    /// Drain background job messages into UI state.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::PredictFinished(message) => {
                    self.jobs.clear_predict();
                    // A clear() issued mid-flight wins over the late response.
                    if !self.ui.analyzer.phase.is_loading() {
                        continue;
                    }
                    match message.result {
                        Ok(response) => {
                            tracing::info!(
                                "Prediction {} answered by {} {} in {} ms",
                                response.request_id,
                                response.model_backend,
                                response.model_version,
                                response.latency_ms
                            );
                            self.ui.analyzer.phase = AnalysisPhase::Success(response);
                        }
                        Err(err) => {
                            tracing::warn!("Prediction failed: {err}");
                            self.ui.analyzer.phase =
                                AnalysisPhase::Failure(err.display_message());
                        }
                    }
                }
            }
        }
    }
}
