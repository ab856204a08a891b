//! Shared state types for the egui UI.

use crate::config::ThemeSetting;
use crate::predict::PredictionResponse;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub analyzer: AnalyzerUiState,
    pub theme: ThemeUiState,
}

/// Lifecycle of the current prediction attempt.
///
/// Result and error are mutually exclusive by construction: starting a new
/// request replaces whichever was present with `Loading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalysisPhase {
    /// Nothing requested yet, or state was cleared.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request resolved with a prediction.
    Success(PredictionResponse),
    /// The last request failed; the message is rendered verbatim.
    Failure(String),
}

impl AnalysisPhase {
    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The stored prediction, if the last request succeeded.
    pub fn result(&self) -> Option<&PredictionResponse> {
        match self {
            Self::Success(response) => Some(response),
            _ => None,
        }
    }

    /// The stored error message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// UI state for the analyzer form.
#[derive(Clone, Debug, Default)]
pub struct AnalyzerUiState {
    /// Text under edit.
    pub input: String,
    /// Current request lifecycle.
    pub phase: AnalysisPhase,
}

/// UI state for the theme toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeUiState {
    /// Persisted preference; `System` defers to the OS scheme.
    pub preference: ThemeSetting,
}
