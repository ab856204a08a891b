//! Controller bridging app state to the egui renderer.

use crate::config::{self, AppConfig};
use crate::egui_app::state::UiState;

mod analyze;
mod jobs;
mod theme;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    /// UI model consumed by the renderer.
    pub ui: UiState,
    /// Settings resolved from the config file and environment overrides.
    pub settings: AppConfig,
    jobs: jobs::ControllerJobs,
}

impl Default for EguiController {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiController {
    /// Create a controller with default settings; call
    /// [`load_configuration`](Self::load_configuration) before first use.
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            settings: AppConfig::default(),
            jobs: jobs::ControllerJobs::new(),
        }
    }

    /// Load persisted config and populate initial UI state.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let cfg = config::load_or_default()?;
        self.ui.theme.preference = cfg.theme;
        tracing::info!(
            "Configured for {} (input limit {} chars)",
            cfg.api_base_url,
            cfg.max_input_chars
        );
        self.settings = cfg;
        Ok(())
    }

    /// Number of characters currently in the input.
    pub fn input_char_count(&self) -> usize {
        self.ui.analyzer.input.chars().count()
    }

    /// True when the input exceeds the configured limit.
    pub fn input_over_limit(&self) -> bool {
        self.input_char_count() > self.settings.max_input_chars
    }
}
