use super::EguiController;
use crate::config::{self, ThemeSetting};

/// Preference that an explicit toggle lands on, given the effective state.
///
/// Flipping always selects `Light` or `Dark`; `System` is never re-selected
/// once the user has toggled.
fn flipped(effective_dark: bool) -> ThemeSetting {
    if effective_dark {
        ThemeSetting::Light
    } else {
        ThemeSetting::Dark
    }
}

impl EguiController {
    /// Resolve the effective dark flag for the current preference.
    ///
    /// `system_dark` is the OS-reported scheme, if known; an unknown scheme
    /// falls back to dark, matching the default visuals.
    pub fn effective_dark(&self, system_dark: Option<bool>) -> bool {
        match self.ui.theme.preference {
            ThemeSetting::Dark => true,
            ThemeSetting::Light => false,
            ThemeSetting::System => system_dark.unwrap_or(true),
        }
    }

    /// Flip between light and dark and persist the new preference.
    pub fn toggle_theme(&mut self, system_dark: Option<bool>) {
        let next = flipped(self.effective_dark(system_dark));
        self.ui.theme.preference = next;
        self.settings.theme = next;
        if let Err(err) = config::update_theme(next) {
            tracing::warn!("Failed to persist theme preference: {err}");
        }
    }
}
