//! Theme preference and configuration persistence tests.

mod support;

use support::sentiview_env::SentiviewEnvGuard;

use sentiview::config::{self, AppConfig, ThemeSetting};
use sentiview::egui_app::controller::EguiController;
use tempfile::TempDir;

fn fresh_controller() -> (SentiviewEnvGuard, TempDir, EguiController) {
    let temp = tempfile::tempdir().expect("create tempdir");
    let guard = SentiviewEnvGuard::set_config_home(temp.path());
    let mut controller = EguiController::new();
    controller.load_configuration().expect("load configuration");
    (guard, temp, controller)
}

#[test]
fn explicit_toggle_never_leaves_system() {
    let (_guard, _temp, mut controller) = fresh_controller();
    assert_eq!(controller.ui.theme.preference, ThemeSetting::System);

    // Effective dark (OS reports dark) flips to explicit light.
    controller.toggle_theme(Some(true));
    assert_eq!(controller.ui.theme.preference, ThemeSetting::Light);
    assert!(!controller.effective_dark(Some(true)));

    // And back to explicit dark; the OS scheme no longer matters.
    controller.toggle_theme(Some(true));
    assert_eq!(controller.ui.theme.preference, ThemeSetting::Dark);
    assert!(controller.effective_dark(Some(false)));
}

#[test]
fn toggled_preference_survives_reload() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _guard = SentiviewEnvGuard::set_config_home(temp.path());

    let mut controller = EguiController::new();
    controller.load_configuration().expect("load configuration");
    controller.toggle_theme(Some(false));
    assert_eq!(controller.ui.theme.preference, ThemeSetting::Dark);

    let mut reloaded = EguiController::new();
    reloaded.load_configuration().expect("reload configuration");
    assert_eq!(reloaded.ui.theme.preference, ThemeSetting::Dark);
}

#[test]
fn env_api_base_overrides_file_without_being_persisted() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let home = temp.path().to_string_lossy();
    let _guard = SentiviewEnvGuard::set_vars(&[
        ("SENTIVIEW_CONFIG_HOME", home.as_ref()),
        ("SENTIVIEW_API_BASE", "http://staging.internal:9000"),
    ]);

    let file_config = AppConfig {
        api_base_url: "http://file.internal:8000".to_string(),
        ..AppConfig::default()
    };
    config::save(&file_config).expect("seed config file");

    let mut controller = EguiController::new();
    controller.load_configuration().expect("load configuration");
    assert_eq!(
        controller.settings.api_base_url,
        "http://staging.internal:9000"
    );

    // Toggling the theme rewrites the file; the env override must not leak
    // into the stored base URL.
    controller.toggle_theme(Some(true));
    let path = config::config_path().expect("config path");
    let stored = std::fs::read_to_string(path).expect("read config file");
    assert!(stored.contains("http://file.internal:8000"));
    assert!(!stored.contains("staging.internal"));
    assert!(stored.contains("light"));
}

#[test]
fn max_input_chars_env_override_applies() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let home = temp.path().to_string_lossy();
    let _guard = SentiviewEnvGuard::set_vars(&[
        ("SENTIVIEW_CONFIG_HOME", home.as_ref()),
        ("SENTIVIEW_MAX_INPUT_CHARS", "42"),
    ]);

    let mut controller = EguiController::new();
    controller.load_configuration().expect("load configuration");
    assert_eq!(controller.settings.max_input_chars, 42);
}
