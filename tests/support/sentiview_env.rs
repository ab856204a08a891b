use std::{
    path::Path,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Scoped environment mutation for config-related tests.
///
/// All guards share one lock so env-dependent tests serialize instead of
/// racing on process-global state.
pub struct SentiviewEnvGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl SentiviewEnvGuard {
    pub fn set_vars(vars: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let mut saved = Vec::new();
        for (key, value) in vars {
            saved.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                std::env::set_var(key, value);
            }
        }
        Self { saved, _lock: lock }
    }

    pub fn set_config_home(path: &Path) -> Self {
        let home = path.to_string_lossy();
        Self::set_vars(&[("SENTIVIEW_CONFIG_HOME", home.as_ref())])
    }
}

impl Drop for SentiviewEnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..) {
            match previous {
                // SAFETY: tests run under a global lock to prevent concurrent env mutations.
                Some(value) => unsafe {
                    std::env::set_var(&key, value);
                },
                None => unsafe {
                    std::env::remove_var(&key);
                },
            }
        }
    }
}
