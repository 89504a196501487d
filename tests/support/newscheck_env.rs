//! Process environment isolation for tests that read `NEWSCHECK_*` variables.

use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

use newscheck::config::ENDPOINT_ENV;

const CONFIG_HOME_ENV: &str = "NEWSCHECK_CONFIG_HOME";
const MANAGED_VARS: [&str; 2] = [CONFIG_HOME_ENV, ENDPOINT_ENV];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the env lock, points the app directory at `config_home` and clears
/// the endpoint override. Every managed variable is restored on drop.
pub struct NewscheckEnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl NewscheckEnvGuard {
    pub fn set_config_home(config_home: &Path) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        let saved = MANAGED_VARS
            .iter()
            .map(|name| (*name, std::env::var(name).ok()))
            .collect();
        let guard = Self { saved, _lock: lock };
        guard.write(CONFIG_HOME_ENV, Some(config_home.as_os_str().to_string_lossy().as_ref()));
        guard.write(ENDPOINT_ENV, None);
        guard
    }

    /// Export `NEWSCHECK_ENDPOINT` for the lifetime of the guard.
    pub fn with_endpoint(self, endpoint: &str) -> Self {
        self.write(ENDPOINT_ENV, Some(endpoint));
        self
    }

    fn write(&self, name: &str, value: Option<&str>) {
        // SAFETY: every writer holds ENV_LOCK, so no other test thread touches the env.
        unsafe {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

impl Drop for NewscheckEnvGuard {
    fn drop(&mut self) {
        let saved = std::mem::take(&mut self.saved);
        for (name, value) in saved {
            self.write(name, value.as_deref());
        }
    }
}
