//! Shared test utilities for integration tests
//!
//! Serializes access to process-wide environment variables (XDG dirs and
//! `SLTABLE_*`) so config-loading tests can run in parallel with the rest.

use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const TRACKED: &[&str] = &["HOME", "XDG_CONFIG_HOME", "XDG_DATA_HOME"];

/// Environment variable state to restore after test
struct EnvState {
    saved: Vec<(String, Option<String>)>,
}

impl EnvState {
    fn capture(extra: &[&str]) -> Self {
        let saved = TRACKED
            .iter()
            .chain(extra.iter())
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();
        Self { saved }
    }

    fn restore(self) {
        for (key, value) in self.saved {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Run `f` with HOME, XDG_CONFIG_HOME and XDG_DATA_HOME pointed into `test_dir`.
///
/// Config home is `test_dir` itself, data home is `test_dir/data`, and HOME is
/// `test_dir/home`. `vars` are set for the duration of `f` as well. Everything
/// is restored afterwards.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let extra: Vec<&str> = vars.iter().map(|(k, _)| *k).collect();
    let env_state = EnvState::capture(&extra);

    let test_config_home = test_dir.path().to_path_buf();
    let test_data_home = test_dir.path().join("data");
    let test_home = test_dir.path().join("home");

    std::fs::create_dir_all(&test_data_home).unwrap();
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());
    std::env::set_var("XDG_DATA_HOME", test_data_home.to_str().unwrap());
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f();

    env_state.restore();

    result
}

/// Write `contents` to `<config_home>/sltable/config.toml` inside `test_dir`.
pub fn write_global_config(test_dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let dir = test_dir.path().join("sltable");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Write a JSON document of records into `test_dir` and return its path.
pub fn write_records(test_dir: &TempDir, name: &str, records: &serde_json::Value) -> std::path::PathBuf {
    let path = test_dir.path().join(name);
    std::fs::write(&path, serde_json::to_string_pretty(records).unwrap()).unwrap();
    path
}
