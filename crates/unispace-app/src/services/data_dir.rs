// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data and config locations.

use std::path::PathBuf;

const APP_DIR: &str = "unispace";
const CONFIG_FILE: &str = "config.json";

/// Directory for files the app writes (the clipboard fallback file).
///
/// Not created here; writers create it on demand.
pub fn data_dir() -> PathBuf {
    xdg_or_home("XDG_DATA_HOME", &[".local", "share"]).join(APP_DIR)
}

/// Default location of the JSON settings file.
pub fn config_path() -> PathBuf {
    xdg_or_home("XDG_CONFIG_HOME", &[".config"])
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

fn xdg_or_home(xdg_var: &str, home_suffix: &[&str]) -> PathBuf {
    if let Some(xdg) = std::env::var_os(xdg_var).filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg);
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return home_suffix.iter().fold(PathBuf::from(home), |p, s| p.join(s));
    }
    // Last resort
    std::env::temp_dir()
}
