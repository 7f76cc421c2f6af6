// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fallback clipboard paths.
//
// The caller does not care which path delivered the text, only that one did.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use unispace_core::error::Result;

use crate::traits::NativeClipboard;

/// Try `primary`; if it fails, log and try `fallback`.
pub struct FallbackClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: NativeClipboard, F: NativeClipboard> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: NativeClipboard, F: NativeClipboard> NativeClipboard for FallbackClipboard<P, F> {
    fn write_text(&self, text: &str) -> Result<()> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "primary clipboard failed, using fallback");
                self.fallback.write_text(text)
            }
        }
    }
}

/// Writes the copied text to a file, for sessions without a clipboard.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NativeClipboard for FileClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "text written to clipboard file");
        Ok(())
    }
}
