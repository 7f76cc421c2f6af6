// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge — system clipboard through `arboard`.
//
// The `arboard::Clipboard` handle is created on first use and kept alive:
// on X11 the contents are owned by the process and vanish with the handle.

use std::sync::Mutex;

use arboard::Clipboard;
use unispace_core::error::{Result, UnispaceError};

use crate::traits::{NativeClipboard, PlatformBridge};

pub struct DesktopBridge {
    clipboard: Mutex<Option<Clipboard>>,
}

impl DesktopBridge {
    pub fn new() -> Self {
        Self {
            clipboard: Mutex::new(None),
        }
    }
}

impl Default for DesktopBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop (arboard)"
    }
}

impl NativeClipboard for DesktopBridge {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|_| UnispaceError::Clipboard("clipboard lock poisoned".into()))?;

        let clipboard = match guard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|err| UnispaceError::Clipboard(err.to_string()))?,
        };
        let clipboard = guard.insert(clipboard);

        clipboard
            .set_text(text.to_owned())
            .map_err(|err| UnispaceError::Clipboard(err.to_string()))?;
        tracing::debug!(chars = text.chars().count(), "text written to system clipboard");
        Ok(())
    }
}
