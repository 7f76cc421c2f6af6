// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for headless builds (no `clipboard` feature) and tests.
//
// Every trait method returns `PlatformUnavailable`.

use unispace_core::error::{Result, UnispaceError};

use crate::traits::*;

/// No-op bridge returned when no clipboard backend is compiled in.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Headless (stub)"
    }
}

impl NativeClipboard for StubBridge {
    fn write_text(&self, _text: &str) -> Result<()> {
        tracing::warn!("NativeClipboard::write_text called on stub bridge");
        Err(UnispaceError::PlatformUnavailable)
    }
}
