// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use unispace_core::error::Result;

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge: NativeClipboard {
    /// Human-readable platform name (e.g. "Desktop (arboard)").
    fn platform_name(&self) -> &str;
}

/// Put text on the system clipboard.
pub trait NativeClipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<()>;
}

impl<T: NativeClipboard + ?Sized> NativeClipboard for Box<T> {
    fn write_text(&self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}
