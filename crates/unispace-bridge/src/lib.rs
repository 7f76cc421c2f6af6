// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unispace — Platform bridge abstractions.
//
// Defines the clipboard trait the application copies results through, the
// desktop implementation backed by `arboard`, a stub for builds without a
// clipboard, and a fallback combinator so a copy succeeds if either path does.

pub mod fallback;
pub mod stub;
pub mod traits;

#[cfg(feature = "clipboard")]
pub mod desktop;

/// Returns the bridge implementation for this build.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(desktop::DesktopBridge::new())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(stub::StubBridge)
    }
}
