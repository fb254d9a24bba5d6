// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Sensitive-package flag
//!
//! Process-wide, write-once-true marker recording that the package owning the
//! attestation subsystem has been identified in this process. Hosts keep one
//! instance in a `static` for the process lifetime:
//!
//! ```
//! use q_common::SensitivePackageFlag;
//!
//! static SENSITIVE: SensitivePackageFlag = SensitivePackageFlag::new();
//!
//! assert!(!SENSITIVE.is_raised());
//! SENSITIVE.raise();
//! assert!(SENSITIVE.is_raised());
//! ```
//!
//! There is no way to lower the flag once raised.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

/// Monotonic false→true flag
pub struct SensitivePackageFlag {
    raised: AtomicBool,
}

impl SensitivePackageFlag {
    /// Create a lowered flag
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raise the flag
    ///
    /// Returns `true` if this call performed the transition.
    pub fn raise(&self) -> bool {
        !self.raised.swap(true, Ordering::Release)
    }

    /// Check whether the flag has been raised
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl Default for SensitivePackageFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SensitivePackageFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensitivePackageFlag")
            .field("raised", &self.is_raised())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_lowered() {
        assert!(!SensitivePackageFlag::new().is_raised());
    }

    #[test]
    fn test_only_first_raise_transitions() {
        let flag = SensitivePackageFlag::new();
        assert!(flag.raise());
        assert!(!flag.raise());
        assert!(flag.is_raised());
    }
}
