// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Hook configuration
//!
//! All configuration is compile-time. Policy data itself is compiled in and
//! lives with the policy table; this only controls diagnostics.

use crate::log::LogLevel;

/// Diagnostics configuration for the props hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookConfig {
    /// Emit per-decision debug records to the diagnostic sink
    pub trace_decisions: bool,
    /// Minimum level recorded by log buffers created from this config
    pub min_log_level: LogLevel,
}

impl HookConfig {
    /// Default configuration
    ///
    /// Tracing follows the `debug-trace` build feature.
    pub const DEFAULT: Self = Self {
        trace_decisions: cfg!(feature = "debug-trace"),
        min_log_level: if cfg!(feature = "debug-trace") {
            LogLevel::Trace
        } else {
            LogLevel::Warn
        },
    };

    /// Configuration with decision tracing forced on
    pub const TRACING: Self = Self {
        trace_decisions: true,
        min_log_level: LogLevel::Trace,
    };
}

impl Default for HookConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
