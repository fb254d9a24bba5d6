// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Identity Props Common Library
//!
//! This crate provides the types, error definitions, configuration and
//! diagnostics shared by the identity props crates.
//!
//! # Features
//!
//! - `std`: Enable standard library support (`std::error::Error` impls)
//! - `defmt`: Enable defmt formatting for errors and log levels
//! - `debug-trace`: Turn on per-decision tracing in [`HookConfig::DEFAULT`]
//!
//! # Allocation
//!
//! No heap allocations are performed - all buffers use fixed-size arrays or
//! heapless collections.

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod types;
pub mod errors;
pub mod config;
pub mod log;
pub mod constants;
pub mod flag;

// Re-export commonly used items
pub use errors::{Error, Result};
pub use types::{AttributeKey, KeySet};
pub use config::HookConfig;
pub use flag::SensitivePackageFlag;
pub use log::{DiagnosticSink, LogBuffer, LogLevel, NullSink};
