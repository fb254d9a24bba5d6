// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Host Abstraction Layer for the identity props core
//!
//! This crate defines the narrow capabilities the props core needs from the
//! operating system it runs inside:
//!
//! - **Attribute store**: named writes into the process-global build
//!   attributes ([`AttributeStore`])
//! - **Call context**: the names of the active call frames
//!   ([`CallContextProvider`])
//!
//! # Architecture
//!
//! 1. **Traits**: Host-agnostic interfaces (`traits` module)
//! 2. **Memory**: Fixed-capacity implementations used by hosts that stage
//!    attributes themselves, and by tests (`memory` module)

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod traits;
pub mod error;
pub mod memory;

// Re-export main traits
pub use traits::*;
pub use error::{HalError, HalResult};
pub use memory::{CapturedCallContext, FixedAttributeStore};
