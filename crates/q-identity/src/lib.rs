// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Q-Identity props policy
//!
//! This crate decides which identity profile an application sees and writes
//! it into the host's build attributes:
//!
//! - **Profiles**: compiled-in identity bundles
//! - **Fingerprint**: build fingerprint parsing and validation
//! - **Policy**: package scope, profile choice and preservation overrides
//! - **Resolver**: package name to policy, raising the sensitive-package flag
//! - **Applicator**: per-key writes into the host store
//! - **Hook**: the inbound package-identification entry point
//!
//! # Architecture
//!
//! ```text
//! package identified
//!        │
//!        ▼
//! ┌──────────────┐   raise   ┌──────────────────────┐
//! │   Resolver   │──────────▶│ SensitivePackageFlag │
//! └──────────────┘           └──────────────────────┘
//!        │ (profile, skip)
//!        ▼
//! ┌──────────────┐  set_attribute  ┌────────────────┐
//! │  Applicator  │────────────────▶│ AttributeStore │
//! └──────────────┘                 └────────────────┘
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod profile;
pub mod fingerprint;
pub mod policy;
pub mod resolver;
pub mod applicator;
pub mod hook;

// Re-exports
pub use profile::{IdentityProfile, ProfileCatalog, ProfileKind};
pub use fingerprint::BuildFingerprint;
pub use policy::{PolicyTable, PreservationOverride};
pub use resolver::{PolicyResolver, ResolvedPolicy};
pub use applicator::{Applicator, ApplyReport};
pub use hook::{HookOutcome, PropsHook};
