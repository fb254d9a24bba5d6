// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Q-ATTEST attestation guard
//!
//! Refuses the certificate-chain path of the integrity-attestation subsystem
//! when the sensitive package is running and the attestation verifier is on
//! the call context. Everything else passes through untouched.
//!
//! - **Guard**: stateless refusal decision, evaluated per call
//!
//! The decision reads two inputs only: the process-wide
//! [`SensitivePackageFlag`](q_common::SensitivePackageFlag) raised by the
//! props hook, and the host's [`CallContextProvider`](q_hal::CallContextProvider).

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod guard;

pub use guard::{frames_contain_marker, AttestationGuard};
