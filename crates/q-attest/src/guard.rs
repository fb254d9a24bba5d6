// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Attestation entry guard
//!
//! The host calls [`AttestationGuard::guard_attestation_entry`] at the start
//! of the certificate-chain operation. An `Err` means the host must fail the
//! operation with the "operation not supported" outcome.
//!
//! # Decision
//!
//! | flag raised | marker on context | result                          |
//! |-------------|-------------------|---------------------------------|
//! | no          | (not consulted)   | `Ok(())`                        |
//! | yes         | no                | `Ok(())`                        |
//! | yes         | yes               | `Err(Error::UnsupportedOperation)` |
//! | yes         | possibly lost     | `Err(Error::UnsupportedOperation)` |
//!
//! "Possibly lost" is a context that dropped frames during capture and
//! cannot vouch for the marker (see [`CallContextProvider::may_miss`]).

use q_common::constants::VERIFIER_FRAME_MARKER;
use q_common::{log_warn, DiagnosticSink, Error, Result, SensitivePackageFlag};
use q_hal::CallContextProvider;

const MODULE: &str = "attest";

/// Check whether any frame in `context` names the verifier
///
/// Case-sensitive substring match on each frame name.
pub fn frames_contain_marker<C>(context: &C, marker: &str) -> bool
where
    C: CallContextProvider + ?Sized,
{
    !marker.is_empty() && context.any_frame_contains(marker)
}

/// Guards the attestation certificate-chain entry point
///
/// Holds no state of its own. Each call reads the flag and walks the
/// current context afresh.
#[derive(Debug, Clone, Copy)]
pub struct AttestationGuard<'a, C> {
    flag: &'a SensitivePackageFlag,
    context: C,
    marker: &'static str,
}

impl<'a, C: CallContextProvider> AttestationGuard<'a, C> {
    /// Create a guard using the default verifier marker
    #[must_use]
    pub const fn new(flag: &'a SensitivePackageFlag, context: C) -> Self {
        Self::with_marker(flag, context, VERIFIER_FRAME_MARKER)
    }

    /// Create a guard matching a custom verifier marker
    #[must_use]
    pub const fn with_marker(flag: &'a SensitivePackageFlag, context: C, marker: &'static str) -> Self {
        Self {
            flag,
            context,
            marker,
        }
    }

    /// Marker matched against frame names
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        self.marker
    }

    /// Decide whether the attestation operation may proceed
    ///
    /// # Errors
    /// `Error::UnsupportedOperation` when the sensitive package was seen and
    /// the verifier is on the current call context, or may have been on a
    /// part of it the context lost.
    pub fn guard_attestation_entry(&self) -> Result<()> {
        self.check(&self.context)
    }

    /// Same decision as [`Self::guard_attestation_entry`], recording refusals
    ///
    /// # Errors
    /// See [`Self::guard_attestation_entry`].
    pub fn guard_attestation_entry_logged<L>(&self, sink: &mut L) -> Result<()>
    where
        L: DiagnosticSink + ?Sized,
    {
        let result = self.guard_attestation_entry();
        if let Err(e) = result {
            log_warn!(sink, MODULE, "refusing certificate chain for {}: {}", self.marker, e);
        }
        result
    }

    /// Evaluate the decision against an explicitly supplied context
    ///
    /// # Errors
    /// See [`Self::guard_attestation_entry`].
    pub fn check<P>(&self, context: &P) -> Result<()>
    where
        P: CallContextProvider + ?Sized,
    {
        if !self.flag.is_raised() || self.marker.is_empty() {
            return Ok(());
        }

        if frames_contain_marker(context, self.marker) || context.may_miss(self.marker) {
            Err(Error::UnsupportedOperation)
        } else {
            Ok(())
        }
    }
}
