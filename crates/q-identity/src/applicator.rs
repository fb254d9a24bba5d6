// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Attribute application
//!
//! Writes a resolved profile into the host attribute store. Every key is
//! written independently: a rejected write is reported and skipped, and the
//! remaining keys are still attempted. Partial application is an accepted
//! outcome; nothing is rolled back.

use q_common::{log_debug, log_error, AttributeKey, DiagnosticSink, HookConfig, KeySet};
use q_hal::AttributeStore;

use crate::policy::PolicyTable;
use crate::profile::IdentityProfile;

const MODULE: &str = "applicator";

/// What an application pass did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyReport {
    /// Keys overwritten with the profile value
    pub written: KeySet,
    /// Keys left untouched because they are preserved
    pub skipped: KeySet,
    /// Keys whose write the store rejected
    pub failed: KeySet,
    /// Fingerprint was reset to the real build identifier
    pub real_fingerprint_restored: bool,
}

impl ApplyReport {
    /// Check whether every attempted write succeeded
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Check whether the store was touched at all
    #[must_use]
    pub const fn touched_store(&self) -> bool {
        !self.written.is_empty() || self.real_fingerprint_restored
    }
}

/// Applies profiles to an attribute store
#[derive(Debug, Clone, Copy)]
pub struct Applicator<'a> {
    table: &'a PolicyTable,
    real_build_id: &'a str,
    config: HookConfig,
}

impl<'a> Applicator<'a> {
    /// Create an applicator
    ///
    /// `real_build_id` is the device's unmodified build identifier, captured
    /// by the host before any substitution takes place.
    #[must_use]
    pub const fn new(table: &'a PolicyTable, real_build_id: &'a str, config: HookConfig) -> Self {
        Self {
            table,
            real_build_id,
            config,
        }
    }

    /// Write every profile key not in `skip`
    pub fn apply<S, L>(
        &self,
        store: &mut S,
        sink: &mut L,
        profile: &IdentityProfile,
        skip: KeySet,
    ) -> ApplyReport
    where
        S: AttributeStore + ?Sized,
        L: DiagnosticSink + ?Sized,
    {
        let mut report = ApplyReport::default();

        for (key, value) in profile.iter() {
            if skip.contains(key) {
                if self.config.trace_decisions {
                    log_debug!(sink, MODULE, "keeping {} ({})", key, profile.name);
                }
                report.skipped.insert(key);
                continue;
            }

            if self.write(store, sink, key, value) {
                report.written.insert(key);
            } else {
                report.failed.insert(key);
            }
        }

        report
    }

    /// Apply per-package corrections after the substitution pass
    ///
    /// Packages registered for the real fingerprint get the unmodified build
    /// identifier written into `FINGERPRINT`, whether or not a profile was
    /// applied.
    pub fn apply_carve_outs<S, L>(
        &self,
        store: &mut S,
        sink: &mut L,
        package: &str,
        report: &mut ApplyReport,
    ) where
        S: AttributeStore + ?Sized,
        L: DiagnosticSink + ?Sized,
    {
        if !self.table.needs_real_fingerprint(package) {
            return;
        }

        if self.write(store, sink, AttributeKey::Fingerprint, self.real_build_id) {
            report.real_fingerprint_restored = true;
        } else {
            report.failed.insert(AttributeKey::Fingerprint);
        }
    }

    fn write<S, L>(&self, store: &mut S, sink: &mut L, key: AttributeKey, value: &str) -> bool
    where
        S: AttributeStore + ?Sized,
        L: DiagnosticSink + ?Sized,
    {
        if self.config.trace_decisions {
            log_debug!(sink, MODULE, "defining {} = {}", key, value);
        }

        match store.set_attribute(key.field_name(), value) {
            Ok(()) => true,
            Err(e) => {
                log_error!(sink, MODULE, "failed to set {}: {}", key, e);
                false
            }
        }
    }
}
