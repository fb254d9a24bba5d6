// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Package identification entry point
//!
//! The host's package-resolution code calls
//! [`PropsHook::notify_package_identified`] once it knows which application
//! owns the current process. The hook resolves the policy, applies it and
//! runs per-package carve-outs.
//!
//! Hosts construct the hook once at startup with [`PropsHook::try_new`],
//! which rejects tables whose profiles are incomplete or malformed.
//!
//! ```
//! use q_common::{HookConfig, LogBuffer, SensitivePackageFlag};
//! use q_hal::FixedAttributeStore;
//! use q_identity::{PolicyTable, PropsHook};
//!
//! static SENSITIVE: SensitivePackageFlag = SensitivePackageFlag::new();
//!
//! let mut store = FixedAttributeStore::seeded(&[("MODEL", "Real Phone")]).unwrap();
//! let hook = PropsHook::try_new(&PolicyTable::REFERENCE, &SENSITIVE, "1234", HookConfig::DEFAULT)
//!     .unwrap();
//! let mut log = LogBuffer::from_config(&hook.config());
//!
//! hook.notify_package_identified(&mut store, &mut log, Some("com.google.android.gms"));
//! assert_eq!(store.get("MODEL"), Some("Pixel 6 Pro"));
//! assert!(SENSITIVE.is_raised());
//! ```

use q_common::{log_debug, DiagnosticSink, Error, HookConfig, SensitivePackageFlag};
use q_hal::AttributeStore;

use crate::applicator::{Applicator, ApplyReport};
use crate::policy::PolicyTable;
use crate::resolver::{PolicyResolver, ResolvedPolicy};

const MODULE: &str = "props";

/// Result of handling one identification event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookOutcome<'t> {
    /// Resolved policy, if the package is in scope
    pub policy: Option<ResolvedPolicy<'t>>,
    /// Writes performed
    pub report: ApplyReport,
}

/// Inbound hook wiring resolver and applicator together
#[derive(Debug, Clone, Copy)]
pub struct PropsHook<'a> {
    resolver: PolicyResolver<'a>,
    applicator: Applicator<'a>,
    config: HookConfig,
}

impl<'a> PropsHook<'a> {
    /// Create a hook over a policy table and the process-wide flag
    ///
    /// The table is trusted as given. Tables built at runtime should go
    /// through [`Self::try_new`] instead.
    #[must_use]
    pub const fn new(
        table: &'a PolicyTable,
        flag: &'a SensitivePackageFlag,
        real_build_id: &'a str,
        config: HookConfig,
    ) -> Self {
        Self {
            resolver: PolicyResolver::new(table, flag),
            applicator: Applicator::new(table, real_build_id, config),
            config,
        }
    }

    /// Create a hook after validating the policy table
    ///
    /// # Errors
    /// Whatever [`PolicyTable::validate`] reports: an empty profile slot, a
    /// malformed or mismatched fingerprint, or an unreachable override.
    pub fn try_new(
        table: &'a PolicyTable,
        flag: &'a SensitivePackageFlag,
        real_build_id: &'a str,
        config: HookConfig,
    ) -> Result<Self, Error> {
        table.validate()?;
        Ok(Self::new(table, flag, real_build_id, config))
    }

    /// Diagnostics configuration
    #[must_use]
    pub const fn config(&self) -> HookConfig {
        self.config
    }

    /// Resolver used by this hook
    #[must_use]
    pub const fn resolver(&self) -> &PolicyResolver<'a> {
        &self.resolver
    }

    /// Handle a package identification event
    pub fn notify_package_identified<S, L>(
        &self,
        store: &mut S,
        sink: &mut L,
        package: Option<&str>,
    ) -> HookOutcome<'a>
    where
        S: AttributeStore + ?Sized,
        L: DiagnosticSink + ?Sized,
    {
        let policy = self.resolver.resolve(package);
        let mut report = ApplyReport::default();

        let Some(package) = package else {
            return HookOutcome { policy, report };
        };

        if let Some(resolved) = &policy {
            if self.config.trace_decisions {
                log_debug!(sink, MODULE, "defining props for {} ({})", package, resolved.profile.name);
            }
            report = self.applicator.apply(store, sink, resolved.profile, resolved.skip);
        }

        self.applicator.apply_carve_outs(store, sink, package, &mut report);

        HookOutcome { policy, report }
    }
}
