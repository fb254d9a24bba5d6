// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Policy resolution
//!
//! Turns a package name into the profile to apply and the keys to skip.
//! Resolution is total: unknown, empty or malformed names simply resolve to
//! no policy.

use q_common::{KeySet, SensitivePackageFlag};

use crate::policy::PolicyTable;
use crate::profile::{IdentityProfile, ProfileKind};

/// Outcome of resolving an in-scope package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPolicy<'t> {
    /// Which catalog profile was chosen
    pub kind: ProfileKind,
    /// Profile to apply
    pub profile: &'t IdentityProfile,
    /// Keys that must not be overwritten
    pub skip: KeySet,
}

impl ResolvedPolicy<'_> {
    /// Keys the applicator is expected to write
    #[must_use]
    pub const fn keys_to_write(&self) -> KeySet {
        KeySet::ALL.difference(self.skip)
    }
}

/// Resolves package names against a policy table
///
/// Holds a reference to the process-wide sensitive-package flag, which it
/// raises when the table's sensitive package is seen.
#[derive(Debug, Clone, Copy)]
pub struct PolicyResolver<'a> {
    table: &'a PolicyTable,
    flag: &'a SensitivePackageFlag,
}

impl<'a> PolicyResolver<'a> {
    /// Create a resolver
    #[must_use]
    pub const fn new(table: &'a PolicyTable, flag: &'a SensitivePackageFlag) -> Self {
        Self { table, flag }
    }

    /// Policy table in use
    #[must_use]
    pub const fn table(&self) -> &'a PolicyTable {
        self.table
    }

    /// Resolve the policy for a package
    ///
    /// Raises the sensitive-package flag on an exact match of the sensitive
    /// package, before the scope decision. `None` and empty names have no
    /// side effects.
    pub fn resolve(&self, package: Option<&str>) -> Option<ResolvedPolicy<'a>> {
        let package = package.filter(|name| !name.is_empty())?;

        if self.table.is_sensitive(package) {
            self.flag.raise();
        }

        if !self.table.is_in_scope(package) {
            return None;
        }

        let kind = self.table.profile_kind_for(package);
        Some(ResolvedPolicy {
            kind,
            profile: self.table.catalog.profile(kind),
            skip: self.table.preserved_keys(package),
        })
    }
}
