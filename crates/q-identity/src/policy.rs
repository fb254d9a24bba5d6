// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Package policy table
//!
//! Static mapping from package names to the profile they receive and the
//! attributes they keep. All lists are compiled in; membership tests treat
//! them as sets, so a name listed twice means the same as once.

use q_common::constants::{
    PACKAGE_GMS, PACKAGE_GOOGLE_CAMERA, PACKAGE_SETTINGS_INTELLIGENCE, VENDOR_PACKAGE_PREFIX,
};
use q_common::{AttributeKey, Error, KeySet};

use crate::profile::{ProfileCatalog, ProfileKind};

/// Attributes a package keeps even though it is in scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreservationOverride {
    /// Exact package name
    pub package: &'static str,
    /// Keys left untouched for this package
    pub keys: KeySet,
}

/// Packages outside the vendor namespace that still receive a profile
pub const EXTRA_PACKAGES: &[&str] = &[
    "com.breel.wallpapers20",
    "com.google.android.apps.customization.pixel",
    "com.google.android.apps.fitness",
    "com.google.android.apps.recorder",
    "com.google.android.apps.subscriptions.red",
    "com.google.android.apps.tachyon",
    "com.google.android.apps.turboadapter",
    "com.google.android.apps.wallpaper.pixel",
    "com.google.android.as",
    "com.google.android.dialer",
    "com.google.android.deskclock",
    "com.google.android.apps.youtube.music",
    "com.google.android.apps.podcasts",
    "com.google.android.apps.nbu.files",
    "com.google.android.contacts",
    "com.google.android.apps.messaging",
    "com.google.android.inputmethod.latin",
    "com.google.android.gm",
    "com.google.android.gms.location.history",
    "com.android.chrome",
    "com.google.android.soundpicker",
    "com.google.pixel.dynamicwallpapers",
    "com.google.pixel.livewallpaper",
    "com.google.android.apps.safetyhub",
    "com.google.android.apps.turbo",
    "com.google.android.apps.wallpaper",
    "com.google.android.apps.googleassistant",
    "com.google.android.apps.maps",
    "com.google.android.gms",
    "com.google.android.apps.nexuslauncher",
];

/// In-scope packages that receive the older profile
pub const OLDER_PROFILE_PACKAGES: &[&str] = &[
    "com.google.android.tts",
    "com.google.android.googlequicksearchbox",
    "com.google.android.apps.recorder",
    "com.google.android.apps.photos",
];

/// Per-package preservation overrides
pub const PRESERVED_ATTRIBUTES: &[PreservationOverride] = &[
    PreservationOverride {
        package: PACKAGE_SETTINGS_INTELLIGENCE,
        keys: KeySet::only(AttributeKey::Fingerprint),
    },
    PreservationOverride {
        package: PACKAGE_GOOGLE_CAMERA,
        keys: KeySet::ALL,
    },
];

/// Packages whose fingerprint is forced back to the real build identifier
pub const REAL_FINGERPRINT_PACKAGES: &[&str] = &[PACKAGE_SETTINGS_INTELLIGENCE];

/// Compiled-in package policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyTable {
    /// Profiles to choose from
    pub catalog: ProfileCatalog,
    /// Namespace prefix that puts a package in scope
    pub vendor_prefix: &'static str,
    /// Extra in-scope packages
    pub included: &'static [&'static str],
    /// In-scope packages that receive the older profile
    pub older_profile: &'static [&'static str],
    /// Preservation overrides
    pub preserved: &'static [PreservationOverride],
    /// Package whose identification raises the sensitive-package flag
    pub sensitive_package: &'static str,
    /// Packages that end up with the real build identifier as fingerprint
    pub real_fingerprint: &'static [&'static str],
}

impl PolicyTable {
    /// Built-in policy
    pub const REFERENCE: Self = Self {
        catalog: ProfileCatalog::REFERENCE,
        vendor_prefix: VENDOR_PACKAGE_PREFIX,
        included: EXTRA_PACKAGES,
        older_profile: OLDER_PROFILE_PACKAGES,
        preserved: PRESERVED_ATTRIBUTES,
        sensitive_package: PACKAGE_GMS,
        real_fingerprint: REAL_FINGERPRINT_PACKAGES,
    };

    /// Package is under the vendor namespace
    #[must_use]
    pub fn in_vendor_namespace(&self, package: &str) -> bool {
        package.starts_with(self.vendor_prefix)
    }

    /// Package is on the explicit inclusion list
    #[must_use]
    pub fn is_explicitly_included(&self, package: &str) -> bool {
        self.included.contains(&package)
    }

    /// Package qualifies for substitution
    #[must_use]
    pub fn is_in_scope(&self, package: &str) -> bool {
        self.in_vendor_namespace(package) || self.is_explicitly_included(package)
    }

    /// Package is on the older-profile list
    #[must_use]
    pub fn prefers_older_profile(&self, package: &str) -> bool {
        self.older_profile.contains(&package)
    }

    /// Profile an in-scope package receives
    #[must_use]
    pub fn profile_kind_for(&self, package: &str) -> ProfileKind {
        if self.prefers_older_profile(package) {
            ProfileKind::Older
        } else {
            ProfileKind::Newer
        }
    }

    /// Keys preserved for exactly this package (empty if none registered)
    #[must_use]
    pub fn preserved_keys(&self, package: &str) -> KeySet {
        self.preserved
            .iter()
            .filter(|entry| entry.package == package)
            .fold(KeySet::EMPTY, |acc, entry| acc.union(entry.keys))
    }

    /// Package is the high-sensitivity package
    #[must_use]
    pub fn is_sensitive(&self, package: &str) -> bool {
        package == self.sensitive_package
    }

    /// Package must end with the real build identifier as fingerprint
    #[must_use]
    pub fn needs_real_fingerprint(&self, package: &str) -> bool {
        self.real_fingerprint.contains(&package)
    }

    /// Check the table for configuration mistakes
    ///
    /// Run once at startup; a table that fails validation still resolves
    /// deterministically, but some entries will never take effect.
    pub fn validate(&self) -> Result<(), Error> {
        if self.vendor_prefix.is_empty() || self.sensitive_package.is_empty() {
            return Err(Error::InvalidParameter);
        }
        self.catalog.validate()?;

        let overrides = self.preserved.iter().map(|entry| entry.package);
        let unreachable = self
            .older_profile
            .iter()
            .copied()
            .chain(overrides)
            .any(|package| !self.is_in_scope(package));
        if unreachable {
            return Err(Error::UnreachableOverride);
        }
        Ok(())
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_is_valid() {
        assert_eq!(PolicyTable::REFERENCE.validate(), Ok(()));
    }

    #[test]
    fn test_namespace_predicate_is_prefix_match() {
        let table = PolicyTable::REFERENCE;
        assert!(table.in_vendor_namespace("com.google.android.youtube"));
        assert!(!table.in_vendor_namespace("com.googlex.app"));
        assert!(!table.in_vendor_namespace("org.com.google.app"));
    }

    #[test]
    fn test_inclusion_is_exact() {
        let table = PolicyTable::REFERENCE;
        assert!(table.is_explicitly_included("com.android.chrome"));
        assert!(!table.is_explicitly_included("com.android.chrome.beta"));
        assert!(!table.is_in_scope("com.android.chrome.beta"));
    }

    #[test]
    fn test_camera_preserves_everything() {
        let keys = PolicyTable::REFERENCE.preserved_keys(PACKAGE_GOOGLE_CAMERA);
        assert_eq!(keys, KeySet::ALL);
    }

    #[test]
    fn test_override_for_unreachable_package_is_rejected() {
        const OVERRIDES: &[PreservationOverride] = &[PreservationOverride {
            package: "org.example.app",
            keys: KeySet::ALL,
        }];
        let table = PolicyTable {
            preserved: OVERRIDES,
            ..PolicyTable::REFERENCE
        };
        assert_eq!(table.validate(), Err(Error::UnreachableOverride));
    }

    #[test]
    fn test_empty_prefix_is_rejected() {
        let table = PolicyTable {
            vendor_prefix: "",
            ..PolicyTable::REFERENCE
        };
        assert_eq!(table.validate(), Err(Error::InvalidParameter));
    }
}
