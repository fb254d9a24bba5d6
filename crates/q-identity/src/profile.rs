// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Identity profile catalog
//!
//! An identity profile is the bundle of six build attributes presented to an
//! application in place of the real device's values. Profiles are compiled
//! in and live for the whole process.

use q_common::{AttributeKey, Error};

use crate::fingerprint::BuildFingerprint;

/// Immutable set of substituted identity attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityProfile {
    /// Human-readable profile name
    pub name: &'static str,
    /// Consumer-visible brand
    pub brand: &'static str,
    /// Hardware manufacturer
    pub manufacturer: &'static str,
    /// Device code name
    pub device: &'static str,
    /// Product code name
    pub product: &'static str,
    /// Marketing model name
    pub model: &'static str,
    /// Build fingerprint
    pub fingerprint: &'static str,
}

impl IdentityProfile {
    /// Value substituted for `key`
    #[must_use]
    pub const fn get(&self, key: AttributeKey) -> &'static str {
        match key {
            AttributeKey::Brand => self.brand,
            AttributeKey::Manufacturer => self.manufacturer,
            AttributeKey::Device => self.device,
            AttributeKey::Product => self.product,
            AttributeKey::Model => self.model,
            AttributeKey::Fingerprint => self.fingerprint,
        }
    }

    /// Iterate over `(key, value)` pairs in write order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &'static str)> {
        let profile = *self;
        AttributeKey::ALL
            .into_iter()
            .map(move |key| (key, profile.get(key)))
    }

    /// Check that every slot is populated and the fingerprint agrees with
    /// the brand, product and device slots
    pub fn validate(&self) -> Result<(), Error> {
        if self.iter().any(|(_, value)| value.trim().is_empty()) {
            return Err(Error::IncompleteProfile);
        }

        let fp = BuildFingerprint::parse(self.fingerprint)?;
        if !fp.brand.eq_ignore_ascii_case(self.brand)
            || fp.product != self.product
            || fp.device != self.device
        {
            return Err(Error::FingerprintMismatch);
        }
        Ok(())
    }
}

/// Which catalog profile a policy selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// Current flagship profile (default)
    Newer,
    /// Previous flagship profile
    Older,
}

/// Pixel 6 Pro identity
pub const PIXEL_6_PRO: IdentityProfile = IdentityProfile {
    name: "Pixel 6 Pro",
    brand: "google",
    manufacturer: "Google",
    device: "raven",
    product: "raven",
    model: "Pixel 6 Pro",
    fingerprint: "google/raven/raven:12/SQ1D.211205.016.A1/7957957:user/release-keys",
};

/// Pixel 5 identity
pub const PIXEL_5: IdentityProfile = IdentityProfile {
    name: "Pixel 5",
    brand: "google",
    manufacturer: "Google",
    device: "redfin",
    product: "redfin",
    model: "Pixel 5",
    fingerprint: "google/redfin/redfin:12/SQ1A.211205.008/7888514:user/release-keys",
};

/// The pair of profiles a policy table chooses between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileCatalog {
    newer: IdentityProfile,
    older: IdentityProfile,
}

impl ProfileCatalog {
    /// Built-in catalog
    pub const REFERENCE: Self = Self::new(PIXEL_6_PRO, PIXEL_5);

    /// Create a catalog from two profiles
    #[must_use]
    pub const fn new(newer: IdentityProfile, older: IdentityProfile) -> Self {
        Self { newer, older }
    }

    /// Look up a profile
    #[must_use]
    pub const fn profile(&self, kind: ProfileKind) -> &IdentityProfile {
        match kind {
            ProfileKind::Newer => &self.newer,
            ProfileKind::Older => &self.older,
        }
    }

    /// Validate both profiles
    pub fn validate(&self) -> Result<(), Error> {
        self.newer.validate()?;
        self.older.validate()
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::REFERENCE
    }
}
