// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Common types for the identity props core
//!
//! Defines the closed set of identity attribute keys and a compact key set
//! used for preservation overrides and apply reports.

use core::fmt;

/// Identity attribute substituted by a profile
///
/// The discriminant is the bit position inside a [`KeySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AttributeKey {
    /// Consumer-visible brand
    Brand = 0,
    /// Hardware manufacturer
    Manufacturer = 1,
    /// Device code name
    Device = 2,
    /// Product code name
    Product = 3,
    /// Marketing model name
    Model = 4,
    /// Composite build fingerprint
    Fingerprint = 5,
}

impl AttributeKey {
    /// Number of attribute keys
    pub const COUNT: usize = 6;

    /// All keys, in the order they are written to the host store
    pub const ALL: [Self; Self::COUNT] = [
        Self::Brand,
        Self::Manufacturer,
        Self::Device,
        Self::Product,
        Self::Model,
        Self::Fingerprint,
    ];

    /// Name of the host build field backing this attribute
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Brand => "BRAND",
            Self::Manufacturer => "MANUFACTURER",
            Self::Device => "DEVICE",
            Self::Product => "PRODUCT",
            Self::Model => "MODEL",
            Self::Fingerprint => "FINGERPRINT",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Set of attribute keys
///
/// Inserting a key twice has no effect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeySet(u8);

impl KeySet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every attribute key
    pub const ALL: Self = Self::from_keys(&AttributeKey::ALL);

    /// Build a set from a slice of keys
    #[must_use]
    pub const fn from_keys(keys: &[AttributeKey]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < keys.len() {
            bits |= keys[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Set containing a single key
    #[must_use]
    pub const fn only(key: AttributeKey) -> Self {
        Self(key.bit())
    }

    /// Add a key
    pub fn insert(&mut self, key: AttributeKey) {
        self.0 |= key.bit();
    }

    /// Check membership
    #[must_use]
    pub const fn contains(&self, key: AttributeKey) -> bool {
        self.0 & key.bit() != 0
    }

    /// Number of keys in the set
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Union of two sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Keys in `self` that are not in `other`
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate over members in write order
    pub fn iter(&self) -> impl Iterator<Item = AttributeKey> {
        let set = *self;
        AttributeKey::ALL.into_iter().filter(move |key| set.contains(*key))
    }
}

impl FromIterator<AttributeKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = AttributeKey>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
