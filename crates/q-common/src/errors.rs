// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Error types for the identity props core
//!
//! This module defines the unified error type shared by the identity and
//! attestation crates. Errors are `Copy`, carry no heap data and never leak
//! more than a code and a short description.

use core::fmt;

/// Result type alias for props core operations
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type
///
/// Policy lookups never fail; these variants cover malformed compiled-in
/// data, host store rejections and the deliberate attestation refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    // =========================================================================
    // Identity Errors (0x02xx)
    // =========================================================================
    /// Profile is missing one of its attribute values
    IncompleteProfile,
    /// Fingerprint does not follow the build fingerprint layout
    InvalidFingerprint,
    /// Fingerprint fields disagree with the profile's own slots
    FingerprintMismatch,
    /// Preservation override names a package that is never in scope
    UnreachableOverride,

    // =========================================================================
    // Attribute Store Errors (0x03xx)
    // =========================================================================
    /// Host store has no attribute with the given name
    UnknownAttribute,
    /// Host store refused the write
    AttributeAccessDenied,
    /// Attribute value exceeds the store's capacity
    AttributeValueTooLong,
    /// Host store cannot hold more attributes
    StorageFull,

    // =========================================================================
    // Attestation Errors (0x07xx)
    // =========================================================================
    /// Operation not supported
    ///
    /// Returned to attestation callers that are refused. Intentionally
    /// identical to a generic unsupported-operation fault.
    UnsupportedOperation,

    // =========================================================================
    // General Errors (0xFFxx)
    // =========================================================================
    /// Invalid parameter provided
    InvalidParameter,
}

impl Error {
    /// Get the error code for this error
    ///
    /// Error codes are organized by category:
    /// - 0x02xx: Identity errors
    /// - 0x03xx: Attribute store errors
    /// - 0x07xx: Attestation errors
    /// - 0xFFxx: General errors
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::IncompleteProfile => 0x0201,
            Self::InvalidFingerprint => 0x0202,
            Self::FingerprintMismatch => 0x0203,
            Self::UnreachableOverride => 0x0204,

            Self::UnknownAttribute => 0x0301,
            Self::AttributeAccessDenied => 0x0302,
            Self::AttributeValueTooLong => 0x0303,
            Self::StorageFull => 0x0304,

            Self::UnsupportedOperation => 0x0701,

            Self::InvalidParameter => 0xFF02,
        }
    }

    /// Check if this error comes from the host attribute store
    #[must_use]
    pub const fn is_store_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownAttribute
                | Self::AttributeAccessDenied
                | Self::AttributeValueTooLong
                | Self::StorageFull
        )
    }

    /// Get a short description of the error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::IncompleteProfile => "incomplete identity profile",
            Self::InvalidFingerprint => "malformed build fingerprint",
            Self::FingerprintMismatch => "fingerprint does not match profile",
            Self::UnreachableOverride => "override for out-of-scope package",
            Self::UnknownAttribute => "unknown attribute",
            Self::AttributeAccessDenied => "attribute access denied",
            Self::AttributeValueTooLong => "attribute value too long",
            Self::StorageFull => "attribute store full",
            Self::UnsupportedOperation => "operation not supported",
            Self::InvalidParameter => "invalid parameter",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:04X}] {}", self.code(), self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "[0x{:04X}] {}", self.code(), self.description());
    }
}
