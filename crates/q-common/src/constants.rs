// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! System-wide constants for the identity props core
//!
//! Package names, markers and capacity limits shared across crates.

// =============================================================================
// Package Names
// =============================================================================

/// Vendor namespace prefix; any package under it is eligible for substitution
pub const VENDOR_PACKAGE_PREFIX: &str = "com.google.";

/// Package that owns the attestation subsystem
pub const PACKAGE_GMS: &str = "com.google.android.gms";

/// On-device settings indexing package
///
/// Keeps the real build identifier in its fingerprint slot.
pub const PACKAGE_SETTINGS_INTELLIGENCE: &str = "com.google.android.settings.intelligence";

/// Camera package that keeps every attribute unsubstituted
pub const PACKAGE_GOOGLE_CAMERA: &str = "com.google.android.GoogleCamera";

// =============================================================================
// Attestation Constants
// =============================================================================

/// Call-frame name fragment identifying the attestation verifier
pub const VERIFIER_FRAME_MARKER: &str = "DroidGuard";

/// Maximum frames kept by a captured call context
pub const MAX_CALL_FRAMES: usize = 64;

/// Maximum length of a single call-frame identifier
pub const MAX_FRAME_NAME_LEN: usize = 128;

// =============================================================================
// Attribute Store Constants
// =============================================================================

/// Maximum attribute field name length
pub const MAX_ATTRIBUTE_NAME_LEN: usize = 16;

/// Maximum attribute value length (fingerprints are the longest values)
pub const MAX_ATTRIBUTE_VALUE_LEN: usize = 96;

/// Capacity of the fixed in-memory attribute store (power of two)
pub const ATTRIBUTE_STORE_CAPACITY: usize = 8;

// =============================================================================
// Fingerprint Constants
// =============================================================================

/// Number of fields in a build fingerprint
pub const FINGERPRINT_FIELD_COUNT: usize = 7;
