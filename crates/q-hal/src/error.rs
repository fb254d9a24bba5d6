// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Host interface error types

use core::fmt;

/// Error reported by a host collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// Store has no attribute with this name
    UnknownAttribute,
    /// Attribute name exceeds store limits
    NameTooLong,
    /// Attribute value exceeds store limits
    ValueTooLong,
    /// Attribute is locked against writes
    AccessDenied,
    /// Store cannot hold another attribute
    StoreFull,
}

impl HalError {
    /// Get error code
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::UnknownAttribute => 0x0810,
            Self::NameTooLong => 0x0811,
            Self::ValueTooLong => 0x0812,
            Self::AccessDenied => 0x0813,
            Self::StoreFull => 0x0814,
        }
    }

    /// Get error description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownAttribute => "unknown attribute",
            Self::NameTooLong => "attribute name too long",
            Self::ValueTooLong => "attribute value too long",
            Self::AccessDenied => "attribute access denied",
            Self::StoreFull => "attribute store full",
        }
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:04X}] {}", self.code(), self.description())
    }
}

impl From<HalError> for q_common::Error {
    fn from(e: HalError) -> Self {
        match e {
            HalError::UnknownAttribute | HalError::NameTooLong => Self::UnknownAttribute,
            HalError::ValueTooLong => Self::AttributeValueTooLong,
            HalError::AccessDenied => Self::AttributeAccessDenied,
            HalError::StoreFull => Self::StorageFull,
        }
    }
}

/// HAL Result type
pub type HalResult<T> = Result<T, HalError>;
