// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Build fingerprint parsing
//!
//! A build fingerprint encodes build provenance as
//!
//! ```text
//! brand/product/device:release/build_id/incremental:build_type/tags
//! google/raven/raven:12/SQ1D.211205.016.A1/7957957:user/release-keys
//! ```

use core::fmt;

use q_common::Error;

/// Borrowed view of a parsed build fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildFingerprint<'a> {
    /// Brand (lowercase vendor)
    pub brand: &'a str,
    /// Product code name
    pub product: &'a str,
    /// Device code name
    pub device: &'a str,
    /// Platform release (e.g. `12`)
    pub release: &'a str,
    /// Build identifier (e.g. `SQ1D.211205.016.A1`)
    pub build_id: &'a str,
    /// Incremental build number
    pub incremental: &'a str,
    /// Build type (`user`, `userdebug`, `eng`)
    pub build_type: &'a str,
    /// Signing key class (e.g. `release-keys`)
    pub tags: &'a str,
}

impl<'a> BuildFingerprint<'a> {
    /// Parse a fingerprint string
    ///
    /// Fails with [`Error::InvalidFingerprint`] if any separator is missing,
    /// any field is empty, or extra separators are present.
    pub fn parse(raw: &'a str) -> Result<Self, Error> {
        let mut sections = raw.split(':');
        let (Some(names), Some(build), Some(kind), None) =
            (sections.next(), sections.next(), sections.next(), sections.next())
        else {
            return Err(Error::InvalidFingerprint);
        };

        let [brand, product, device] = split_exact::<3>(names)?;
        let [release, build_id, incremental] = split_exact::<3>(build)?;
        let [build_type, tags] = split_exact::<2>(kind)?;

        Ok(Self {
            brand,
            product,
            device,
            release,
            build_id,
            incremental,
            build_type,
            tags,
        })
    }
}

impl fmt::Display for BuildFingerprint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}:{}/{}/{}:{}/{}",
            self.brand,
            self.product,
            self.device,
            self.release,
            self.build_id,
            self.incremental,
            self.build_type,
            self.tags
        )
    }
}

fn split_exact<const N: usize>(section: &str) -> Result<[&str; N], Error> {
    let mut fields = [""; N];
    let mut parts = section.split('/');
    for field in &mut fields {
        match parts.next() {
            Some(part) if !part.is_empty() => *field = part,
            _ => return Err(Error::InvalidFingerprint),
        }
    }
    if parts.next().is_some() {
        return Err(Error::InvalidFingerprint);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAVEN: &str = "google/raven/raven:12/SQ1D.211205.016.A1/7957957:user/release-keys";

    #[test]
    fn test_parse_reference_fingerprint() {
        let fp = BuildFingerprint::parse(RAVEN).unwrap();
        assert_eq!(fp.brand, "google");
        assert_eq!(fp.product, "raven");
        assert_eq!(fp.device, "raven");
        assert_eq!(fp.release, "12");
        assert_eq!(fp.build_id, "SQ1D.211205.016.A1");
        assert_eq!(fp.incremental, "7957957");
        assert_eq!(fp.build_type, "user");
        assert_eq!(fp.tags, "release-keys");
    }

    #[test]
    fn test_rejects_missing_section() {
        assert_eq!(
            BuildFingerprint::parse("google/raven/raven:12/SQ1D/1"),
            Err(Error::InvalidFingerprint)
        );
    }

    #[test]
    fn test_rejects_empty_field() {
        assert_eq!(
            BuildFingerprint::parse("google//raven:12/SQ1D/1:user/release-keys"),
            Err(Error::InvalidFingerprint)
        );
    }

    #[test]
    fn test_rejects_extra_fields() {
        assert_eq!(
            BuildFingerprint::parse("google/raven/raven/x:12/SQ1D/1:user/release-keys"),
            Err(Error::InvalidFingerprint)
        );
        assert_eq!(
            BuildFingerprint::parse("google/raven/raven:12/SQ1D/1:user/release-keys:x"),
            Err(Error::InvalidFingerprint)
        );
    }

    #[test]
    fn test_bare_incremental_is_not_a_fingerprint() {
        assert_eq!(BuildFingerprint::parse("7957957"), Err(Error::InvalidFingerprint));
    }
}
