// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Integration tests for q-hal
//!
//! Tests for the host abstraction layer: error codes and conversion, the
//! fixed attribute store and call-context providers.

mod error_tests {
    use q_hal::HalError;
    use std::collections::HashSet;

    const ALL: [HalError; 5] = [
        HalError::UnknownAttribute,
        HalError::NameTooLong,
        HalError::ValueTooLong,
        HalError::AccessDenied,
        HalError::StoreFull,
    ];

    #[test]
    fn test_all_error_codes_are_unique() {
        let unique: HashSet<u16> = ALL.iter().map(HalError::code).collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn test_all_errors_in_0x08xx_range() {
        for error in ALL {
            assert_eq!(error.code() & 0xFF00, 0x0800, "{error:?}");
        }
    }

    #[test]
    fn test_store_errors_convert_to_store_errors() {
        for error in [
            HalError::UnknownAttribute,
            HalError::ValueTooLong,
            HalError::AccessDenied,
            HalError::StoreFull,
        ] {
            let common: q_common::Error = error.into();
            assert!(common.is_store_error(), "{error:?} -> {common:?}");
        }
    }

    #[test]
    fn test_display_includes_code() {
        assert_eq!(
            HalError::AccessDenied.to_string(),
            "[0x0813] attribute access denied"
        );
    }
}

mod store_tests {
    use q_hal::{AttributeStore, FixedAttributeStore, HalError};

    fn build_store() -> FixedAttributeStore {
        FixedAttributeStore::seeded(&[
            ("BRAND", "acme"),
            ("MANUFACTURER", "Acme"),
            ("DEVICE", "anvil"),
            ("PRODUCT", "anvil"),
            ("MODEL", "Anvil 1"),
            ("FINGERPRINT", "acme/anvil/anvil:12/AB1/100:user/release-keys"),
        ])
        .unwrap()
    }

    #[test]
    fn test_seeded_fields_are_readable() {
        let store = build_store();
        assert_eq!(store.len(), 6);
        assert_eq!(store.get("MODEL"), Some("Anvil 1"));
        assert_eq!(store.get("SERIAL"), None);
    }

    #[test]
    fn test_write_replaces_value() {
        let mut store = build_store();
        store.set_attribute("MODEL", "Pixel 5").unwrap();
        assert_eq!(store.get("MODEL"), Some("Pixel 5"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_rejected_write_leaves_other_fields() {
        let mut store = build_store();
        store.lock("DEVICE").unwrap();
        assert_eq!(store.set_attribute("DEVICE", "raven"), Err(HalError::AccessDenied));
        store.set_attribute("PRODUCT", "raven").unwrap();
        assert_eq!(store.get("DEVICE"), Some("anvil"));
        assert_eq!(store.get("PRODUCT"), Some("raven"));
    }

    #[test]
    fn test_lock_unknown_field_fails() {
        let mut store = build_store();
        assert_eq!(store.lock("SERIAL"), Err(HalError::UnknownAttribute));
    }

    #[test]
    fn test_store_capacity_is_bounded() {
        let mut store = build_store();
        store.define("HARDWARE", "anvil").unwrap();
        store.define("BOARD", "anvil").unwrap();
        assert_eq!(store.define("BOOTLOADER", "x"), Err(HalError::StoreFull));
    }

    fn write_brand<S: AttributeStore>(mut store: S) {
        store.set_attribute("BRAND", "google").unwrap();
    }

    #[test]
    fn test_writes_through_mutable_reference() {
        let mut store = build_store();
        write_brand(&mut store);
        assert_eq!(store.get("BRAND"), Some("google"));
    }
}

mod context_tests {
    use q_hal::{CallContextProvider, CapturedCallContext};

    #[test]
    fn test_slice_context_matches_fragment() {
        let frames = [
            "android.security.keystore2.AndroidKeyStoreSpi",
            "com.google.ccc.abuse.droidguard.DroidGuard",
            "java.lang.Thread",
        ];
        assert!(frames.any_frame_contains("DroidGuard"));
        assert!(!frames.any_frame_contains("SafetyNetClient"));
        assert_eq!(frames.depth(), 3);
    }

    #[test]
    fn test_empty_context_matches_nothing() {
        let frames: [&str; 0] = [];
        assert!(!frames.any_frame_contains("DroidGuard"));
        assert_eq!(frames.depth(), 0);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let frames = ["com.google.ccc.abuse.droidguard.Runner"];
        assert!(!frames.any_frame_contains("DroidGuard"));
    }

    #[test]
    fn test_captured_context_preserves_order() {
        let context = CapturedCallContext::capture(["inner", "middle", "outer"]);
        let mut seen = Vec::new();
        let _ = context.visit_frames(&mut |frame| {
            seen.push(frame.to_owned());
            std::ops::ControlFlow::Continue(())
        });
        assert_eq!(seen, ["inner", "middle", "outer"]);
    }

    #[test]
    fn test_visit_stops_at_break() {
        let context = CapturedCallContext::capture(["a", "b", "c"]);
        let mut visited = 0;
        let flow = context.visit_frames(&mut |frame| {
            visited += 1;
            if frame == "b" {
                std::ops::ControlFlow::Break(())
            } else {
                std::ops::ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(visited, 2);
    }
}
