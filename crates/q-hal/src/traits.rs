// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Host interface trait definitions
//!
//! The props core never touches the OS directly. Hosts implement these
//! traits over their build-attribute storage and stack walker.

use core::ops::ControlFlow;

use crate::error::HalResult;

/// Process-global build attribute storage
pub trait AttributeStore {
    /// Overwrite one attribute
    ///
    /// # Arguments
    /// * `name` - Host field name (e.g. `FINGERPRINT`)
    /// * `value` - New value
    ///
    /// # Notes
    /// A rejected write must leave every other attribute unchanged.
    fn set_attribute(&mut self, name: &str, value: &str) -> HalResult<()>;
}

impl<T: AttributeStore + ?Sized> AttributeStore for &mut T {
    fn set_attribute(&mut self, name: &str, value: &str) -> HalResult<()> {
        (**self).set_attribute(name, value)
    }
}

/// Source of the current call context
///
/// Frames are identified by name (class, module or symbol) and visited
/// innermost first.
pub trait CallContextProvider {
    /// Visit frames until the visitor breaks
    ///
    /// Returns `ControlFlow::Break` if the visitor stopped early.
    fn visit_frames(&self, visitor: &mut dyn FnMut(&str) -> ControlFlow<()>) -> ControlFlow<()>;

    /// Check whether any frame name contains `fragment`
    fn any_frame_contains(&self, fragment: &str) -> bool {
        self.visit_frames(&mut |frame| {
            if frame.contains(fragment) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Number of frames in the context
    fn depth(&self) -> usize {
        let mut depth = 0;
        let _ = self.visit_frames(&mut |_| {
            depth += 1;
            ControlFlow::Continue(())
        });
        depth
    }

    /// Whether a negative [`Self::any_frame_contains`] answer for
    /// `fragment` may be wrong because frames were lost during capture
    fn may_miss(&self, _fragment: &str) -> bool {
        false
    }
}

impl<T: CallContextProvider + ?Sized> CallContextProvider for &T {
    fn visit_frames(&self, visitor: &mut dyn FnMut(&str) -> ControlFlow<()>) -> ControlFlow<()> {
        (**self).visit_frames(visitor)
    }

    fn any_frame_contains(&self, fragment: &str) -> bool {
        (**self).any_frame_contains(fragment)
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }

    fn may_miss(&self, fragment: &str) -> bool {
        (**self).may_miss(fragment)
    }
}

impl CallContextProvider for [&str] {
    fn visit_frames(&self, visitor: &mut dyn FnMut(&str) -> ControlFlow<()>) -> ControlFlow<()> {
        for frame in self {
            visitor(frame)?;
        }
        ControlFlow::Continue(())
    }
}

impl<const N: usize> CallContextProvider for [&str; N] {
    fn visit_frames(&self, visitor: &mut dyn FnMut(&str) -> ControlFlow<()>) -> ControlFlow<()> {
        self.as_slice().visit_frames(visitor)
    }
}
