// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Fixed-capacity in-memory implementations of the host traits
//!
//! [`FixedAttributeStore`] mirrors a build-attribute table: only fields it
//! was seeded with exist, and individual fields can be locked read-only.
//! [`CapturedCallContext`] owns a snapshot of frame names taken by a host
//! stack walker.

use core::ops::ControlFlow;

use heapless::{FnvIndexMap, String, Vec};
use q_common::constants::{
    ATTRIBUTE_STORE_CAPACITY, MAX_ATTRIBUTE_NAME_LEN, MAX_ATTRIBUTE_VALUE_LEN, MAX_CALL_FRAMES,
    MAX_FRAME_NAME_LEN, VERIFIER_FRAME_MARKER,
};

use crate::error::{HalError, HalResult};
use crate::traits::{AttributeStore, CallContextProvider};

type Name = String<MAX_ATTRIBUTE_NAME_LEN>;
type Value = String<MAX_ATTRIBUTE_VALUE_LEN>;

#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    locked: bool,
}

/// Attribute store backed by a fixed-size index map
#[derive(Debug, Clone, Default)]
pub struct FixedAttributeStore {
    slots: FnvIndexMap<Name, Slot, ATTRIBUTE_STORE_CAPACITY>,
    writes: u32,
}

impl FixedAttributeStore {
    /// Create an empty store (every write fails with `UnknownAttribute`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the host's real attribute values
    pub fn seeded(fields: &[(&str, &str)]) -> HalResult<Self> {
        let mut store = Self::new();
        for (name, value) in fields {
            store.define(name, value)?;
        }
        Ok(store)
    }

    /// Add a field, or reset its value if it already exists
    pub fn define(&mut self, name: &str, value: &str) -> HalResult<()> {
        let name = Name::try_from(name).map_err(|()| HalError::NameTooLong)?;
        let value = Value::try_from(value).map_err(|()| HalError::ValueTooLong)?;
        self.slots
            .insert(name, Slot { value, locked: false })
            .map_err(|_| HalError::StoreFull)?;
        Ok(())
    }

    /// Lock a field against further writes
    pub fn lock(&mut self, name: &str) -> HalResult<()> {
        let slot = self.slot_mut(name)?;
        slot.locked = true;
        Ok(())
    }

    /// Read a field
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, slot)| slot.value.as_str())
    }

    /// Number of successful writes since creation
    #[must_use]
    pub const fn write_count(&self) -> u32 {
        self.writes
    }

    /// Number of defined fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no fields are defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_mut(&mut self, name: &str) -> HalResult<&mut Slot> {
        self.slots
            .iter_mut()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, slot)| slot)
            .ok_or(HalError::UnknownAttribute)
    }
}

impl AttributeStore for FixedAttributeStore {
    fn set_attribute(&mut self, name: &str, value: &str) -> HalResult<()> {
        let value = Value::try_from(value).map_err(|()| HalError::ValueTooLong)?;
        let slot = self.slot_mut(name)?;
        if slot.locked {
            return Err(HalError::AccessDenied);
        }
        slot.value = value;
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}

/// Owned snapshot of a call context
///
/// Frames beyond [`MAX_CALL_FRAMES`] are dropped and names longer than
/// [`MAX_FRAME_NAME_LEN`] are shortened on a character boundary; either
/// marks the snapshot truncated. Every frame offered to [`Self::push`] is
/// checked against the watched marker (the verifier marker unless set with
/// [`Self::with_watch`]) before anything is dropped, so a match on the
/// watched marker survives truncation.
#[derive(Debug, Clone)]
pub struct CapturedCallContext {
    frames: Vec<String<MAX_FRAME_NAME_LEN>, MAX_CALL_FRAMES>,
    truncated: bool,
    watch: &'static str,
    watch_seen: bool,
}

impl Default for CapturedCallContext {
    fn default() -> Self {
        Self::with_watch(VERIFIER_FRAME_MARKER)
    }
}

impl CapturedCallContext {
    /// Create an empty context watching the verifier marker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty context watching `marker`
    #[must_use]
    pub const fn with_watch(marker: &'static str) -> Self {
        Self {
            frames: Vec::new(),
            truncated: false,
            watch: marker,
            watch_seen: false,
        }
    }

    /// Capture frames from any iterator of names (innermost first)
    pub fn capture<'a, I>(frames: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut context = Self::new();
        context.extend(frames);
        context
    }

    /// Append frames from any iterator of names
    pub fn extend<'a, I>(&mut self, frames: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for frame in frames {
            self.push(frame);
        }
    }

    /// Append the next outer frame
    ///
    /// Returns `false` if the frame was dropped or shortened.
    pub fn push(&mut self, frame: &str) -> bool {
        if !self.watch.is_empty() && frame.contains(self.watch) {
            self.watch_seen = true;
        }

        let mut name = String::new();
        for ch in frame.chars() {
            if name.push(ch).is_err() {
                self.truncated = true;
                break;
            }
        }
        let shortened = name.len() < frame.len();

        if self.frames.push(name).is_err() {
            self.truncated = true;
            return false;
        }
        !shortened
    }

    /// Whether frames were dropped or shortened during capture
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Marker checked against every pushed frame
    #[must_use]
    pub const fn watch(&self) -> &'static str {
        self.watch
    }
}

impl CallContextProvider for CapturedCallContext {
    fn visit_frames(&self, visitor: &mut dyn FnMut(&str) -> ControlFlow<()>) -> ControlFlow<()> {
        for frame in &self.frames {
            visitor(frame.as_str())?;
        }
        ControlFlow::Continue(())
    }

    fn any_frame_contains(&self, fragment: &str) -> bool {
        if self.watch_seen && fragment == self.watch {
            return true;
        }
        self.frames.iter().any(|frame| frame.contains(fragment))
    }

    fn depth(&self) -> usize {
        self.frames.len()
    }

    fn may_miss(&self, fragment: &str) -> bool {
        self.truncated && fragment != self.watch
    }
}
