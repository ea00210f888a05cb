//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! The two-channel payload storage underneath [`Expected`](crate::Expected).
//!
//! Exactly one of the two union fields is live at any time, and `has_value`
//! records which one. Every operation here either preserves that pairing or
//! re-establishes it before any user code (a payload's `Drop`) gets a chance
//! to unwind.

use core::mem::ManuallyDrop;
use core::ptr;

/// Overlapping storage for the two payloads.
#[repr(C)]
pub(crate) union Payload<T, E> {
    value: ManuallyDrop<T>,
    error: ManuallyDrop<E>,
}

/// A [`Payload`] union paired with its discriminant.
///
/// The discriminant is trusted: all `unsafe` accessors assume it names the
/// live field. Safe code can only reach these through [`crate::Expected`],
/// which never lets the two drift apart.
pub(crate) struct Channels<T, E> {
    has_value: bool,
    payload: Payload<T, E>,
}

impl<T, E> Channels<T, E> {
    /// Storage committed to the value channel.
    pub(crate) const fn new_value(value: T) -> Self {
        Self {
            has_value: true,
            payload: Payload {
                value: ManuallyDrop::new(value),
            },
        }
    }

    /// Storage committed to the error channel.
    pub(crate) const fn new_error(error: E) -> Self {
        Self {
            has_value: false,
            payload: Payload {
                error: ManuallyDrop::new(error),
            },
        }
    }

    pub(crate) const fn has_value(&self) -> bool {
        self.has_value
    }

    /// # Safety
    /// The value channel must be live.
    pub(crate) unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.has_value);
        &self.payload.value
    }

    /// # Safety
    /// The value channel must be live.
    pub(crate) unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value);
        &mut self.payload.value
    }

    /// # Safety
    /// The error channel must be live.
    pub(crate) unsafe fn error_unchecked(&self) -> &E {
        debug_assert!(!self.has_value);
        &self.payload.error
    }

    /// # Safety
    /// The error channel must be live.
    pub(crate) unsafe fn error_unchecked_mut(&mut self) -> &mut E {
        debug_assert!(!self.has_value);
        &mut self.payload.error
    }

    /// Moves the value payload out, leaving the storage logically dead.
    ///
    /// # Safety
    /// The value channel must be live, and the caller must ensure the storage
    /// is never dropped nor accessed again (`mem::forget` the owner).
    pub(crate) unsafe fn read_value(&self) -> T {
        debug_assert!(self.has_value);
        ManuallyDrop::into_inner(ptr::read(&self.payload.value))
    }

    /// Moves the error payload out, leaving the storage logically dead.
    ///
    /// # Safety
    /// The error channel must be live, and the caller must ensure the storage
    /// is never dropped nor accessed again (`mem::forget` the owner).
    pub(crate) unsafe fn read_error(&self) -> E {
        debug_assert!(!self.has_value);
        ManuallyDrop::into_inner(ptr::read(&self.payload.error))
    }

    /// Reinitializes the storage into the value channel.
    ///
    /// `value` arrives fully constructed, so a panicking construction happens
    /// at the call site and never reaches the storage. The old payload is
    /// read out first and dropped only once the new payload and discriminant
    /// are in place: should its `Drop` unwind, the storage is already
    /// coherent in the value channel.
    pub(crate) fn replace_with_value(&mut self, value: T) -> &mut T {
        if self.has_value {
            // mem::replace writes the new payload before the old one drops,
            // so a panicking Drop still leaves the channel live.
            unsafe { drop(core::mem::replace(&mut *self.payload.value, value)) };
        } else {
            unsafe {
                let old = ptr::read(&self.payload.error);
                ptr::write(ptr::addr_of_mut!(self.payload.value), ManuallyDrop::new(value));
                self.has_value = true;
                drop(ManuallyDrop::into_inner(old));
            }
        }
        unsafe { self.value_unchecked_mut() }
    }

    /// Reinitializes the storage into the error channel.
    ///
    /// Same drop-last ordering as [`Self::replace_with_value`].
    pub(crate) fn replace_with_error(&mut self, error: E) -> &mut E {
        if self.has_value {
            unsafe {
                let old = ptr::read(&self.payload.value);
                ptr::write(ptr::addr_of_mut!(self.payload.error), ManuallyDrop::new(error));
                self.has_value = false;
                drop(ManuallyDrop::into_inner(old));
            }
        } else {
            unsafe { drop(core::mem::replace(&mut *self.payload.error, error)) };
        }
        unsafe { self.error_unchecked_mut() }
    }

    /// Swaps two storages, channel-aware.
    ///
    /// Matching channels swap the payloads in place. Mismatched channels move
    /// both payloads into locals and write each into the other side; no user
    /// code runs between the reads and the writes, so an unwind cannot catch
    /// either side mid-switch.
    pub(crate) fn swap(&mut self, other: &mut Self) {
        match (self.has_value, other.has_value) {
            (true, true) => unsafe {
                core::mem::swap(&mut *self.payload.value, &mut *other.payload.value)
            },
            (false, false) => unsafe {
                core::mem::swap(&mut *self.payload.error, &mut *other.payload.error)
            },
            (true, false) => unsafe { Self::swap_mismatched(self, other) },
            (false, true) => unsafe { Self::swap_mismatched(other, self) },
        }
    }

    /// # Safety
    /// `with_value` must be live in the value channel and `with_error` in the
    /// error channel.
    unsafe fn swap_mismatched(with_value: &mut Self, with_error: &mut Self) {
        let value = ptr::read(&with_value.payload.value);
        let error = ptr::read(&with_error.payload.error);
        ptr::write(ptr::addr_of_mut!(with_value.payload.error), error);
        with_value.has_value = false;
        ptr::write(ptr::addr_of_mut!(with_error.payload.value), value);
        with_error.has_value = true;
    }

    /// Drops the live payload in place. The discriminant is left untouched.
    ///
    /// # Safety
    /// Must be called at most once, with no payload access afterwards; this
    /// is the tail of the owner's `Drop`.
    pub(crate) unsafe fn drop_live(&mut self) {
        if self.has_value {
            ManuallyDrop::drop(&mut self.payload.value);
        } else {
            ManuallyDrop::drop(&mut self.payload.error);
        }
    }
}
