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

//! A value, or an error. Never both, never neither.

use core::mem::ManuallyDrop;

use crate::access::AccessError;
use crate::storage::Channels;
use crate::unexpected::Unexpected;

/// A value-or-error container with explicit channel storage.
///
/// `Expected<T, E>` holds either a `T` (the value channel) or an `E` (the
/// error channel) in the same storage, and can switch channels in place
/// through [`insert`](Self::insert), [`insert_error`](Self::insert_error) and
/// [`swap`](Self::swap). Exactly one payload is live at every observable
/// instant, including while unwinding out of a payload's `Drop` mid-switch.
///
/// Access comes in three registers:
/// - checked: [`value`](Self::value) and friends return
///   `Result<_, AccessError<E>>` and are always safe to call;
/// - asserting: [`unwrap`](Self::unwrap)/[`expect`](Self::expect) panic on
///   the wrong channel;
/// - unchecked: the `unsafe _unchecked` accessors trust the caller and are
///   UB on the wrong channel (asserted in debug builds).
pub struct Expected<T, E> {
    channels: Channels<T, E>,
}

impl<T, E> Expected<T, E> {
    /// Constructs into the value channel.
    pub const fn new(value: T) -> Self {
        Self {
            channels: Channels::new_value(value),
        }
    }
    /// Constructs into the error channel.
    pub const fn from_error(error: E) -> Self {
        Self {
            channels: Channels::new_error(error),
        }
    }

    /// Returns `true` if the value channel is live.
    pub const fn has_value(&self) -> bool {
        self.channels.has_value()
    }
    /// Returns `true` if the error channel is live.
    pub const fn is_error(&self) -> bool {
        !self.has_value()
    }

    /// Equivalent to `match &self`. If you need multiple branches to obtain
    /// mutable access or ownership of a local, let the closures borrow it.
    pub fn match_ref<'a, U, FnVal: FnOnce(&'a T) -> U, FnErr: FnOnce(&'a E) -> U>(
        &'a self,
        value: FnVal,
        error: FnErr,
    ) -> U {
        if self.has_value() {
            value(unsafe { self.channels.value_unchecked() })
        } else {
            error(unsafe { self.channels.error_unchecked() })
        }
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut<'a, U, FnVal: FnOnce(&'a mut T) -> U, FnErr: FnOnce(&'a mut E) -> U>(
        &'a mut self,
        value: FnVal,
        error: FnErr,
    ) -> U {
        if self.has_value() {
            value(unsafe { self.channels.value_unchecked_mut() })
        } else {
            error(unsafe { self.channels.error_unchecked_mut() })
        }
    }
    /// Equivalent to `match self`.
    pub fn match_owned<U, FnVal: FnOnce(T) -> U, FnErr: FnOnce(E) -> U>(
        self,
        value: FnVal,
        error: FnErr,
    ) -> U {
        let has_value = self.has_value();
        let this = ManuallyDrop::new(self);
        if has_value {
            value(unsafe { this.channels.read_value() })
        } else {
            error(unsafe { this.channels.read_error() })
        }
    }

    /// Converts to a standard [`Result`](core::result::Result) of references.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_ref(&self) -> core::result::Result<&T, &E> {
        self.match_ref(Ok, Err)
    }
    /// Converts to a standard [`Result`](core::result::Result) of mutable references.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_mut(&mut self) -> core::result::Result<&mut T, &mut E> {
        self.match_mut(Ok, Err)
    }

    /// Checked access to the value channel.
    ///
    /// # Errors
    /// [`AccessError`] carrying a clone of the stored error if the error
    /// channel is live.
    pub fn value(&self) -> core::result::Result<&T, AccessError<E>>
    where
        E: Clone,
    {
        self.match_ref(Ok, |error| Err(AccessError::new(error.clone())))
    }
    /// Checked mutable access to the value channel.
    ///
    /// # Errors
    /// [`AccessError`] carrying a clone of the stored error if the error
    /// channel is live.
    pub fn value_mut(&mut self) -> core::result::Result<&mut T, AccessError<E>>
    where
        E: Clone,
    {
        self.match_mut(Ok, |error| Err(AccessError::new(error.clone())))
    }
    /// Checked consuming access to the value channel.
    ///
    /// # Errors
    /// [`AccessError`] carrying the stored error itself if the error channel
    /// is live.
    pub fn into_value(self) -> core::result::Result<T, AccessError<E>> {
        self.match_owned(Ok, |error| Err(AccessError::new(error)))
    }

    /// Returns the value if the value channel is live, `None` otherwise.
    pub fn ok(self) -> Option<T> {
        self.match_owned(Some, |_| None)
    }
    /// Returns the error if the error channel is live, `None` otherwise.
    pub fn err(self) -> Option<E> {
        self.match_owned(|_| None, Some)
    }
    /// Returns the value by reference if the value channel is live, `None` otherwise.
    pub fn ok_ref(&self) -> Option<&T> {
        self.match_ref(Some, |_| None)
    }
    /// Returns the error by reference if the error channel is live, `None` otherwise.
    pub fn err_ref(&self) -> Option<&E> {
        self.match_ref(|_| None, Some)
    }
    /// Returns the value by mutable reference if the value channel is live, `None` otherwise.
    pub fn ok_mut(&mut self) -> Option<&mut T> {
        self.match_mut(Some, |_| None)
    }
    /// Returns the error by mutable reference if the error channel is live, `None` otherwise.
    pub fn err_mut(&mut self) -> Option<&mut E> {
        self.match_mut(|_| None, Some)
    }

    /// Returns the value if the value channel is live, calling `f` on the error otherwise.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        self.match_owned(|value| value, f)
    }
    /// Returns the value if the value channel is live, `fallback` otherwise.
    pub fn unwrap_or(self, fallback: T) -> T {
        self.unwrap_or_else(move |_| fallback)
    }
    /// Returns the value if the value channel is live, `T::default()` otherwise.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }
    /// Returns the error if the error channel is live, calling `f` on the value otherwise.
    pub fn unwrap_err_or_else<F: FnOnce(T) -> E>(self, f: F) -> E {
        self.match_owned(f, |error| error)
    }
    /// Returns the error if the error channel is live, `fallback` otherwise.
    pub fn unwrap_err_or(self, fallback: E) -> E {
        self.unwrap_err_or_else(move |_| fallback)
    }

    /// # Panics
    /// If the error channel is live.
    pub fn unwrap(self) -> T
    where
        E: core::fmt::Debug,
    {
        self.unwrap_or_else(|e| panic!("Expected::unwrap called on the error channel: {e:?}"))
    }
    /// # Panics
    /// With `msg` if the error channel is live.
    pub fn expect(self, msg: &str) -> T
    where
        E: core::fmt::Debug,
    {
        self.unwrap_or_else(|e| panic!("{msg}: {e:?}"))
    }
    /// # Panics
    /// If the value channel is live.
    pub fn unwrap_err(self) -> E
    where
        T: core::fmt::Debug,
    {
        self.unwrap_err_or_else(|v| panic!("Expected::unwrap_err called on the value channel: {v:?}"))
    }
    /// # Panics
    /// With `msg` if the value channel is live.
    pub fn expect_err(self, msg: &str) -> E
    where
        T: core::fmt::Debug,
    {
        self.unwrap_err_or_else(|v| panic!("{msg}: {v:?}"))
    }

    /// # Safety
    /// Called while the error channel is live, this is Undefined Behaviour.
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.has_value());
        self.unwrap_or_else(|_| unsafe { core::hint::unreachable_unchecked() })
    }
    /// # Safety
    /// Called while the value channel is live, this is Undefined Behaviour.
    pub unsafe fn unwrap_err_unchecked(self) -> E {
        debug_assert!(self.is_error());
        self.unwrap_err_or_else(|_| unsafe { core::hint::unreachable_unchecked() })
    }
    /// # Safety
    /// The value channel must be live.
    pub unsafe fn value_unchecked(&self) -> &T {
        unsafe { self.channels.value_unchecked() }
    }
    /// # Safety
    /// The value channel must be live.
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        unsafe { self.channels.value_unchecked_mut() }
    }
    /// # Safety
    /// The error channel must be live.
    pub unsafe fn error_unchecked(&self) -> &E {
        unsafe { self.channels.error_unchecked() }
    }
    /// # Safety
    /// The error channel must be live.
    pub unsafe fn error_unchecked_mut(&mut self) -> &mut E {
        unsafe { self.channels.error_unchecked_mut() }
    }

    /// Returns `true` if the value channel is live and its payload equals `value`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.match_ref(|v| v == value, |_| false)
    }
    /// Returns `true` if the error channel is live and its payload equals `error`.
    pub fn contains_err<G>(&self, error: &G) -> bool
    where
        E: PartialEq<G>,
    {
        self.match_ref(|_| false, |e| e == error)
    }

    /// Reinitializes into the value channel, dropping whatever was live.
    ///
    /// The old payload is dropped exactly once, and only after `value` is in
    /// place: an unwind out of its `Drop` leaves `self` holding `value`.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.channels.replace_with_value(value)
    }
    /// Reinitializes into the error channel, dropping whatever was live.
    pub fn insert_error(&mut self, error: E) -> &mut E {
        self.channels.replace_with_error(error)
    }
    /// Swaps contents with `other`, channel-aware.
    ///
    /// Matching channels delegate to the payloads' own swap; mismatched
    /// channels move both payloads across. `swap` is its own inverse.
    pub fn swap(&mut self, other: &mut Self) {
        self.channels.swap(&mut other.channels)
    }

    /// Applies a computation to the value channel.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Expected<U, E> {
        self.match_owned(move |value| Expected::new(f(value)), Expected::from_error)
    }
    /// Applies a computation to the error channel.
    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Expected<T, G> {
        self.match_owned(Expected::new, move |error| Expected::from_error(f(error)))
    }
    /// Applies a fallible computation to the value channel.
    ///
    /// `f` runs exactly once if the value channel is live, and never
    /// otherwise; a live error is carried through untouched.
    pub fn and_then<U, F: FnOnce(T) -> Expected<U, E>>(self, f: F) -> Expected<U, E> {
        self.match_owned(f, Expected::from_error)
    }
    /// Applies a recovery computation to the error channel.
    ///
    /// `f` runs exactly once if the error channel is live, and never
    /// otherwise; a live value is carried through untouched.
    pub fn or_else<G, F: FnOnce(E) -> Expected<T, G>>(self, f: F) -> Expected<T, G> {
        self.match_owned(Expected::new, f)
    }

    /// Converts both payload types, mirroring the live channel.
    pub fn convert<T2: From<T>, E2: From<E>>(self) -> Expected<T2, E2> {
        self.match_owned(
            |value| Expected::new(value.into()),
            |error| Expected::from_error(error.into()),
        )
    }
}

impl<T, E> Drop for Expected<T, E> {
    fn drop(&mut self) {
        unsafe { self.channels.drop_live() }
    }
}

impl<T: Clone, E: Clone> Clone for Expected<T, E> {
    fn clone(&self) -> Self {
        self.match_ref(
            |value| Self::new(value.clone()),
            |error| Self::from_error(error.clone()),
        )
    }
}

impl<T: Default, E> Default for Expected<T, E> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: core::fmt::Debug, E: core::fmt::Debug> core::fmt::Debug for Expected<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_ref() {
            Ok(value) => f.debug_tuple("Expected").field(value).finish(),
            Err(error) => f.debug_tuple("Unexpected").field(error).finish(),
        }
    }
}

impl<T: core::hash::Hash, E: core::hash::Hash> core::hash::Hash for Expected<T, E> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self.as_ref() {
            Ok(value) => {
                true.hash(state);
                value.hash(state);
            }
            Err(error) => {
                false.hash(state);
                error.hash(state);
            }
        }
    }
}

impl<T, E, U, G> PartialEq<Expected<U, G>> for Expected<T, E>
where
    T: PartialEq<U>,
    E: PartialEq<G>,
{
    fn eq(&self, other: &Expected<U, G>) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(a), Err(b)) => a == b,
            _ => false,
        }
    }
}
impl<T: Eq, E: Eq> Eq for Expected<T, E> {}

impl<T, E, G> PartialEq<Unexpected<G>> for Expected<T, E>
where
    E: PartialEq<G>,
{
    fn eq(&self, other: &Unexpected<G>) -> bool {
        self.match_ref(|_| false, |error| error == other.error())
    }
}

impl<T, E, G> From<Unexpected<G>> for Expected<T, E>
where
    E: From<G>,
{
    fn from(unexpected: Unexpected<G>) -> Self {
        Self::from_error(unexpected.into_error().into())
    }
}

impl<T, E> From<core::result::Result<T, E>> for Expected<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::new(value),
            Err(error) => Self::from_error(error),
        }
    }
}
impl<T, E> From<Expected<T, E>> for core::result::Result<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        expected.match_owned(Ok, Err)
    }
}
