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

//! The recoverable signal returned by checked value access.

/// A checked accessor was called while the error channel was live.
///
/// Carries the error payload that was found instead of a value: cloned out by
/// the borrowing accessors ([`Expected::value`](crate::Expected::value) and
/// friends), moved out by the consuming ones
/// ([`Expected::into_value`](crate::Expected::into_value)).
///
/// This is the one error this crate itself produces; everything else in the
/// taxonomy is either a compile error or a contract violation (a panic, or UB
/// behind `unsafe`).
pub struct AccessError<E> {
    error: E,
}

impl<E> AccessError<E> {
    /// Wraps the error payload found in place of a value.
    pub const fn new(error: E) -> Self {
        Self { error }
    }
    /// Borrows the carried error.
    pub const fn error(&self) -> &E {
        &self.error
    }
    /// Takes the carried error out.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E: Clone> Clone for AccessError<E> {
    fn clone(&self) -> Self {
        Self::new(self.error.clone())
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for AccessError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("AccessError").field(&self.error).finish()
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for AccessError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expected a value, found an error: {:?}", self.error)
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for AccessError<E> {}

impl<E: PartialEq<G>, G> PartialEq<AccessError<G>> for AccessError<E> {
    fn eq(&self, other: &AccessError<G>) -> bool {
        self.error == other.error
    }
}
impl<E: Eq> Eq for AccessError<E> {}
