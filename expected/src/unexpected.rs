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

//! The error-channel disambiguator.

use core::cmp::Ordering;

/// An error value on its way into an [`Expected`](crate::Expected).
///
/// Wrapping the error marks it as bound for the error channel at call sites
/// where the payload types could otherwise be confused. The wrapped value is
/// immutable: it can be borrowed or taken out, never modified in place.
#[repr(transparent)]
pub struct Unexpected<E> {
    error: E,
}

impl<E> Unexpected<E> {
    /// Wraps `error` for the error channel.
    pub const fn new(error: E) -> Self {
        Self { error }
    }
    /// Borrows the wrapped error.
    pub const fn error(&self) -> &E {
        &self.error
    }
    /// Takes the wrapped error back out.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E> From<E> for Unexpected<E> {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl<E: Clone> Clone for Unexpected<E> {
    fn clone(&self) -> Self {
        Self::new(self.error.clone())
    }
}
impl<E: Copy> Copy for Unexpected<E> {}

impl<E: core::fmt::Debug> core::fmt::Debug for Unexpected<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Unexpected").field(&self.error).finish()
    }
}

impl<E: core::hash::Hash> core::hash::Hash for Unexpected<E> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.error.hash(state)
    }
}

impl<E: PartialEq<G>, G> PartialEq<Unexpected<G>> for Unexpected<E> {
    fn eq(&self, other: &Unexpected<G>) -> bool {
        self.error == other.error
    }
}
impl<E: Eq> Eq for Unexpected<E> {}

impl<E: PartialOrd<G>, G> PartialOrd<Unexpected<G>> for Unexpected<E> {
    fn partial_cmp(&self, other: &Unexpected<G>) -> Option<Ordering> {
        self.error.partial_cmp(&other.error)
    }
}
impl<E: Ord> Ord for Unexpected<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.cmp(&other.error)
    }
}
