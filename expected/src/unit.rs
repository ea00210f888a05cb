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

//! Extras for the payload-less value channel.

use crate::access::AccessError;
use crate::expected::Expected;

/// `Expected<(), E>`: the value channel carries no data, only the fact that
/// there is no error. The generic surface still applies; these supplements
/// drop the pointless `()` plumbing from the common calls.
impl<E> Expected<(), E> {
    /// Constructs into the (empty) value channel.
    pub const fn succeed() -> Self {
        Self::new(())
    }

    /// Checked channel test, the payload-less counterpart of
    /// [`value`](Self::value).
    ///
    /// # Errors
    /// [`AccessError`] carrying a clone of the stored error if the error
    /// channel is live.
    pub fn check(&self) -> core::result::Result<(), AccessError<E>>
    where
        E: Clone,
    {
        self.match_ref(|_| Ok(()), |error| Err(AccessError::new(error.clone())))
    }

    /// [`and_then`](Self::and_then) with a zero-argument continuation,
    /// naming per [`bool::then`].
    pub fn then<U, F: FnOnce() -> Expected<U, E>>(self, f: F) -> Expected<U, E> {
        self.and_then(move |()| f())
    }

    /// [`map`](Self::map) with a zero-argument producer.
    pub fn then_map<U, F: FnOnce() -> U>(self, f: F) -> Expected<U, E> {
        self.map(move |()| f())
    }
}
