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

//! A value-or-error container with explicit channel storage.
//!
//! [`Expected<T, E>`] keeps either a `T` or an `E` in overlapping storage
//! with an explicit discriminant, switches channels in place under
//! [`insert`](Expected::insert)/[`swap`](Expected::swap) without ever
//! becoming double-live or dead, and chains through
//! [`and_then`](Expected::and_then)/[`or_else`](Expected::or_else)/
//! [`map`](Expected::map)/[`map_err`](Expected::map_err).
//!
//! [`Unexpected`] marks an incoming payload as bound for the error channel;
//! [`AccessError`] is the recoverable signal the checked accessors return
//! when the error channel is live.
//!
//! ```
//! use expected::{Expected, Unexpected};
//!
//! let doubled = Expected::<i32, String>::new(5).and_then(|v| Expected::new(v * 2));
//! assert_eq!(doubled.value().copied(), Ok(10));
//!
//! let failed: Expected<i32, String> = Unexpected::new("bad".to_owned()).into();
//! assert_eq!(failed.value().unwrap_err().error(), "bad");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod access;
pub use access::AccessError;
pub mod expected;
pub use expected::Expected;
pub mod unexpected;
pub use unexpected::Unexpected;

mod storage;
mod unit;
