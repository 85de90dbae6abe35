// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **luach**, Gregorian → Hebrew date conversion.
//!
//! This crate exposes a flat C-compatible API: civil moments go in as plain
//! component structs plus a NUL-terminated zone name, and results come back
//! through caller-owned out-pointers.  Every fallible entry point returns a
//! [`LuachStatus`]; no Rust panic crosses the boundary.

mod calendar;
mod convert;
mod error;

pub use calendar::*;
pub use convert::*;
pub use error::*;

/// Run `$body`, mapping a caught panic to `$on_panic`.
#[macro_export]
#[doc(hidden)]
macro_rules! catch_panic {
    ($on_panic:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => $on_panic,
        }
    };
}

/// Returns the luach-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn luach_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
